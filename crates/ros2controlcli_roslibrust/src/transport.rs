//! Process-wide rosbridge connection.

use roslibrust::rosbridge::ClientHandle;
use roslibrust::RosServiceType;
use tracing::{debug, info};

use crate::caller::{BoxError, ServiceTransport, TransportFuture};
use crate::msgs::rosapi::{Services, ServicesRequest};
use crate::services::ROSAPI_SERVICES;

/// One rosbridge connection shared by every call of an invocation.
///
/// Opened once at process entry; dropping it closes the connection.
pub struct Transport {
    client: ClientHandle,
    bridge_url: String,
}

impl Transport {
    pub async fn connect(bridge_url: &str) -> roslibrust::Result<Self> {
        let client = ClientHandle::new(bridge_url).await?;
        info!(bridge = bridge_url, "connected to rosbridge");
        Ok(Self {
            client,
            bridge_url: bridge_url.to_string(),
        })
    }
}

impl Drop for Transport {
    fn drop(&mut self) {
        debug!(bridge = %self.bridge_url, "closing rosbridge connection");
    }
}

impl ServiceTransport for ClientHandle {
    fn is_advertised<'a>(&'a self, service: &'a str) -> TransportFuture<'a, bool> {
        Box::pin(async move {
            let reply = self
                .call_service::<Services>(ROSAPI_SERVICES, ServicesRequest {})
                .await?;
            Ok::<_, BoxError>(reply.services.iter().any(|s| s == service))
        })
    }

    fn call<'a, S: RosServiceType>(
        &'a self,
        service: &'a str,
        request: S::Request,
    ) -> TransportFuture<'a, S::Response> {
        Box::pin(async move { Ok::<_, BoxError>(self.call_service::<S>(service, request).await?) })
    }
}

impl ServiceTransport for Transport {
    fn is_advertised<'a>(&'a self, service: &'a str) -> TransportFuture<'a, bool> {
        self.client.is_advertised(service)
    }

    fn call<'a, S: RosServiceType>(
        &'a self,
        service: &'a str,
        request: S::Request,
    ) -> TransportFuture<'a, S::Response> {
        <ClientHandle as ServiceTransport>::call::<S>(&self.client, service, request)
    }
}
