//! Request/reply wrapper around a service transport.
//!
//! `ServiceCaller::call` opens a session for the endpoint, waits (bounded) for
//! the service to be advertised, sends exactly one request and returns the
//! reply. The session is dropped on every exit path.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use roslibrust::RosServiceType;
use tracing::{debug, trace};

use ros2controlcli_core::error::{CoreError, Result};

/// How long to wait for an endpoint to become reachable.
pub const DEFAULT_READINESS_TIMEOUT: Duration = Duration::from_secs(2);

const READINESS_POLL: Duration = Duration::from_millis(100);

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub type TransportFuture<'a, T> =
    Pin<Box<dyn Future<Output = std::result::Result<T, BoxError>> + Send + 'a>>;

/// Minimal service-call surface of a middleware connection.
pub trait ServiceTransport: Send + Sync {
    /// Whether `service` is currently advertised.
    fn is_advertised<'a>(&'a self, service: &'a str) -> TransportFuture<'a, bool>;

    /// Send one request and wait for its reply.
    fn call<'a, S: RosServiceType>(
        &'a self,
        service: &'a str,
        request: S::Request,
    ) -> TransportFuture<'a, S::Response>;
}

/// Scoped client handle for one endpoint.
///
/// Lives for exactly one call; dropping it releases the endpoint binding.
#[derive(Debug)]
pub struct ClientSession {
    service: String,
    opened: Instant,
}

impl ClientSession {
    pub fn open(service: &str) -> Self {
        debug!(service, "opening client session");
        Self {
            service: service.to_string(),
            opened: Instant::now(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Drop for ClientSession {
    fn drop(&mut self) {
        trace!(
            service = %self.service,
            elapsed = ?self.opened.elapsed(),
            "client session released"
        );
    }
}

/// RPC caller bound to a shared transport.
pub struct ServiceCaller<'t, T> {
    transport: &'t T,
    readiness_timeout: Duration,
}

impl<'t, T: ServiceTransport> ServiceCaller<'t, T> {
    pub fn new(transport: &'t T) -> Self {
        Self {
            transport,
            readiness_timeout: DEFAULT_READINESS_TIMEOUT,
        }
    }

    pub fn with_readiness_timeout(mut self, timeout: Duration) -> Self {
        self.readiness_timeout = timeout;
        self
    }

    /// Call `service` once.
    ///
    /// Errors:
    /// - `ServiceUnavailable` if the endpoint is not advertised within the
    ///   readiness timeout (nothing is sent);
    /// - `RemoteCallFailed` if the transport fails while the request is in flight.
    pub async fn call<S: RosServiceType>(
        &self,
        service: &str,
        request: S::Request,
    ) -> Result<S::Response> {
        let session = ClientSession::open(service);
        self.wait_until_ready(&session).await?;

        debug!(service, "requester: making request: {request:?}");
        self.transport
            .call::<S>(session.service(), request)
            .await
            .map_err(|err| CoreError::remote_call_failed(session.service(), err))
    }

    async fn wait_until_ready(&self, session: &ClientSession) -> Result<()> {
        let service = session.service();
        let poll = async {
            let mut announced = false;
            loop {
                match self.transport.is_advertised(service).await {
                    Ok(true) => return,
                    Ok(false) => {}
                    Err(err) => debug!(service, "readiness check failed: {err}"),
                }
                if !announced {
                    debug!("waiting for service {service} to become available...");
                    announced = true;
                }
                tokio::time::sleep(READINESS_POLL).await;
            }
        };

        tokio::time::timeout(self.readiness_timeout, poll)
            .await
            .map_err(|_| CoreError::service_unavailable(service))
    }
}
