//! `ControllerManager` over controller_manager_msgs services.

use ros2controlcli_core::controller::ManagerFuture;
use ros2controlcli_core::{
    ControllerManager, ControllerSnapshot, LoadOperation, Outcome, SwitchRequest,
};

use crate::caller::{ServiceCaller, ServiceTransport};
use crate::msgs::controller_manager_msgs::{
    ConfigureController, ConfigureStartController, ListControllers, ListControllersRequest,
    LoadConfigureController, LoadStartController, NameRequest, SwitchController,
    SwitchControllerRequest,
};
use crate::services::ManagerServices;

pub struct RosControllerManager<'t, T> {
    caller: ServiceCaller<'t, T>,
    services: ManagerServices,
}

impl<'t, T: ServiceTransport> RosControllerManager<'t, T> {
    pub fn new(caller: ServiceCaller<'t, T>, manager: &str) -> Self {
        Self {
            caller,
            services: ManagerServices::new(manager),
        }
    }

    fn name_request(name: &str) -> NameRequest {
        NameRequest {
            name: name.to_string(),
        }
    }
}

impl<T: ServiceTransport> ControllerManager for RosControllerManager<'_, T> {
    fn list_controllers(&self) -> ManagerFuture<'_, Vec<ControllerSnapshot>> {
        Box::pin(async move {
            let reply = self
                .caller
                .call::<ListControllers>(&self.services.list_controllers, ListControllersRequest {})
                .await?;
            Ok(reply.controller.into_iter().map(Into::into).collect())
        })
    }

    fn configure_controller<'a>(&'a self, name: &'a str) -> ManagerFuture<'a, Outcome> {
        Box::pin(async move {
            let reply = self
                .caller
                .call::<ConfigureController>(
                    &self.services.configure_controller,
                    Self::name_request(name),
                )
                .await?;
            Ok(Outcome { ok: reply.ok })
        })
    }

    fn switch_controllers(&self, request: SwitchRequest) -> ManagerFuture<'_, Outcome> {
        Box::pin(async move {
            let reply = self
                .caller
                .call::<SwitchController>(
                    &self.services.switch_controller,
                    SwitchControllerRequest::from(request),
                )
                .await?;
            Ok(Outcome { ok: reply.ok })
        })
    }

    fn load_controller<'a>(
        &'a self,
        operation: LoadOperation,
        name: &'a str,
    ) -> ManagerFuture<'a, Outcome> {
        Box::pin(async move {
            let service = self.services.for_load(operation);
            let request = Self::name_request(name);
            let reply = match operation {
                LoadOperation::LoadAndConfigure => {
                    self.caller
                        .call::<LoadConfigureController>(service, request)
                        .await?
                }
                LoadOperation::LoadAndStart => {
                    self.caller
                        .call::<LoadStartController>(service, request)
                        .await?
                }
                LoadOperation::ConfigureAndStart => {
                    self.caller
                        .call::<ConfigureStartController>(service, request)
                        .await?
                }
            };
            Ok(Outcome { ok: reply.ok })
        })
    }
}
