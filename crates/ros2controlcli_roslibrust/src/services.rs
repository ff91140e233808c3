//! Endpoint naming for the controller manager services.

use ros2controlcli_core::LoadOperation;

pub const DEFAULT_CONTROLLER_MANAGER: &str = "/controller_manager";

/// rosapi query listing every advertised service; polled to decide readiness.
pub const ROSAPI_SERVICES: &str = "/rosapi/services";

pub const SERVICE_LIST_CONTROLLERS: &str = "list_controllers";
pub const SERVICE_CONFIGURE_CONTROLLER: &str = "configure_controller";
pub const SERVICE_SWITCH_CONTROLLER: &str = "switch_controller";
pub const SERVICE_LOAD_AND_CONFIGURE: &str = "load_and_configure_controller";
pub const SERVICE_LOAD_AND_START: &str = "load_and_start_controller";
pub const SERVICE_CONFIGURE_AND_START: &str = "configure_and_start_controller";

/// Absolute manager name: leading `/` added, trailing `/` dropped.
pub fn normalize_manager(name: &str) -> String {
    let trimmed = name.trim().trim_matches('/');
    if trimmed.is_empty() {
        DEFAULT_CONTROLLER_MANAGER.to_string()
    } else {
        format!("/{trimmed}")
    }
}

pub fn manager_service(manager: &str, service: &str) -> String {
    format!("{}/{service}", normalize_manager(manager))
}

/// Fully-qualified service names for one controller manager.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ManagerServices {
    pub manager: String,
    pub list_controllers: String,
    pub configure_controller: String,
    pub switch_controller: String,
    pub load_and_configure: String,
    pub load_and_start: String,
    pub configure_and_start: String,
}

impl ManagerServices {
    pub fn new(manager: &str) -> Self {
        let manager = normalize_manager(manager);
        Self {
            list_controllers: manager_service(&manager, SERVICE_LIST_CONTROLLERS),
            configure_controller: manager_service(&manager, SERVICE_CONFIGURE_CONTROLLER),
            switch_controller: manager_service(&manager, SERVICE_SWITCH_CONTROLLER),
            load_and_configure: manager_service(&manager, SERVICE_LOAD_AND_CONFIGURE),
            load_and_start: manager_service(&manager, SERVICE_LOAD_AND_START),
            configure_and_start: manager_service(&manager, SERVICE_CONFIGURE_AND_START),
            manager,
        }
    }

    pub fn for_load(&self, operation: LoadOperation) -> &str {
        match operation {
            LoadOperation::LoadAndConfigure => &self.load_and_configure,
            LoadOperation::LoadAndStart => &self.load_and_start,
            LoadOperation::ConfigureAndStart => &self.configure_and_start,
        }
    }
}
