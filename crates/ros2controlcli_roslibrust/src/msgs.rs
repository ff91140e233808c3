//! Message and service shapes consumed over rosbridge.
//!
//! Only the fields this tool reads or writes are modeled; rosbridge fills the
//! rest with defaults on the ROS side, and unknown reply fields are ignored.

use std::time::Duration as StdDuration;

use roslibrust::{RosMessageType, RosServiceType};
use serde::{Deserialize, Serialize};

use ros2controlcli_core::{ControllerSnapshot, Strictness, SwitchRequest};

pub mod builtin_interfaces {
    use super::*;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Duration {
        pub sec: i32,
        pub nanosec: u32,
    }

    impl RosMessageType for Duration {
        const ROS_TYPE_NAME: &'static str = "builtin_interfaces/Duration";
    }

    impl From<StdDuration> for Duration {
        fn from(d: StdDuration) -> Self {
            Self {
                sec: i32::try_from(d.as_secs()).unwrap_or(i32::MAX),
                nanosec: d.subsec_nanos(),
            }
        }
    }
}

pub mod controller_manager_msgs {
    use super::*;

    /// `SwitchController.Request.strictness` values.
    pub const BEST_EFFORT: i32 = 1;
    pub const STRICT: i32 = 2;

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ControllerState {
        pub name: String,
        pub state: String,
        #[serde(rename = "type")]
        pub type_: String,
        pub claimed_interfaces: Vec<String>,
        pub required_command_interfaces: Vec<String>,
        pub required_state_interfaces: Vec<String>,
    }

    impl RosMessageType for ControllerState {
        const ROS_TYPE_NAME: &'static str = "controller_manager_msgs/ControllerState";
    }

    impl From<ControllerState> for ControllerSnapshot {
        fn from(msg: ControllerState) -> Self {
            ControllerSnapshot::new(msg.name, msg.type_, msg.state)
        }
    }

    // ---------------- ListControllers ----------------

    pub struct ListControllers;

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ListControllersRequest {}

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ListControllersResponse {
        pub controller: Vec<ControllerState>,
    }

    impl RosMessageType for ListControllersRequest {
        const ROS_TYPE_NAME: &'static str = "controller_manager_msgs/ListControllersRequest";
    }

    impl RosMessageType for ListControllersResponse {
        const ROS_TYPE_NAME: &'static str = "controller_manager_msgs/ListControllersResponse";
    }

    impl RosServiceType for ListControllers {
        const ROS_SERVICE_NAME: &'static str = "controller_manager_msgs/ListControllers";
        const MD5SUM: &'static str = "";
        type Request = ListControllersRequest;
        type Response = ListControllersResponse;
    }

    // ---------------- SwitchController ----------------

    pub struct SwitchController;

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SwitchControllerRequest {
        pub activate_controllers: Vec<String>,
        pub deactivate_controllers: Vec<String>,
        pub strictness: i32,
        pub activate_asap: bool,
        pub timeout: builtin_interfaces::Duration,
    }

    impl From<SwitchRequest> for SwitchControllerRequest {
        fn from(req: SwitchRequest) -> Self {
            Self {
                activate_controllers: req.activate,
                deactivate_controllers: req.deactivate,
                strictness: match req.strictness {
                    Strictness::BestEffort => BEST_EFFORT,
                    Strictness::Strict => STRICT,
                },
                activate_asap: req.activate_asap,
                timeout: req.timeout.into(),
            }
        }
    }

    impl RosMessageType for SwitchControllerRequest {
        const ROS_TYPE_NAME: &'static str = "controller_manager_msgs/SwitchControllerRequest";
    }

    impl RosServiceType for SwitchController {
        const ROS_SERVICE_NAME: &'static str = "controller_manager_msgs/SwitchController";
        const MD5SUM: &'static str = "";
        type Request = SwitchControllerRequest;
        type Response = OkResponse;
    }

    // ---------------- name -> ok services ----------------

    /// Request shared by every service that takes a single controller name.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct NameRequest {
        pub name: String,
    }

    impl RosMessageType for NameRequest {
        const ROS_TYPE_NAME: &'static str = "controller_manager_msgs/ConfigureControllerRequest";
    }

    /// Reply shared by every mutating manager service.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct OkResponse {
        pub ok: bool,
    }

    impl RosMessageType for OkResponse {
        const ROS_TYPE_NAME: &'static str = "controller_manager_msgs/ConfigureControllerResponse";
    }

    pub struct ConfigureController;

    impl RosServiceType for ConfigureController {
        const ROS_SERVICE_NAME: &'static str = "controller_manager_msgs/ConfigureController";
        const MD5SUM: &'static str = "";
        type Request = NameRequest;
        type Response = OkResponse;
    }

    pub struct LoadConfigureController;

    impl RosServiceType for LoadConfigureController {
        const ROS_SERVICE_NAME: &'static str = "controller_manager_msgs/LoadConfigureController";
        const MD5SUM: &'static str = "";
        type Request = NameRequest;
        type Response = OkResponse;
    }

    pub struct LoadStartController;

    impl RosServiceType for LoadStartController {
        const ROS_SERVICE_NAME: &'static str = "controller_manager_msgs/LoadStartController";
        const MD5SUM: &'static str = "";
        type Request = NameRequest;
        type Response = OkResponse;
    }

    pub struct ConfigureStartController;

    impl RosServiceType for ConfigureStartController {
        const ROS_SERVICE_NAME: &'static str = "controller_manager_msgs/ConfigureStartController";
        const MD5SUM: &'static str = "";
        type Request = NameRequest;
        type Response = OkResponse;
    }
}

pub mod rosapi {
    use super::*;

    pub struct Services;

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ServicesRequest {}

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ServicesResponse {
        pub services: Vec<String>,
    }

    impl RosMessageType for ServicesRequest {
        const ROS_TYPE_NAME: &'static str = "rosapi/ServicesRequest";
    }

    impl RosMessageType for ServicesResponse {
        const ROS_TYPE_NAME: &'static str = "rosapi/ServicesResponse";
    }

    impl RosServiceType for Services {
        const ROS_SERVICE_NAME: &'static str = "rosapi/Services";
        const MD5SUM: &'static str = "";
        type Request = ServicesRequest;
        type Response = ServicesResponse;
    }
}
