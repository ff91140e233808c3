//! ros2controlcli_core::controller
//!
//! Controller-level view of the lifecycle: what the manager reports about each
//! controller, what the operator may ask for, and the seam to the manager.

mod manager;
mod registry;
mod snapshot;
mod target;

pub use manager::{
    ControllerManager, LoadOperation, ManagerFuture, Outcome, Strictness, SwitchRequest,
    SWITCH_TIMEOUT,
};
pub use registry::ControllerRegistry;
pub use snapshot::ControllerSnapshot;
pub use target::TargetState;
