//! ros2controlcli_core: ROS-agnostic logic behind the controller manager verbs.
//!
//! Design goals:
//! - Pure, testable logic (no ROS deps).
//! - The remote manager sits behind the `ControllerManager` trait.
//! - Every failure is a `CoreError` whose message is fit for an operator.

pub mod error;

/// Controller lifecycle states and transition guard.
pub mod lifecycle;

/// Controller snapshots, requested targets, and the manager seam.
pub mod controller;

/// set-state, list, and load verbs.
pub mod verb;

pub use controller::{
    ControllerManager, ControllerSnapshot, LoadOperation, Outcome, Strictness, SwitchRequest,
    TargetState,
};
pub use error::{CoreError, Result};
