//! ros2controlcli_core::lifecycle
//!
//! Pure (ROS-agnostic) lifecycle semantics aligned to the ROS 2 node lifecycle
//! model, which ros2_control applies to controllers.
//!
//! Key ideas:
//! - Stable states + transition (intermediate) states
//! - `begin()` is the guard: it only accepts a transition from its valid predecessor

mod engine;
mod state;
mod transition;

pub use engine::begin;
pub use state::{State, ALL_STATES};
pub use transition::Transition;
