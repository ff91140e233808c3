//! ros2controlcli_core::verb
//!
//! Operator-facing commands. Each verb returns the line to print on success or
//! a `CoreError` whose message is the line to print on failure.

mod list;
mod load;
mod set_state;

pub use list::{list_controllers, ListFilter, LOADED_STATES};
pub use load::load_controller;
pub use set_state::set_controller_state;
