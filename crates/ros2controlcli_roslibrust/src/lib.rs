//! ros2controlcli_roslibrust
//!
//! rosbridge adapter for the controller manager verbs, built on roslibrust.
//! Core rules live in `ros2controlcli_core`; this crate only moves requests
//! and replies over the wire.
//!
//! Design rules:
//! - One `Transport` per process, opened at entry and dropped at exit.
//! - One `ClientSession` per call, released on every exit path.
//! - Exactly one request per call; no retries.

pub mod caller;
pub mod error;
pub mod manager;
pub mod msgs;
pub mod services;
pub mod transport;

pub use caller::{ClientSession, ServiceCaller, ServiceTransport, DEFAULT_READINESS_TIMEOUT};
pub use error::log_core_error;
pub use manager::RosControllerManager;
pub use services::ManagerServices;
pub use transport::Transport;

// Re-export core types that adapter users will commonly need
pub use ros2controlcli_core::error::{CoreError, Result};
