use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::error::Result;

use super::ControllerSnapshot;

/// Timeout handed to the manager for strict start/stop switches.
pub const SWITCH_TIMEOUT: Duration = Duration::from_secs(5);

pub type ManagerFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// How the manager should treat a switch that cannot be fully applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Strictness {
    /// Apply what can be applied.
    BestEffort,
    /// Abort the whole switch if any controller fails.
    Strict,
}

/// Atomic activate/deactivate request.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SwitchRequest {
    pub activate: Vec<String>,
    pub deactivate: Vec<String>,
    pub strictness: Strictness,
    pub activate_asap: bool,
    pub timeout: Duration,
}

impl SwitchRequest {
    /// Strict switch that only activates `name`.
    pub fn activate_one(name: &str) -> Self {
        Self {
            activate: vec![name.to_string()],
            deactivate: Vec::new(),
            strictness: Strictness::Strict,
            activate_asap: true,
            timeout: SWITCH_TIMEOUT,
        }
    }

    /// Strict switch that only deactivates `name`.
    pub fn deactivate_one(name: &str) -> Self {
        Self {
            activate: Vec::new(),
            deactivate: vec![name.to_string()],
            strictness: Strictness::Strict,
            activate_asap: true,
            timeout: SWITCH_TIMEOUT,
        }
    }
}

/// Combined load/configure/start services exposed by the manager.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoadOperation {
    LoadAndConfigure,
    LoadAndStart,
    ConfigureAndStart,
}

impl LoadOperation {
    pub(crate) const fn past_tense(self) -> &'static str {
        match self {
            LoadOperation::LoadAndConfigure => "loaded and configured",
            LoadOperation::LoadAndStart => "loaded and started",
            LoadOperation::ConfigureAndStart => "configured and started",
        }
    }

    pub(crate) const fn gerund(self) -> &'static str {
        match self {
            LoadOperation::LoadAndConfigure => "loading and configuring",
            LoadOperation::LoadAndStart => "loading and starting",
            LoadOperation::ConfigureAndStart => "configuring and starting",
        }
    }
}

/// Reply of a mutating manager service.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Outcome {
    pub ok: bool,
}

/// Remote controller manager, as seen by the verbs.
///
/// Each method is one request/response exchange; implementations must not retry.
pub trait ControllerManager: Send + Sync {
    fn list_controllers(&self) -> ManagerFuture<'_, Vec<ControllerSnapshot>>;

    fn configure_controller<'a>(&'a self, name: &'a str) -> ManagerFuture<'a, Outcome>;

    fn switch_controllers(&self, request: SwitchRequest) -> ManagerFuture<'_, Outcome>;

    fn load_controller<'a>(
        &'a self,
        operation: LoadOperation,
        name: &'a str,
    ) -> ManagerFuture<'a, Outcome>;
}
