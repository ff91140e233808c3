use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Convenient result alias for ros2controlcli_core.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Log/handling importance.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Where an error came from (helps triage and routing).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Domain {
    Controller,
    Transport,
    Config,
    Other,
}

/// Stable error "kind" for matching/branching.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The controller name is absent from the manager's list.
    NotLoaded,
    /// The observed state is not the predecessor of the requested target.
    InvalidTransition,
    /// The remote endpoint did not become reachable within the readiness timeout.
    ServiceUnavailable,
    /// The transport failed while the request was in flight.
    RemoteCallFailed,
    /// The manager answered with `ok == false`.
    OperationRejected,
    InvalidArgument,
    Other,
}

/// Optional structured payload for rich context without forcing allocation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Payload {
    None,

    /// Generic key/value context (usually no heap alloc if using &str).
    Context {
        key: &'static str,
        value: Cow<'static, str>,
    },

    /// Required vs. observed controller state for a rejected transition.
    StateMismatch {
        required: &'static str,
        actual: Cow<'static, str>,
    },

    /// Remote endpoint involved in a transport failure.
    Service { name: Cow<'static, str> },
}

/// The one error type that crosses crate boundaries in ros2controlcli.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{severity:?}: {message}")]
pub struct CoreError {
    pub domain: Domain,
    pub kind: ErrorKind,
    pub severity: Severity,
    pub message: Cow<'static, str>,
    pub payload: Payload,
}

impl CoreError {
    /// Fully-specified constructor (rarely needed at call sites).
    pub fn new(
        domain: Domain,
        kind: ErrorKind,
        severity: Severity,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            domain,
            kind,
            severity,
            message: message.into(),
            payload: Payload::None,
        }
    }

    // ---------------- Fluent entry points ----------------

    #[inline]
    pub fn trace() -> ErrB {
        ErrB::new(Severity::Trace)
    }
    #[inline]
    pub fn debug() -> ErrB {
        ErrB::new(Severity::Debug)
    }
    #[inline]
    pub fn info() -> ErrB {
        ErrB::new(Severity::Info)
    }
    #[inline]
    pub fn warn() -> ErrB {
        ErrB::new(Severity::Warn)
    }
    #[inline]
    pub fn error() -> ErrB {
        ErrB::new(Severity::Error)
    }
    #[inline]
    pub fn fatal() -> ErrB {
        ErrB::new(Severity::Fatal)
    }

    /// Operator-facing text: the message without the severity prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn not_loaded(controller: &str) -> Self {
        CoreError::warn()
            .domain(Domain::Controller)
            .kind(ErrorKind::NotLoaded)
            .msgf(format_args!(
                "controller {controller} does not seem to be loaded"
            ))
            .payload(Payload::Context {
                key: "controller",
                value: controller.to_string().into(),
            })
            .build()
    }

    /// `verb` is the imperative the operator typed ("configure", "start", "stop").
    pub fn invalid_transition(
        verb: &str,
        controller: &str,
        required: &'static str,
        actual: &str,
    ) -> Self {
        CoreError::warn()
            .domain(Domain::Controller)
            .kind(ErrorKind::InvalidTransition)
            .msgf(format_args!(
                "can't {verb} {controller} from its current state {actual} (requires {required})"
            ))
            .payload(Payload::StateMismatch {
                required,
                actual: actual.to_string().into(),
            })
            .build()
    }

    pub fn service_unavailable(service: &str) -> Self {
        CoreError::error()
            .domain(Domain::Transport)
            .kind(ErrorKind::ServiceUnavailable)
            .msgf(format_args!("Could not contact service {service}"))
            .payload(Payload::Service {
                name: service.to_string().into(),
            })
            .build()
    }

    pub fn remote_call_failed(service: &str, cause: impl fmt::Display) -> Self {
        CoreError::error()
            .domain(Domain::Transport)
            .kind(ErrorKind::RemoteCallFailed)
            .msgf(format_args!(
                "Exception while calling service {service}: {cause}"
            ))
            .payload(Payload::Service {
                name: service.to_string().into(),
            })
            .build()
    }

    /// The manager does not report a reason, so the message points at its logs.
    /// `gerund` reads like "configuring", "starting", "loading and configuring".
    pub fn operation_rejected(gerund: &str, controller: &str) -> Self {
        CoreError::error()
            .domain(Domain::Controller)
            .kind(ErrorKind::OperationRejected)
            .msgf(format_args!(
                "Error {gerund} controller, check controller_manager logs"
            ))
            .payload(Payload::Context {
                key: "controller",
                value: controller.to_string().into(),
            })
            .build()
    }
}

/// Fluent builder that behaves like iterator chains (takes self, returns Self).
/// Defaults:
/// - domain = Other
/// - kind = Other
/// - message = ""
/// - payload = None
#[derive(Debug, Clone)]
pub struct ErrB {
    domain: Domain,
    kind: ErrorKind,
    severity: Severity,
    message: Cow<'static, str>,
    payload: Payload,
}

impl ErrB {
    #[inline]
    fn new(severity: Severity) -> Self {
        Self {
            domain: Domain::Other,
            kind: ErrorKind::Other,
            severity,
            message: Cow::Borrowed(""),
            payload: Payload::None,
        }
    }

    // -------- Guided setters --------

    /// Set/override the domain (defaults to Domain::Other).
    #[inline]
    pub fn domain(mut self, d: Domain) -> Self {
        self.domain = d;
        self
    }

    /// Set/override the kind (defaults to ErrorKind::Other).
    #[inline]
    pub fn kind(mut self, k: ErrorKind) -> Self {
        self.kind = k;
        self
    }

    /// Set/override the message (defaults to "").
    #[inline]
    pub fn msg(mut self, m: impl Into<Cow<'static, str>>) -> Self {
        self.message = m.into();
        self
    }

    /// Formatting-friendly message setter.
    #[inline]
    pub fn msgf(mut self, args: fmt::Arguments<'_>) -> Self {
        self.message = Cow::Owned(args.to_string());
        self
    }

    /// Only one payload: this replaces any previous payload (default is None).
    #[inline]
    pub fn payload(mut self, p: Payload) -> Self {
        self.payload = p;
        self
    }

    // -------- Finish --------
    #[inline]
    pub fn build(self) -> CoreError {
        CoreError {
            domain: self.domain,
            kind: self.kind,
            severity: self.severity,
            message: self.message,
            payload: self.payload,
        }
    }
}

impl From<ErrB> for CoreError {
    fn from(b: ErrB) -> Self {
        b.build()
    }
}
