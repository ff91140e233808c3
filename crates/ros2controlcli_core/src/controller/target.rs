use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Domain, ErrorKind, Payload};
use crate::lifecycle::{State, Transition};

/// State change an operator can request for a loaded controller.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TargetState {
    Configure,
    Start,
    Stop,
}

impl TargetState {
    pub const ALL: [TargetState; 3] = [TargetState::Configure, TargetState::Start, TargetState::Stop];

    /// CLI spelling.
    pub const fn label(self) -> &'static str {
        match self {
            TargetState::Configure => "configure",
            TargetState::Start => "start",
            TargetState::Stop => "stop",
        }
    }

    pub const fn transition(self) -> Transition {
        match self {
            TargetState::Configure => Transition::Configure,
            TargetState::Start => Transition::Activate,
            TargetState::Stop => Transition::Deactivate,
        }
    }

    /// The unique state the controller must be in for this request to be legal.
    pub const fn required_state(self) -> State {
        match self {
            TargetState::Configure => State::Unconfigured,
            TargetState::Start => State::Inactive,
            TargetState::Stop => State::Active,
        }
    }

    pub(crate) const fn past_tense(self) -> &'static str {
        match self {
            TargetState::Configure => "configured",
            TargetState::Start => "started",
            TargetState::Stop => "stopped",
        }
    }

    pub(crate) const fn gerund(self) -> &'static str {
        match self {
            TargetState::Configure => "configuring",
            TargetState::Start => "starting",
            TargetState::Stop => "stopping",
        }
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TargetState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetState::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| {
                CoreError::warn()
                    .domain(Domain::Config)
                    .kind(ErrorKind::InvalidArgument)
                    .msgf(format_args!(
                        "invalid state '{s}' (choose from 'configure', 'start', 'stop')"
                    ))
                    .payload(Payload::Context {
                        key: "state",
                        value: s.to_string().into(),
                    })
                    .build()
            })
    }
}
