/// ROS2-style lifecycle primary + transition (intermediate) states, as reported
/// for controllers by the controller manager.
///
/// Primary (stable) states:
/// - Unconfigured, Inactive, Active, Finalized
///
/// Transition (intermediate) states:
/// - Configuring, CleaningUp, Activating, Deactivating, ShuttingDown, ErrorProcessing
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum State {
    // Primary
    Unconfigured,
    Inactive,
    Active,
    Finalized,

    // Transition (intermediate)
    Configuring,
    CleaningUp,
    Activating,
    Deactivating,
    ShuttingDown,
    ErrorProcessing,
}

impl State {
    /// Label used by `lifecycle_msgs/State` and the controller manager's
    /// `ControllerState.state` field.
    pub const fn label(self) -> &'static str {
        match self {
            State::Unconfigured => "unconfigured",
            State::Inactive => "inactive",
            State::Active => "active",
            State::Finalized => "finalized",
            State::Configuring => "configuring",
            State::CleaningUp => "cleaningup",
            State::Activating => "activating",
            State::Deactivating => "deactivating",
            State::ShuttingDown => "shuttingdown",
            State::ErrorProcessing => "errorprocessing",
        }
    }

    /// Parse a manager-reported label. Only the exact lowercase label matches.
    pub fn from_label(label: &str) -> Option<State> {
        ALL_STATES.iter().copied().find(|state| state.label() == label)
    }
}

/// Canonical list of all lifecycle states (primary + transition).
pub const ALL_STATES: [State; 10] = [
    State::Unconfigured,
    State::Inactive,
    State::Active,
    State::Finalized,
    State::Configuring,
    State::CleaningUp,
    State::Activating,
    State::Deactivating,
    State::ShuttingDown,
    State::ErrorProcessing,
];
