use crate::error::{CoreError, Domain, ErrorKind, Payload, Result};

use super::{State, Transition};

fn rejected(current: State, via: Transition) -> CoreError {
    CoreError::warn()
        .domain(Domain::Controller)
        .kind(ErrorKind::InvalidTransition)
        .msgf(format_args!(
            "invalid lifecycle transition {} from {}",
            via.label(),
            current.label()
        ))
        .payload(Payload::Context {
            key: "from_state",
            value: current.label().into(),
        })
        .build()
}

/// Begin a lifecycle transition by moving from a **stable** state into the
/// **intermediate** state the manager enters while the transition runs.
///
/// Each transition has exactly one valid predecessor; every other state,
/// including the intermediate ones, is rejected.
pub fn begin(current: State, via: Transition) -> Result<State> {
    use State::*;
    use Transition::*;

    let next = match (current, via) {
        (Unconfigured, Configure) => Configuring,
        (Inactive, Activate) => Activating,
        (Active, Deactivate) => Deactivating,
        _ => return Err(rejected(current, via)),
    };

    Ok(next)
}
