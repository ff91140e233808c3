use tracing::debug;

use crate::controller::{ControllerManager, ControllerRegistry, SwitchRequest, TargetState};
use crate::error::{CoreError, Result};
use crate::lifecycle::begin;

/// Move a loaded controller to `target`.
///
/// The controller list is fetched first and the request is only sent when the
/// observed state is the predecessor of `target`. Failures fetching the list are
/// returned as-is.
pub async fn set_controller_state<M>(
    manager: &M,
    controller: &str,
    target: TargetState,
) -> Result<String>
where
    M: ControllerManager + ?Sized,
{
    let registry: ControllerRegistry = manager.list_controllers().await?.into_iter().collect();

    let snapshot = registry
        .get(controller)
        .ok_or_else(|| CoreError::not_loaded(controller))?;

    let required = target.required_state();
    let legal = snapshot
        .state
        .is_some_and(|state| begin(state, target.transition()).is_ok());
    if !legal {
        return Err(CoreError::invalid_transition(
            target.label(),
            &snapshot.name,
            required.label(),
            &snapshot.state_label,
        ));
    }

    debug!(controller, target = target.label(), "requesting controller state change");

    let outcome = match target {
        TargetState::Configure => manager.configure_controller(controller).await?,
        TargetState::Start => {
            manager
                .switch_controllers(SwitchRequest::activate_one(controller))
                .await?
        }
        TargetState::Stop => {
            manager
                .switch_controllers(SwitchRequest::deactivate_one(controller))
                .await?
        }
    };

    if !outcome.ok {
        return Err(CoreError::operation_rejected(target.gerund(), controller));
    }
    Ok(format!("successfully {} {controller}", target.past_tense()))
}
