use crate::controller::{ControllerManager, LoadOperation};
use crate::error::{CoreError, Result};

/// Run one of the manager's combined load/configure/start services.
///
/// No local state guard: the manager validates these itself.
pub async fn load_controller<M>(
    manager: &M,
    operation: LoadOperation,
    controller: &str,
) -> Result<String>
where
    M: ControllerManager + ?Sized,
{
    let outcome = manager.load_controller(operation, controller).await?;
    if !outcome.ok {
        return Err(CoreError::operation_rejected(operation.gerund(), controller));
    }
    Ok(format!(
        "successfully {} {controller}",
        operation.past_tense()
    ))
}
