use tracing::debug;

use ros2controlcli_core::error::Result;
use ros2controlcli_core::verb::{list_controllers, load_controller, set_controller_state, ListFilter};
use ros2controlcli_core::{ControllerManager, LoadOperation};

use crate::config::Command;

/// Run one parsed command against `manager` and return the line to print.
pub async fn run_command<M>(manager: &M, command: &Command) -> Result<String>
where
    M: ControllerManager + ?Sized,
{
    debug!(?command, "running command");
    match command {
        Command::SetControllerState {
            controller_name,
            state,
        } => set_controller_state(manager, controller_name, (*state).into()).await,
        Command::ListControllers { loaded_only } => {
            let filter = if *loaded_only {
                ListFilter::LoadedOnly
            } else {
                ListFilter::All
            };
            list_controllers(manager, filter).await
        }
        Command::LoadAndConfigure { controller_name } => {
            load_controller(manager, LoadOperation::LoadAndConfigure, controller_name).await
        }
        Command::LoadAndStart { controller_name } => {
            load_controller(manager, LoadOperation::LoadAndStart, controller_name).await
        }
        Command::ConfigureAndStart { controller_name } => {
            load_controller(manager, LoadOperation::ConfigureAndStart, controller_name).await
        }
    }
}
