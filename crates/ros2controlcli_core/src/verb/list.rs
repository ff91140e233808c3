use crate::controller::{ControllerManager, ControllerRegistry, ControllerSnapshot};
use crate::error::Result;
use crate::lifecycle::State;

/// States in which a controller counts as loaded.
pub const LOADED_STATES: [State; 3] = [State::Active, State::Inactive, State::Unconfigured];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ListFilter {
    #[default]
    All,
    LoadedOnly,
}

impl ListFilter {
    fn admits(self, snapshot: &ControllerSnapshot) -> bool {
        match self {
            ListFilter::All => true,
            // The manager's older "configured" label counts as loaded too.
            ListFilter::LoadedOnly => {
                snapshot.is_in(&LOADED_STATES)
                    || snapshot.state_label == "configured"
            }
        }
    }
}

/// One line per controller, `name  type  state`, sorted by name.
pub async fn list_controllers<M>(manager: &M, filter: ListFilter) -> Result<String>
where
    M: ControllerManager + ?Sized,
{
    let registry: ControllerRegistry = manager.list_controllers().await?.into_iter().collect();
    let shown: Vec<_> = registry
        .sorted()
        .into_iter()
        .filter(|c| filter.admits(c))
        .collect();

    let name_width = shown.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let type_width = shown.iter().map(|c| c.type_name.len()).max().unwrap_or(0);

    let rows: Vec<String> = shown
        .iter()
        .map(|c| {
            format!(
                "{:<name_width$}  {:<type_width$}  {}",
                c.name, c.type_name, c.state_label
            )
        })
        .collect();
    Ok(rows.join("\n"))
}
