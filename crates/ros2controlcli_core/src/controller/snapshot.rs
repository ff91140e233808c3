use crate::lifecycle::State;

/// One entry of the manager's controller list, as observed at fetch time.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ControllerSnapshot {
    pub name: String,
    pub type_name: String,
    /// Raw state string reported by the manager.
    pub state_label: String,
    /// `None` when the label is not a lifecycle state this tool knows.
    pub state: Option<State>,
}

impl ControllerSnapshot {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        state_label: impl Into<String>,
    ) -> Self {
        let state_label = state_label.into();
        let state = State::from_label(&state_label);
        Self {
            name: name.into(),
            type_name: type_name.into(),
            state_label,
            state,
        }
    }

    pub fn is_in(&self, states: &[State]) -> bool {
        self.state.is_some_and(|s| states.contains(&s))
    }
}
