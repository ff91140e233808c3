/// ROS2-style lifecycle transitions this tool can request of a controller.
///
/// The controller manager drives these on behalf of its controllers; this tool
/// only uses them to decide whether a request can succeed from an observed state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    Configure,
    Activate,
    Deactivate,
}

impl Transition {
    /// Stable, human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Transition::Configure => "configure",
            Transition::Activate => "activate",
            Transition::Deactivate => "deactivate",
        }
    }
}
