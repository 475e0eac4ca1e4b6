/// Lifecycle of one button-sized action. Submit and status-check each
/// own an independent phase; a button is disabled exactly while its own
/// phase is `InFlight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionPhase {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl ActionPhase {
    pub fn is_in_flight(self) -> bool {
        self == ActionPhase::InFlight
    }

    /// Terminal phases; a new click resets to `InFlight`.
    pub fn is_settled(self) -> bool {
        matches!(self, ActionPhase::Succeeded | ActionPhase::Failed)
    }
}
