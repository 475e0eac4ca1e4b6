//! Per-form UI state. Every field lives for one render cycle's worth of
//! user intent; nothing here is persisted.

use solpair_core::{ActionPhase, StatusOutcome};

/// What the message form shows after a submit settles. Kept symbolic:
/// the message form never surfaces raw error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    Success,
    InvalidCode,
    Failed,
}

#[derive(Default)]
pub struct MessageFormState {
    pub message: String,
    pub code: String,
    pub submit_phase: ActionPhase,
    pub submit_generation: u64,
    pub outcome: Option<MessageOutcome>,
    pub status: StatusPanelState,
}

/// The transaction form surfaces failure text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Success,
    Failed(String),
}

pub struct TransferFormState {
    pub amount: String,
    pub recipient: String,
    pub code: String,
    pub submit_phase: ActionPhase,
    pub submit_generation: u64,
    pub outcome: Option<TransferOutcome>,
    pub status: StatusPanelState,
}

impl Default for TransferFormState {
    fn default() -> Self {
        Self {
            amount: "0".to_owned(),
            recipient: String::new(),
            code: String::new(),
            submit_phase: ActionPhase::default(),
            submit_generation: 0,
            outcome: None,
            status: StatusPanelState::default(),
        }
    }
}

/// State for one Check Status button and its rendered result. Each form
/// owns its own panel; the two never share in-flight state.
#[derive(Default)]
pub struct StatusPanelState {
    pub phase: ActionPhase,
    pub generation: u64,
    pub result: Option<StatusOutcome>,
    pub error: Option<String>,
}

impl StatusPanelState {
    pub fn clear(&mut self) {
        self.result = None;
        self.error = None;
    }
}
