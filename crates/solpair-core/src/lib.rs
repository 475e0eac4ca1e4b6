pub mod action;
pub mod domain;
pub mod error;

pub use action::ActionPhase;
pub use domain::{
    lamports_from_sol, AttachRequest, IntentKind, PairingCode, ResolveRequest, ResolveResponse,
    StatusOutcome, StatusReport, LAMPORTS_PER_SOL, RELAY_CHAIN,
};
pub use error::RelayError;
