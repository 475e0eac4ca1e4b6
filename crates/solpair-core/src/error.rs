use thiserror::Error;

/// Closed set of failure kinds for the pairing relay flows.
///
/// Display strings double as user-facing status text: the transaction form
/// renders them verbatim, the message form collapses everything past
/// validation into a single fixed failure line.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Code must be 8 digits")]
    InvalidCode,
    #[error("Message required")]
    EmptyMessage,
    #[error("Wallet address required")]
    MissingRecipient,
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Blockhash not ready")]
    BlockhashUnavailable,
    #[error("No pubkey found for code")]
    CodeNotPaired,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("relay returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl RelayError {
    /// True for the local-validation kinds that must short-circuit
    /// before any network call is issued.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RelayError::InvalidCode
                | RelayError::EmptyMessage
                | RelayError::MissingRecipient
                | RelayError::InvalidRecipient(_)
                | RelayError::InvalidAmount(_)
                | RelayError::BlockhashUnavailable
        )
    }
}
