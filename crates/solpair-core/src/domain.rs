use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// The only chain identifier the relay currently brokers.
pub const RELAY_CHAIN: &str = "solana";

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Eight-digit numeric code linking a UI session to a wallet session
/// on the relay. Parsing is the validation gate: every submit path goes
/// through it before any I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairingCode(String);

impl PairingCode {
    /// Accepts exactly eight ASCII digits, nothing else.
    pub fn parse(input: &str) -> Result<Self, RelayError> {
        if input.len() == 8 && input.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(input.to_owned()))
        } else {
            Err(RelayError::InvalidCode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PairingCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentKind {
    #[serde(rename = "sign-only")]
    SignOnly,
    #[serde(rename = "transaction")]
    Transaction,
}

/// Body of `POST /api/attach`. Exactly one of `message` / `transaction`
/// is present, matching `intent_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachRequest {
    pub code: PairingCode,
    pub chain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<String>,
    pub intent_type: IntentKind,
}

impl AttachRequest {
    pub fn sign_message(code: PairingCode, message: String) -> Result<Self, RelayError> {
        if message.is_empty() {
            return Err(RelayError::EmptyMessage);
        }
        Ok(Self {
            code,
            chain: RELAY_CHAIN.to_owned(),
            message: Some(message),
            transaction: None,
            intent_type: IntentKind::SignOnly,
        })
    }

    pub fn transaction(code: PairingCode, tx_base64: String) -> Self {
        Self {
            code,
            chain: RELAY_CHAIN.to_owned(),
            message: None,
            transaction: Some(tx_base64),
            intent_type: IntentKind::Transaction,
        }
    }
}

/// Body of `POST /api/resolve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub code: PairingCode,
}

/// Response of `POST /api/resolve`. The relay omits `pubkey` for codes
/// that never paired with a wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    #[serde(default)]
    pub pubkey: Option<String>,
}

/// Response of `GET /api/status/{code}`. Every field past `status` is
/// optional; which ones show up depends on the intent kind and how far
/// the wallet got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_message: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A status body is rendered structurally when it parses and verbatim
/// when it does not; a parse failure is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    Report(StatusReport),
    Raw(String),
}

impl StatusOutcome {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<StatusReport>(body) {
            Ok(report) => StatusOutcome::Report(report),
            Err(_) => StatusOutcome::Raw(body.to_owned()),
        }
    }
}

/// Truncating whole-SOL to lamports conversion, `floor(amount * 1e9)`.
pub fn lamports_from_sol(amount: f64) -> Result<u64, RelayError> {
    if !amount.is_finite() {
        return Err(RelayError::InvalidAmount(format!(
            "{amount} is not a finite number"
        )));
    }
    if amount < 0.0 {
        return Err(RelayError::InvalidAmount(format!(
            "{amount} is negative"
        )));
    }
    let lamports = (amount * LAMPORTS_PER_SOL as f64).floor();
    if lamports >= u64::MAX as f64 {
        return Err(RelayError::InvalidAmount(format!(
            "{amount} SOL exceeds the representable lamport range"
        )));
    }
    Ok(lamports as u64)
}
