//! HTTP client for the pairing relay.
//!
//! Endpoints:
//! - POST /api/attach
//! - POST /api/resolve
//! - GET  /api/status/{code}

use std::time::Duration;

use solpair_core::{
    lamports_from_sol, AttachRequest, PairingCode, RelayError, ResolveRequest, ResolveResponse,
    StatusOutcome,
};

use crate::config::RelayConfig;
use crate::transfer;

/// Relay client for submitting signing intents and polling their status.
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    client: reqwest::Client,
}

impl RelayClient {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| RelayError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self {
            base_url: config.relay_base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// Submit an intent. Success is any 2xx; the body is ignored.
    pub async fn attach(&self, request: &AttachRequest) -> Result<(), RelayError> {
        tracing::debug!(code = %request.code, intent = ?request.intent_type, "attaching intent");
        let url = format!("{}/api/attach", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| RelayError::Transport(format!("attach request failed: {e}")))?;
        read_success_body(resp).await?;
        Ok(())
    }

    /// Resolve a pairing code to the paired wallet's pubkey.
    pub async fn resolve(&self, code: &PairingCode) -> Result<String, RelayError> {
        let url = format!("{}/api/resolve", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&ResolveRequest { code: code.clone() })
            .send()
            .await
            .map_err(|e| RelayError::Transport(format!("resolve request failed: {e}")))?;
        let body = read_success_body(resp).await?;
        let parsed: ResolveResponse = serde_json::from_str(&body)
            .map_err(|e| RelayError::Malformed(format!("resolve response: {e}")))?;
        parsed.pubkey.ok_or(RelayError::CodeNotPaired)
    }

    /// Fetch the relay's view of the intent paired to `code`. A 2xx body
    /// that fails to parse is handed back verbatim for rendering.
    pub async fn status(&self, code: &PairingCode) -> Result<StatusOutcome, RelayError> {
        let url = format!("{}/api/status/{}", self.base_url, code);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RelayError::Transport(format!("status request failed: {e}")))?;
        let body = read_success_body(resp).await?;
        Ok(StatusOutcome::from_body(&body))
    }

    /// Full sign-message flow: local validation, then one attach call.
    /// Validation failures never reach the network.
    pub async fn submit_message_intent(
        &self,
        code_text: &str,
        message: &str,
    ) -> Result<(), RelayError> {
        let code = PairingCode::parse(code_text)?;
        let request = AttachRequest::sign_message(code, message.to_owned())?;
        self.attach(&request).await
    }

    /// Full transfer flow: validate, resolve the sender pubkey, build and
    /// serialize the unsigned transfer, attach. An unresolvable code aborts
    /// before any transaction is constructed.
    pub async fn submit_transfer_intent(
        &self,
        code_text: &str,
        recipient: &str,
        amount_sol: f64,
        blockhash: Option<&str>,
    ) -> Result<(), RelayError> {
        let code = PairingCode::parse(code_text)?;
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(RelayError::MissingRecipient);
        }
        let blockhash = blockhash.ok_or(RelayError::BlockhashUnavailable)?;
        let lamports = lamports_from_sol(amount_sol)?;

        let sender = self.resolve(&code).await?;
        let tx_base64 = transfer::build_unsigned_transfer(&sender, recipient, lamports, blockhash)?;
        self.attach(&AttachRequest::transaction(code, tx_base64)).await
    }
}

async fn read_success_body(resp: reqwest::Response) -> Result<String, RelayError> {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !status.is_success() {
        return Err(RelayError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
