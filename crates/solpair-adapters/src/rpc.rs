//! Minimal Solana JSON-RPC client. Only `getLatestBlockhash` is needed:
//! the blockhash feeds transaction construction and nothing else.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use solpair_core::RelayError;

use crate::config::RelayConfig;

#[derive(Debug, Clone)]
pub struct RpcClient {
    url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<BlockhashResult>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct BlockhashResult {
    value: BlockhashValue,
}

#[derive(Debug, Deserialize)]
struct BlockhashValue {
    blockhash: String,
}

impl RpcClient {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| RelayError::Transport(format!("failed to build rpc client: {e}")))?;
        Ok(Self {
            url: config.rpc_url.clone(),
            client,
        })
    }

    pub async fn latest_blockhash(&self) -> Result<String, RelayError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getLatestBlockhash",
            "params": [],
        });

        let resp = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Transport(format!("rpc request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RelayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: RpcEnvelope = resp
            .json()
            .await
            .map_err(|e| RelayError::Malformed(format!("rpc response: {e}")))?;
        if let Some(err) = envelope.error {
            return Err(RelayError::Malformed(format!("rpc error: {err}")));
        }
        envelope
            .result
            .map(|r| r.value.blockhash)
            .ok_or_else(|| RelayError::Malformed("rpc response missing result".to_owned()))
    }
}
