//! Bridge between the egui shell and the adapter clients.
//!
//! Each click spawns one background thread that drives the async flow to
//! completion and drops the result into a generation-tagged slot. The tag is
//! how abandoned requests get cancelled from the UI's point of view: a form
//! bumps its generation when it moves on, and stale responses are discarded
//! instead of overwriting newer state.

use std::sync::{Arc, Mutex};

use solpair_adapters::{RelayClient, RelayConfig, RpcClient};
use solpair_core::{RelayError, StatusOutcome};

/// Single-value handoff between a worker thread and the update loop.
pub struct ResultSlot<T> {
    inner: Arc<Mutex<Option<(u64, T)>>>,
}

impl<T> Clone for ResultSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T> ResultSlot<T> {
    pub fn put(&self, generation: u64, value: T) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some((generation, value));
        }
    }

    /// Take the value only if it belongs to the current generation;
    /// anything older came from a request the form already walked away from.
    pub fn take_if_current(&self, generation: u64) -> Option<T> {
        let mut guard = self.inner.lock().ok()?;
        match guard.take() {
            Some((tag, value)) if tag == generation => Some(value),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct RelayBridge {
    relay: RelayClient,
    rpc: RpcClient,
}

impl RelayBridge {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        Ok(Self {
            relay: RelayClient::new(config)?,
            rpc: RpcClient::new(config)?,
        })
    }

    /// Fire-and-forget startup fetch; no retry (the submit path reports
    /// `Blockhash not ready` if this never landed).
    pub fn fetch_blockhash(&self, slot: ResultSlot<Result<String, RelayError>>, generation: u64) {
        let rpc = self.rpc.clone();
        spawn_flow(slot, generation, async move { rpc.latest_blockhash().await });
    }

    pub fn submit_message(
        &self,
        code: String,
        message: String,
        slot: ResultSlot<Result<(), RelayError>>,
        generation: u64,
    ) {
        let relay = self.relay.clone();
        spawn_flow(slot, generation, async move {
            relay.submit_message_intent(&code, &message).await
        });
    }

    pub fn submit_transfer(
        &self,
        code: String,
        recipient: String,
        amount_sol: f64,
        blockhash: Option<String>,
        slot: ResultSlot<Result<(), RelayError>>,
        generation: u64,
    ) {
        let relay = self.relay.clone();
        spawn_flow(slot, generation, async move {
            relay
                .submit_transfer_intent(&code, &recipient, amount_sol, blockhash.as_deref())
                .await
        });
    }

    pub fn check_status(
        &self,
        code: String,
        slot: ResultSlot<Result<StatusOutcome, RelayError>>,
        generation: u64,
    ) {
        let relay = self.relay.clone();
        spawn_flow(slot, generation, async move {
            let code = solpair_core::PairingCode::parse(&code)?;
            relay.status(&code).await
        });
    }
}

fn spawn_flow<T, F>(slot: ResultSlot<Result<T, RelayError>>, generation: u64, flow: F)
where
    T: Send + 'static,
    F: std::future::Future<Output = Result<T, RelayError>> + Send + 'static,
{
    std::thread::spawn(move || {
        let outcome = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(flow),
            Err(e) => Err(RelayError::Transport(format!("runtime start failed: {e}"))),
        };
        if let Err(ref e) = outcome {
            tracing::debug!("background flow failed: {e}");
        }
        slot.put(generation, outcome);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_hands_back_the_current_generation() {
        let slot = ResultSlot::default();
        slot.put(3, "fresh");
        assert_eq!(slot.take_if_current(3), Some("fresh"));
        assert_eq!(slot.take_if_current(3), None);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let slot = ResultSlot::default();
        slot.put(1, "stale");
        assert_eq!(slot.take_if_current(2), None);
        assert_eq!(slot.take_if_current(1), None, "discard is permanent");
    }

    #[test]
    fn newer_response_wins_over_unclaimed_older_one() {
        let slot = ResultSlot::default();
        slot.put(1, "old");
        slot.put(2, "new");
        assert_eq!(slot.take_if_current(2), Some("new"));
    }
}
