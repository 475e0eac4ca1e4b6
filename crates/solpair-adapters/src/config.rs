/// Endpoints and timeouts for the outbound clients. Defaults match the
/// hosted relay; env vars override for self-hosted or test setups.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub relay_base_url: String,
    pub rpc_url: String,
    pub request_timeout_ms: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            relay_base_url: "https://relay.ota.codes".to_owned(),
            rpc_url: "https://api.mainnet-beta.solana.com".to_owned(),
            request_timeout_ms: 30_000,
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            relay_base_url: std::env::var("SOLPAIR_RELAY_URL")
                .unwrap_or(defaults.relay_base_url),
            rpc_url: std::env::var("SOLPAIR_RPC_URL").unwrap_or(defaults.rpc_url),
            request_timeout_ms: std::env::var("SOLPAIR_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
        }
    }
}
