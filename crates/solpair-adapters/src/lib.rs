pub mod config;
pub mod relay;
pub mod rpc;
pub mod transfer;

pub use config::RelayConfig;
pub use relay::RelayClient;
pub use rpc::RpcClient;
