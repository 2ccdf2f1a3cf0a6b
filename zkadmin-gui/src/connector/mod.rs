//! Wallet connector capability.
//!
//! The panel never talks to a wallet directly: it triggers `activate` and
//! `deactivate` on the single connector built at startup and reads the
//! resulting [`ConnectorState`] back.

pub mod jsonrpc;

#[cfg(test)]
pub mod mock;

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

pub use jsonrpc::JsonRpcConnector;

/// Opaque handle on the provider the account was obtained from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub endpoint: String,
    pub chain_id: u64,
}

/// Snapshot of the connector state, refreshed after each operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectorState {
    pub is_active: bool,
    pub account: Option<String>,
    pub ens_name: Option<String>,
    pub provider: Option<ProviderInfo>,
}

impl ConnectorState {
    pub fn connected(account: String, provider: ProviderInfo) -> Self {
        Self {
            is_active: true,
            account: Some(account),
            ens_name: None,
            provider: Some(provider),
        }
    }
}

/// An external wallet operation was rejected.
///
/// Variants only refine the diagnostic, every one of them is handled the
/// same way by the panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectorError {
    #[error("wallet rejected the request: [{0}] {1}")]
    Rejected(i64, String),
    #[error("http error: [{0}] {1}")]
    Http(u16, String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("wallet returned no account")]
    NoAccount,
    #[error("invalid response from wallet: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait Connector: Debug {
    /// Human readable name of the wallet behind the connector.
    fn name(&self) -> &str;
    fn state(&self) -> ConnectorState;
    /// Ask the wallet to authorize an account.
    async fn activate(&self) -> Result<(), ConnectorError>;
    async fn deactivate(&self) -> Result<(), ConnectorError>;
}
