//! # Wallet Bridge
//!
//! Connects to the browser wallet through a small local HTTP bridge. The
//! bridge owns the keys; this client only asks it to connect, switch chain and
//! sign calls the gateway already simulated.
//!
//! ## Session Caching
//!
//! [`WalletConnector::account`] and [`WalletConnector::chain_id`] are called
//! every frame, so they read a session cached in a `parking_lot::RwLock`.
//! Every bridge call that returns a session refreshes the cache.

use std::time::Duration;

use alloy_primitives::{Address, TxHash};
use parking_lot::RwLock;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{ChainId, ErrorResponse, PreparedCall, SwitchChainRequest, WalletSession, WriteContractResponse};

use crate::config::DashboardConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::WalletConnector;

/// Wallet connection status shown in the header
#[derive(Debug, Clone, PartialEq)]
pub enum WalletStatus {
    /// Not connected
    Disconnected,
    /// Connect request in flight
    Connecting,
    /// Connected with wallet address
    Connected(Address),
    /// Error state with message
    Error(String),
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn address(&self) -> Option<Address> {
        match self {
            WalletStatus::Connected(address) => Some(*address),
            _ => None,
        }
    }
}

impl From<&WalletSession> for WalletStatus {
    fn from(session: &WalletSession) -> Self {
        match session.account {
            Some(account) => WalletStatus::Connected(account),
            None => WalletStatus::Disconnected,
        }
    }
}

/// HTTP client for the wallet bridge.
pub struct WalletBridge {
    client: Client,
    base_url: String,
    session: RwLock<WalletSession>,
}

impl WalletBridge {
    pub fn new(config: &DashboardConfig) -> Self {
        // Signing waits on the user, so allow far longer than gateway calls
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.wallet_url.trim_end_matches('/').to_string(),
            session: RwLock::new(WalletSession::default()),
        }
    }

    /// Last known session
    pub fn session(&self) -> WalletSession {
        self.session.read().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn store(&self, session: &WalletSession) {
        *self.session.write() = session.clone();
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Wallet bridge network error");
            AppError::Wallet(format!("Wallet bridge unreachable: {}", e))
        })?;
        decode(response).await
    }
}

/// Bridge errors arrive as `{ "error": "..." }` and become [`AppError::Wallet`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to parse bridge response: {}", e)));
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("Bridge request failed with status {}", status),
    };
    tracing::warn!(status = status.as_u16(), error = %message, "Wallet bridge returned an error");
    Err(AppError::Wallet(message))
}

#[async_trait::async_trait]
impl WalletConnector for WalletBridge {
    fn account(&self) -> Option<Address> {
        self.session.read().account
    }

    fn chain_id(&self) -> Option<ChainId> {
        self.session.read().chain_id
    }

    #[tracing::instrument(skip(self))]
    async fn connect(&self) -> Result<WalletSession> {
        let session: WalletSession = self.post("/api/wallet/connect", &serde_json::json!({})).await?;
        self.store(&session);
        tracing::info!(account = ?session.account, chain_id = ?session.chain_id, "Wallet connected");
        Ok(session)
    }

    #[tracing::instrument(skip(self))]
    async fn disconnect(&self) -> Result<()> {
        let _: serde_json::Value = self.post("/api/wallet/disconnect", &serde_json::json!({})).await?;
        self.store(&WalletSession::default());
        tracing::info!("Wallet disconnected");
        Ok(())
    }

    async fn refresh_session(&self) -> Result<WalletSession> {
        let url = self.url("/api/wallet/session");
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::debug!(error = %e, "Wallet session poll failed");
            AppError::Wallet(format!("Wallet bridge unreachable: {}", e))
        })?;

        let session: WalletSession = decode(response).await?;
        let changed = *self.session.read() != session;
        if changed {
            tracing::info!(account = ?session.account, chain_id = ?session.chain_id, "Wallet session changed");
            self.store(&session);
        }
        Ok(session)
    }

    #[tracing::instrument(skip(self))]
    async fn switch_chain(&self, chain_id: ChainId) -> Result<()> {
        let session: WalletSession = self
            .post("/api/wallet/switch-chain", &SwitchChainRequest { chain_id })
            .await?;
        self.store(&session);
        tracing::info!(chain_id = ?session.chain_id, "Chain switched");
        Ok(())
    }

    #[tracing::instrument(skip(self, call), fields(function = call.call.function_name(), address = %call.address))]
    async fn write_contract(&self, call: PreparedCall) -> Result<TxHash> {
        let response: WriteContractResponse = self.post("/api/wallet/write-contract", &call).await?;
        tracing::info!(hash = %response.hash, "Transaction broadcast");
        Ok(response.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::account_address;

    #[test]
    fn test_new_bridge_is_disconnected() {
        let bridge = WalletBridge::new(&DashboardConfig::default());
        assert!(bridge.account().is_none());
        assert!(bridge.chain_id().is_none());
        assert_eq!(WalletStatus::from(&bridge.session()), WalletStatus::Disconnected);
    }

    #[test]
    fn test_cached_session_feeds_getters() {
        let bridge = WalletBridge::new(&DashboardConfig::default());
        bridge.store(&WalletSession {
            account: Some(account_address()),
            chain_id: Some(8453),
        });
        assert_eq!(bridge.account(), Some(account_address()));
        assert_eq!(bridge.chain_id(), Some(8453));
    }

    #[test]
    fn test_wallet_status() {
        let connected = WalletStatus::Connected(account_address());
        assert!(connected.is_connected());
        assert_eq!(connected.address(), Some(account_address()));
        assert!(!WalletStatus::Connecting.is_connected());
        assert_eq!(WalletStatus::Error("boom".to_string()).address(), None);
    }
}
