//! # Service Traits
//!
//! Traits for dependency injection at every external seam of the dashboard.
//!
//! ```text
//! ┌──────────────┐   LendingSdk       ┌──────────────────────┐
//! │              │ ─────────────────► │  SDK gateway (HTTP)  │
//! │  Fetcher /   │   ContractService  │  pools, reads,       │
//! │  hooks       │ ─────────────────► │  simulations         │
//! │              │                    └──────────────────────┘
//! │              │   WalletConnector  ┌──────────────────────┐
//! │              │ ─────────────────► │  Wallet bridge       │
//! │              │                    └──────────────────────┘
//! │              │   Notifier         ┌──────────────────────┐
//! │              │ ─────────────────► │  Toast queue (egui)  │
//! └──────────────┘                    └──────────────────────┘
//! ```
//!
//! Production implementations live in [`crate::services`]; test doubles with
//! call counters live in `crate::testing`.

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use shared::{
    ChainId, LendingOptions, Pool, PreparedCall, Redemption, SimulateRequest, TxReceipt,
    WalletSession,
};

use super::error::Result;

/// Read-only lending SDK calls.
#[async_trait]
pub trait LendingSdk: Send + Sync {
    /// Fetch a single pool by contract address
    async fn get_lending_pool(&self, address: Address, opts: &LendingOptions) -> Result<Pool>;

    /// Fetch every pool on the chain in `opts`
    async fn get_lending_pools(&self, opts: &LendingOptions) -> Result<Vec<Pool>>;

    /// Pending redemptions for `account` in `pool`
    async fn get_available_redemptions(
        &self,
        pool: Address,
        account: Address,
        opts: &LendingOptions,
    ) -> Result<Vec<Redemption>>;
}

/// Contract reads, dry runs and receipts.
#[async_trait]
pub trait ContractService: Send + Sync {
    /// ERC-20 `decimals()`
    async fn decimals(&self, chain_id: ChainId, token: Address) -> Result<u8>;

    /// ERC-20 `symbol()`
    async fn symbol(&self, chain_id: ChainId, token: Address) -> Result<String>;

    /// Pool `lagDuration()` in seconds
    async fn lag_duration(&self, chain_id: ChainId, pool: Address) -> Result<U256>;

    /// ERC-20 `allowance(owner, spender)`
    async fn allowance(
        &self,
        chain_id: ChainId,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256>;

    /// Shares minted for depositing `assets`
    async fn preview_deposit(&self, chain_id: ChainId, pool: Address, assets: U256) -> Result<U256>;

    /// Assets returned for redeeming `shares`
    async fn preview_redeem(&self, chain_id: ChainId, pool: Address, shares: U256) -> Result<U256>;

    /// Dry-run a state-changing call and return the request to sign
    async fn simulate(&self, request: SimulateRequest) -> Result<PreparedCall>;

    /// Block until the transaction is mined
    async fn wait_for_transaction(&self, chain_id: ChainId, hash: TxHash) -> Result<TxReceipt>;
}

/// Connected wallet.
///
/// The getters are synchronous and read a locally cached session so they can
/// be called from the render loop.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    fn account(&self) -> Option<Address>;

    fn chain_id(&self) -> Option<ChainId>;

    /// Ask the wallet to connect and cache the resulting session
    async fn connect(&self) -> Result<WalletSession>;

    async fn disconnect(&self) -> Result<()>;

    /// Re-read the session from the wallet
    async fn refresh_session(&self) -> Result<WalletSession>;

    async fn switch_chain(&self, chain_id: ChainId) -> Result<()>;

    /// Sign and broadcast a previously simulated call
    async fn write_contract(&self, call: PreparedCall) -> Result<TxHash>;
}

/// Identifier of a persistent toast.
pub type ToastId = u64;

/// User-facing notifications.
pub trait Notifier: Send + Sync {
    /// Show a persistent loading toast with a close button
    fn loading(&self, message: &str) -> ToastId;

    fn success(&self, message: &str);

    fn info(&self, message: &str);

    fn warning(&self, message: &str);

    fn error(&self, message: &str);

    /// Remove a loading toast; unknown ids are ignored
    fn dismiss(&self, id: ToastId);
}
