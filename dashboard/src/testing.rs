//! Test doubles for the service traits.
//!
//! Every mock records its calls behind a `parking_lot::Mutex` so tests can
//! assert on exact call counts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use shared::{
    ChainId, LendingOptions, NormalizedAmount, Pool, PoolCall, PreparedCall, Redemption,
    SimulateRequest, TxReceipt, TxStatus, UnderlyingAsset, WalletSession,
};

use crate::core::error::{AppError, Result};
use crate::core::service::{ContractService, LendingSdk, Notifier, ToastId, WalletConnector};
use crate::hooks::TxDeps;
use crate::query::QueryClient;

pub const POOL_ADDRESS: &str = "0x1111111111111111111111111111111111111111";
pub const ASSET_ADDRESS: &str = "0x2222222222222222222222222222222222222222";
pub const ACCOUNT_ADDRESS: &str = "0x3333333333333333333333333333333333333333";

pub fn address(value: &str) -> Address {
    shared::parse_address(value).expect("test address")
}

pub fn pool_address() -> Address {
    address(POOL_ADDRESS)
}

pub fn asset_address() -> Address {
    address(ASSET_ADDRESS)
}

pub fn account_address() -> Address {
    address(ACCOUNT_ADDRESS)
}

/// USDC pool on mainnet, 6 decimals, 7 day lock.
pub fn sample_pool() -> Pool {
    Pool {
        address: pool_address(),
        name: "USDC Lending Pool".to_string(),
        symbol: "lpUSDC".to_string(),
        decimals: 6,
        underlying: UnderlyingAsset {
            address: asset_address(),
            symbol: "USDC".to_string(),
            decimals: 6,
        },
        total_supply: NormalizedAmount::from_raw(U256::from(1_250_000_000_000u64), 6),
        total_assets: NormalizedAmount::from_raw(U256::from(1_300_000_000_000u64), 6),
        apy: 5.2,
        lag_duration: 604_800,
        chain_id: 1,
    }
}

pub fn sample_redemption(raw: u64, is_matured: bool) -> Redemption {
    Redemption {
        amount: NormalizedAmount::from_raw(U256::from(raw), 6),
        year: NormalizedAmount::from_raw(U256::from(2026u64), 0),
        month: NormalizedAmount::from_raw(U256::from(5u64), 0),
        day: NormalizedAmount::from_raw(U256::from(1u64), 0),
        is_matured,
        receiver: account_address(),
    }
}

// ============================================================================
// Lending SDK
// ============================================================================

#[derive(Default)]
struct SdkCalls {
    pool: usize,
    pools: usize,
    redemptions: usize,
    last_options: Option<LendingOptions>,
}

pub struct MockSdk {
    pools: Vec<Pool>,
    redemptions: Vec<Redemption>,
    calls: Mutex<SdkCalls>,
}

impl Default for MockSdk {
    fn default() -> Self {
        Self::with_pools(vec![sample_pool()])
    }
}

impl MockSdk {
    pub fn with_pools(pools: Vec<Pool>) -> Self {
        Self {
            pools,
            redemptions: Vec::new(),
            calls: Mutex::new(SdkCalls::default()),
        }
    }

    pub fn with_redemptions(mut self, redemptions: Vec<Redemption>) -> Self {
        self.redemptions = redemptions;
        self
    }

    pub fn pool_calls(&self) -> usize {
        self.calls.lock().pool
    }

    pub fn pools_calls(&self) -> usize {
        self.calls.lock().pools
    }

    pub fn redemption_calls(&self) -> usize {
        self.calls.lock().redemptions
    }

    pub fn last_options(&self) -> Option<LendingOptions> {
        self.calls.lock().last_options.clone()
    }
}

#[async_trait]
impl LendingSdk for MockSdk {
    async fn get_lending_pool(&self, address: Address, opts: &LendingOptions) -> Result<Pool> {
        {
            let mut calls = self.calls.lock();
            calls.pool += 1;
            calls.last_options = Some(opts.clone());
        }
        self.pools
            .iter()
            .find(|pool| pool.address == address)
            .cloned()
            .ok_or_else(|| AppError::Api(format!("pool {address} not found")))
    }

    async fn get_lending_pools(&self, opts: &LendingOptions) -> Result<Vec<Pool>> {
        let mut calls = self.calls.lock();
        calls.pools += 1;
        calls.last_options = Some(opts.clone());
        Ok(self.pools.clone())
    }

    async fn get_available_redemptions(
        &self,
        _pool: Address,
        _account: Address,
        opts: &LendingOptions,
    ) -> Result<Vec<Redemption>> {
        let mut calls = self.calls.lock();
        calls.redemptions += 1;
        calls.last_options = Some(opts.clone());
        Ok(self.redemptions.clone())
    }
}

// ============================================================================
// Contract reads and simulation
// ============================================================================

pub struct MockContracts {
    pub decimals: u8,
    pub symbol: String,
    pub lag_duration: U256,
    allowance: Mutex<U256>,
    preview_out: Mutex<U256>,
    simulate_error: Mutex<Option<AppError>>,
    receipt_status: Mutex<TxStatus>,
    reads: Mutex<Vec<&'static str>>,
    previews: Mutex<Vec<U256>>,
    simulations: Mutex<Vec<SimulateRequest>>,
    receipts: Mutex<Vec<TxHash>>,
}

impl Default for MockContracts {
    fn default() -> Self {
        Self {
            decimals: 6,
            symbol: "USDC".to_string(),
            lag_duration: U256::from(604_800u64),
            allowance: Mutex::new(U256::MAX),
            preview_out: Mutex::new(U256::from(99_950_000u64)),
            simulate_error: Mutex::new(None),
            receipt_status: Mutex::new(TxStatus::Success),
            reads: Mutex::new(Vec::new()),
            previews: Mutex::new(Vec::new()),
            simulations: Mutex::new(Vec::new()),
            receipts: Mutex::new(Vec::new()),
        }
    }
}

impl MockContracts {
    pub fn set_allowance(&self, allowance: U256) {
        *self.allowance.lock() = allowance;
    }

    pub fn set_preview_out(&self, out: U256) {
        *self.preview_out.lock() = out;
    }

    pub fn fail_simulation(&self, error: AppError) {
        *self.simulate_error.lock() = Some(error);
    }

    pub fn set_receipt_status(&self, status: TxStatus) {
        *self.receipt_status.lock() = status;
    }

    /// Function names of every read, in call order
    pub fn reads(&self) -> Vec<&'static str> {
        self.reads.lock().clone()
    }

    /// Amounts passed to `previewDeposit` / `previewRedeem`
    pub fn previews(&self) -> Vec<U256> {
        self.previews.lock().clone()
    }

    pub fn simulations(&self) -> Vec<SimulateRequest> {
        self.simulations.lock().clone()
    }

    pub fn receipt_waits(&self) -> usize {
        self.receipts.lock().len()
    }

    /// Every call of any kind
    pub fn total_calls(&self) -> usize {
        self.reads.lock().len() + self.simulations.lock().len() + self.receipts.lock().len()
    }
}

#[async_trait]
impl ContractService for MockContracts {
    async fn decimals(&self, _chain_id: ChainId, _token: Address) -> Result<u8> {
        self.reads.lock().push("decimals");
        Ok(self.decimals)
    }

    async fn symbol(&self, _chain_id: ChainId, _token: Address) -> Result<String> {
        self.reads.lock().push("symbol");
        Ok(self.symbol.clone())
    }

    async fn lag_duration(&self, _chain_id: ChainId, _pool: Address) -> Result<U256> {
        self.reads.lock().push("lagDuration");
        Ok(self.lag_duration)
    }

    async fn allowance(
        &self,
        _chain_id: ChainId,
        _token: Address,
        _owner: Address,
        _spender: Address,
    ) -> Result<U256> {
        self.reads.lock().push("allowance");
        Ok(*self.allowance.lock())
    }

    async fn preview_deposit(&self, _chain_id: ChainId, _pool: Address, assets: U256) -> Result<U256> {
        self.reads.lock().push("previewDeposit");
        self.previews.lock().push(assets);
        Ok(*self.preview_out.lock())
    }

    async fn preview_redeem(&self, _chain_id: ChainId, _pool: Address, shares: U256) -> Result<U256> {
        self.reads.lock().push("previewRedeem");
        self.previews.lock().push(shares);
        Ok(*self.preview_out.lock())
    }

    async fn simulate(&self, request: SimulateRequest) -> Result<PreparedCall> {
        self.simulations.lock().push(request.clone());
        if let Some(error) = self.simulate_error.lock().clone() {
            return Err(error);
        }
        if let PoolCall::Approve { amount, .. } = &request.call {
            // Approval raises the allowance seen by later reads
            *self.allowance.lock() = *amount;
        }
        Ok(PreparedCall {
            chain_id: request.chain_id,
            account: request.account,
            address: request.address,
            call: request.call,
            gas: Some(120_000),
            request: serde_json::json!({ "simulated": true }),
        })
    }

    async fn wait_for_transaction(&self, _chain_id: ChainId, hash: TxHash) -> Result<TxReceipt> {
        self.receipts.lock().push(hash);
        Ok(TxReceipt {
            transaction_hash: hash,
            status: *self.receipt_status.lock(),
            block_number: 19_000_000,
        })
    }
}

// ============================================================================
// Wallet
// ============================================================================

pub struct MockWallet {
    session: RwLock<WalletSession>,
    write_error: Mutex<Option<AppError>>,
    switch_error: Mutex<Option<AppError>>,
    switches: Mutex<Vec<ChainId>>,
    writes: Mutex<Vec<PreparedCall>>,
    connects: Mutex<usize>,
}

impl MockWallet {
    fn with_session(session: WalletSession) -> Self {
        Self {
            session: RwLock::new(session),
            write_error: Mutex::new(None),
            switch_error: Mutex::new(None),
            switches: Mutex::new(Vec::new()),
            writes: Mutex::new(Vec::new()),
            connects: Mutex::new(0),
        }
    }

    pub fn connected(chain_id: ChainId) -> Self {
        Self::with_session(WalletSession {
            account: Some(account_address()),
            chain_id: Some(chain_id),
        })
    }

    pub fn disconnected() -> Self {
        Self::with_session(WalletSession::default())
    }

    pub fn fail_write(&self, error: AppError) {
        *self.write_error.lock() = Some(error);
    }

    pub fn fail_switch(&self, error: AppError) {
        *self.switch_error.lock() = Some(error);
    }

    pub fn switches(&self) -> Vec<ChainId> {
        self.switches.lock().clone()
    }

    pub fn writes(&self) -> Vec<PreparedCall> {
        self.writes.lock().clone()
    }

    pub fn connects(&self) -> usize {
        *self.connects.lock()
    }

    /// Hash returned for the n-th write (1-based)
    pub fn hash_for(n: usize) -> TxHash {
        TxHash::with_last_byte(n as u8)
    }
}

#[async_trait]
impl WalletConnector for MockWallet {
    fn account(&self) -> Option<Address> {
        self.session.read().account
    }

    fn chain_id(&self) -> Option<ChainId> {
        self.session.read().chain_id
    }

    async fn connect(&self) -> Result<WalletSession> {
        *self.connects.lock() += 1;
        let mut session = self.session.write();
        session.account = Some(account_address());
        session.chain_id.get_or_insert(1);
        Ok(session.clone())
    }

    async fn disconnect(&self) -> Result<()> {
        *self.session.write() = WalletSession::default();
        Ok(())
    }

    async fn refresh_session(&self) -> Result<WalletSession> {
        Ok(self.session.read().clone())
    }

    async fn switch_chain(&self, chain_id: ChainId) -> Result<()> {
        self.switches.lock().push(chain_id);
        if let Some(error) = self.switch_error.lock().clone() {
            return Err(error);
        }
        self.session.write().chain_id = Some(chain_id);
        Ok(())
    }

    async fn write_contract(&self, call: PreparedCall) -> Result<TxHash> {
        if let Some(error) = self.write_error.lock().clone() {
            return Err(error);
        }
        let mut writes = self.writes.lock();
        writes.push(call);
        Ok(Self::hash_for(writes.len()))
    }
}

// ============================================================================
// Notifier
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<(ToastKind, String)>>,
    dismissed: Mutex<Vec<ToastId>>,
    next_id: AtomicU64,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<(ToastKind, String)> {
        self.toasts.lock().clone()
    }

    pub fn messages(&self, kind: ToastKind) -> Vec<String> {
        self.toasts
            .lock()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn dismissed(&self) -> Vec<ToastId> {
        self.dismissed.lock().clone()
    }

    fn push(&self, kind: ToastKind, message: &str) {
        self.toasts.lock().push((kind, message.to_string()));
    }
}

impl Notifier for RecordingNotifier {
    fn loading(&self, message: &str) -> ToastId {
        self.push(ToastKind::Loading, message);
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn info(&self, message: &str) {
        self.push(ToastKind::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(ToastKind::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }

    fn dismiss(&self, id: ToastId) {
        self.dismissed.lock().push(id);
    }
}

// ============================================================================
// Hook harness
// ============================================================================

/// Mocks wired into [`TxDeps`], kept as concrete types for assertions.
pub struct Harness {
    pub contracts: Arc<MockContracts>,
    pub wallet: Arc<MockWallet>,
    pub notifier: Arc<RecordingNotifier>,
    pub queries: QueryClient,
}

impl Harness {
    fn with_wallet(wallet: MockWallet) -> Self {
        Self {
            contracts: Arc::new(MockContracts::default()),
            wallet: Arc::new(wallet),
            notifier: Arc::new(RecordingNotifier::default()),
            queries: QueryClient::default(),
        }
    }

    pub fn connected(chain_id: ChainId) -> Self {
        Self::with_wallet(MockWallet::connected(chain_id))
    }

    pub fn disconnected() -> Self {
        Self::with_wallet(MockWallet::disconnected())
    }

    pub fn deps(&self) -> TxDeps {
        TxDeps {
            contracts: self.contracts.clone(),
            wallet: self.wallet.clone(),
            notifier: self.notifier.clone(),
            queries: self.queries.clone(),
        }
    }
}
