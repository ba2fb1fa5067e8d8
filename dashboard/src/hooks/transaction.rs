//! # Transaction Hook Core
//!
//! State, failure classification and the submission template shared by
//! [`DepositHook`](super::DepositHook) and [`WithdrawHook`](super::WithdrawHook).
//!
//! ```text
//!            set_value / reset
//!   ┌──────┐ ───────────────► ┌────────────┐  precondition  ┌──────┐
//!   │ Idle │                  │ Validating │ ─────────────► │ Idle │ (Skipped)
//!   └──────┘ ◄─────────────── └─────┬──────┘  chain switch  └──────┘
//!       ▲        reset (4s)         │
//!       │                           ▼
//!   ┌───┴─────┐   hash   ┌────────────┐   error   ┌───────┐
//!   │ Success │ ◄─────── │ Submitting │ ────────► │ Error │
//!   └─────────┘          └────────────┘           └───────┘
//! ```
//!
//! Hook state lives in an `Arc<RwLock<TxUiState>>` owned by one hook. The UI
//! thread reads snapshots through [`TxHook::state`]; Tokio tasks write through
//! short lock scopes that never span an `.await`.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{Address, TxHash, U256};
use parking_lot::RwLock;
use shared::{
    amount::DEFAULT_DECIMALS, ChainId, NormalizedAmount, PoolCall, Redemption, SimulateRequest,
    TxStatus,
};

use crate::config::DashboardConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{ContractService, Notifier, WalletConnector};
use crate::debug::spawn_tracked;
use crate::query::QueryClient;

use super::timer::Timer;

/// Placeholder network fee shown next to the preview, in raw asset units.
pub const ESTIMATED_FEE_RAW: u64 = 200_000;

pub const USER_REJECTED_TOAST: &str = "User rejected transaction";
pub const EXECUTION_ERROR_TOAST: &str = "Error executing transaction";
pub const FALLBACK_ERROR_LABEL: &str = "Error occurred while executing transaction";

/// Action button labels.
pub mod labels {
    pub const ZERO: &str = "Enter an amount";
    pub const SUBMIT: &str = "Submit";
    pub const SUBMITTING: &str = "Submitting...";
    pub const SUCCESS: &str = "Success!";
    pub const ERROR: &str = "Error";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub text: &'static str,
    pub disabled: bool,
}

impl ButtonState {
    pub const fn zero() -> Self {
        Self { text: labels::ZERO, disabled: true }
    }

    pub const fn submit() -> Self {
        Self { text: labels::SUBMIT, disabled: false }
    }

    pub const fn submitting() -> Self {
        Self { text: labels::SUBMITTING, disabled: true }
    }

    pub const fn success() -> Self {
        Self { text: labels::SUCCESS, disabled: true }
    }

    pub const fn error() -> Self {
        Self { text: labels::ERROR, disabled: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

/// Preview of the pending transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Expected {
    pub fee: NormalizedAmount,
    pub out: NormalizedAmount,
    /// A debounced preview is pending or in flight
    pub loading: bool,
}

impl Expected {
    fn zero(decimals: u8) -> Self {
        Self {
            fee: NormalizedAmount::zero(decimals),
            out: NormalizedAmount::zero(decimals),
            loading: false,
        }
    }
}

impl Default for Expected {
    fn default() -> Self {
        Self::zero(DEFAULT_DECIMALS)
    }
}

/// Asset metadata read from chain.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMeta {
    pub decimals: Option<u8>,
    pub symbol: Option<String>,
    /// Pool lag duration in seconds
    pub lock_time: NormalizedAmount,
}

impl TokenMeta {
    pub fn is_loaded(&self) -> bool {
        self.decimals.is_some() && self.symbol.is_some()
    }
}

impl Default for TokenMeta {
    fn default() -> Self {
        Self {
            decimals: None,
            symbol: None,
            lock_time: NormalizedAmount::zero(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TxUiState {
    pub phase: TxPhase,
    pub is_loading: bool,
    pub is_success: bool,
    /// Short failure label, empty when there is none
    pub error: String,
    pub button: ButtonState,
    pub expected: Expected,
    pub meta: TokenMeta,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Inputs a hook acts on.
#[derive(Debug, Clone, Default)]
pub struct TxParams {
    pub pool: Option<Address>,
    pub asset: Option<Address>,
    pub value: String,
    /// Chain the transaction must run on; `None` uses the wallet's chain
    pub chain_id: Option<ChainId>,
    pub redemptions: Vec<Redemption>,
}

/// Collaborators shared by every hook instance.
#[derive(Clone)]
pub struct TxDeps {
    pub contracts: Arc<dyn ContractService>,
    pub wallet: Arc<dyn WalletConnector>,
    pub notifier: Arc<dyn Notifier>,
    pub queries: QueryClient,
}

#[derive(Debug, Clone)]
pub struct HookSettings {
    pub preview_delay: Duration,
    pub success_reset: Duration,
    pub fallback_chain_id: ChainId,
    /// Log transaction hashes at info level
    pub dev_mode: bool,
}

impl Default for HookSettings {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl HookSettings {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            preview_delay: config.preview_delay,
            success_reset: config.success_reset,
            fallback_chain_id: config.fallback_chain_id,
            dev_mode: config.dev_mode,
        }
    }
}

/// Reason a submission stopped before any transaction was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    WalletDisconnected,
    MissingPool,
    MissingAsset,
    MissingValue,
    ZeroAmount,
    MetadataUnavailable,
    RedemptionNotFound,
}

impl Precondition {
    pub fn describe(&self) -> &'static str {
        match self {
            Precondition::WalletDisconnected => "no wallet connected",
            Precondition::MissingPool => "no pool selected",
            Precondition::MissingAsset => "no asset selected",
            Precondition::MissingValue => "no amount entered",
            Precondition::ZeroAmount => "amount is zero",
            Precondition::MetadataUnavailable => "token metadata unavailable",
            Precondition::RedemptionNotFound => "no redemption matches the amount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    UserRejected,
    Execution,
}

/// Classified transaction failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxFailure {
    pub kind: FailureKind,
    /// Text before the first `:` of the error
    pub label: String,
}

impl TxFailure {
    pub fn classify(error: &dyn Display) -> Self {
        let text = error.to_string();

        let kind = if text.to_lowercase().contains("user rejected") {
            FailureKind::UserRejected
        } else {
            FailureKind::Execution
        };

        let label = match text.split_once(':') {
            Some((prefix, _)) if !prefix.trim().is_empty() => prefix.trim().to_string(),
            _ => FALLBACK_ERROR_LABEL.to_string(),
        };

        Self { kind, label }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxOutcome {
    Skipped(Precondition),
    ChainSwitchRequested(ChainId),
    Submitted(TxHash),
    Failed(TxFailure),
}

/// What a hook asks the wallet to sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxAction {
    Deposit,
    RequestRedeem,
    Claim,
}

impl TxAction {
    /// Contract function, used as the log field
    pub fn name(&self) -> &'static str {
        match self {
            TxAction::Deposit => "deposit",
            TxAction::RequestRedeem => "requestRedeem",
            TxAction::Claim => "claim",
        }
    }

    /// Verb shown in the loading toast
    pub fn verb(&self) -> &'static str {
        match self {
            TxAction::Deposit => "deposit",
            TxAction::RequestRedeem => "redeem",
            TxAction::Claim => "withdraw",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TxAction::Deposit => "Deposit",
            TxAction::RequestRedeem => "Redeem request",
            TxAction::Claim => "Withdrawal",
        }
    }
}

/// Which pool preview the debounced simulation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Deposit,
    Redeem,
}

/// Validated inputs of one submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub account: Address,
    pub pool: Address,
    pub asset: Address,
    pub chain_id: ChainId,
    pub amount: NormalizedAmount,
    pub symbol: String,
    pub redemption: Option<Redemption>,
}

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Shared state of one hook instance; outlives the hook only while a timer
/// task still holds it.
pub struct TxCore {
    preview: PreviewKind,
    pub(super) deps: TxDeps,
    settings: HookSettings,
    state: RwLock<TxUiState>,
    params: RwLock<TxParams>,
    clear_input: RwLock<Option<Callback>>,
    close_modal: RwLock<Option<Callback>>,
}

impl TxCore {
    fn state(&self) -> TxUiState {
        self.state.read().clone()
    }

    fn params(&self) -> TxParams {
        self.params.read().clone()
    }

    fn update<F: FnOnce(&mut TxUiState)>(&self, f: F) {
        f(&mut self.state.write());
    }

    fn decimals(&self) -> u8 {
        self.state.read().meta.decimals.unwrap_or(DEFAULT_DECIMALS)
    }

    /// Explicit chain, else the wallet's, else the configured fallback.
    fn active_chain(&self) -> ChainId {
        self.params
            .read()
            .chain_id
            .or_else(|| self.deps.wallet.chain_id())
            .unwrap_or(self.settings.fallback_chain_id)
    }

    fn reset(&self) {
        self.params.write().value.clear();
        let decimals = self.decimals();
        self.update(|state| {
            state.phase = TxPhase::Idle;
            state.is_loading = false;
            state.is_success = false;
            state.error.clear();
            state.button = ButtonState::zero();
            state.expected = Expected::zero(decimals);
        });

        let clear_input = self.clear_input.read().clone();
        if let Some(callback) = clear_input {
            callback();
        }
    }

    fn close_modal(&self) {
        let close_modal = self.close_modal.read().clone();
        if let Some(callback) = close_modal {
            callback();
        }
    }

    async fn load_metadata(&self) -> Result<TokenMeta> {
        let params = self.params();
        let (Some(pool), Some(asset)) = (params.pool, params.asset) else {
            return Err(AppError::State(
                "pool and asset are required to load token metadata".to_string(),
            ));
        };
        let chain_id = self.active_chain();
        let contracts = &self.deps.contracts;

        let (decimals, symbol, lag) = tokio::try_join!(
            contracts.decimals(chain_id, asset),
            contracts.symbol(chain_id, asset),
            contracts.lag_duration(chain_id, pool),
        )?;

        let meta = TokenMeta {
            decimals: Some(decimals),
            symbol: Some(symbol),
            lock_time: NormalizedAmount::from_raw(lag, 0),
        };
        let current = self.params();
        if current.pool != params.pool || current.asset != params.asset || self.active_chain() != chain_id {
            tracing::debug!(asset = %asset, "Token metadata for a previous target discarded");
            return Ok(meta);
        }
        tracing::debug!(
            asset = %asset,
            decimals = decimals,
            lock_time = %meta.lock_time,
            "Token metadata loaded"
        );
        self.update(|state| state.meta = meta.clone());
        Ok(meta)
    }

    async fn ensure_metadata(&self) -> Result<TokenMeta> {
        let meta = self.state.read().meta.clone();
        if meta.is_loaded() {
            return Ok(meta);
        }
        self.load_metadata().await
    }

    async fn simulate(&self) {
        let params = self.params();

        if params.value.trim().is_empty() {
            let decimals = self.decimals();
            self.update(|state| state.expected = Expected::zero(decimals));
            return;
        }

        let wallet = &self.deps.wallet;
        let (Some(_account), Some(pool), Some(_asset)) = (wallet.account(), params.pool, params.asset)
        else {
            return;
        };
        let Some(wallet_chain) = wallet.chain_id() else {
            return;
        };
        if params.chain_id.is_some_and(|chain_id| chain_id != wallet_chain) {
            tracing::debug!(wallet_chain = wallet_chain, "Preview skipped on chain mismatch");
            return;
        }

        let decimals = match self.ensure_metadata().await {
            Ok(meta) => meta.decimals.unwrap_or(DEFAULT_DECIMALS),
            Err(e) => {
                tracing::warn!(error = %e, "Token metadata unavailable for preview");
                self.decimals()
            }
        };
        let amount = NormalizedAmount::from_input(&params.value, decimals);

        let contracts = &self.deps.contracts;
        let preview = match self.preview {
            PreviewKind::Deposit => contracts.preview_deposit(wallet_chain, pool, amount.raw).await,
            PreviewKind::Redeem => contracts.preview_redeem(wallet_chain, pool, amount.raw).await,
        };

        match preview {
            Ok(out) => self.update(|state| {
                state.expected = Expected {
                    fee: NormalizedAmount::from_raw(U256::from(ESTIMATED_FEE_RAW), decimals),
                    out: NormalizedAmount::from_raw(out, decimals),
                    loading: false,
                }
            }),
            Err(e) => {
                tracing::warn!(pool = %pool, amount = %amount, error = %e, "Preview failed");
                self.update(|state| state.expected.loading = false);
            }
        }
    }

    /// Dry-run `call` against `address`, then have the wallet sign it.
    pub(super) async fn write(&self, tx: &Submission, address: Address, call: PoolCall) -> Result<TxHash> {
        let function = call.function_name();
        let request = SimulateRequest {
            chain_id: tx.chain_id,
            account: tx.account,
            address,
            call,
        };

        tracing::debug!(function = function, address = %address, chain_id = tx.chain_id, "Simulating call");
        let prepared = self.deps.contracts.simulate(request).await?;
        let hash = self.deps.wallet.write_contract(prepared).await?;
        tracing::debug!(function = function, hash = %hash, "Call written");
        Ok(hash)
    }

    /// Wait for a receipt and fail unless the transaction succeeded.
    pub(super) async fn confirm(&self, chain_id: ChainId, hash: TxHash) -> Result<()> {
        let receipt = self.deps.contracts.wait_for_transaction(chain_id, hash).await?;
        match receipt.status {
            TxStatus::Success => Ok(()),
            TxStatus::Reverted => Err(AppError::Contract(format!(
                "transaction reverted: {hash} in block {}",
                receipt.block_number
            ))),
        }
    }
}

/// Input, preview and submission handling common to deposit and withdraw.
pub struct TxHook {
    core: Arc<TxCore>,
    preview_timer: Timer,
    reset_timer: Timer,
}

impl TxHook {
    pub(super) fn new(preview: PreviewKind, deps: TxDeps, settings: HookSettings) -> Self {
        Self {
            core: Arc::new(TxCore {
                preview,
                deps,
                settings,
                state: RwLock::new(TxUiState::default()),
                params: RwLock::new(TxParams::default()),
                clear_input: RwLock::new(None),
                close_modal: RwLock::new(None),
            }),
            preview_timer: Timer::new("tx_preview"),
            reset_timer: Timer::new("tx_success_reset"),
        }
    }

    pub fn state(&self) -> TxUiState {
        self.core.state()
    }

    pub fn params(&self) -> TxParams {
        self.core.params()
    }

    /// Point the hook at a pool. Cached metadata is dropped when the pool,
    /// asset or chain changes.
    pub fn set_target(&self, pool: Option<Address>, asset: Option<Address>, chain_id: Option<ChainId>) {
        let changed = {
            let mut params = self.core.params.write();
            let changed = params.pool != pool || params.asset != asset || params.chain_id != chain_id;
            params.pool = pool;
            params.asset = asset;
            params.chain_id = chain_id;
            changed
        };
        if changed {
            self.core.update(|state| state.meta = TokenMeta::default());
            self.prefetch_metadata();
        }
    }

    /// Load token metadata in the background so a submission finds the
    /// decimals cached.
    fn prefetch_metadata(&self) {
        {
            let params = self.core.params.read();
            if params.pool.is_none() || params.asset.is_none() {
                return;
            }
        }
        if tokio::runtime::Handle::try_current().is_err() {
            tracing::debug!("No runtime, token metadata loads on first submission");
            return;
        }

        let core = self.core.clone();
        spawn_tracked("tx_metadata", async move {
            if let Err(e) = core.load_metadata().await {
                tracing::warn!(error = %e, "Token metadata prefetch failed");
            }
        });
    }

    pub fn set_redemptions(&self, redemptions: Vec<Redemption>) {
        self.core.params.write().redemptions = redemptions;
    }

    /// Called by `reset()` to clear an externally owned input
    pub fn on_clear_input(&self, callback: impl Fn() + Send + Sync + 'static) {
        *self.core.clear_input.write() = Some(Arc::new(callback));
    }

    /// Called after the success auto-reset
    pub fn on_close_modal(&self, callback: impl Fn() + Send + Sync + 'static) {
        *self.core.close_modal.write() = Some(Arc::new(callback));
    }

    /// Update the input, recompute the button and debounce a preview.
    ///
    /// Must be called inside a Tokio runtime context.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        let amount = NormalizedAmount::from_input(&value, self.core.decimals());
        self.core.params.write().value = value;

        self.core.update(|state| {
            if amount.is_zero() {
                state.button = ButtonState::zero();
            } else {
                state.button = ButtonState::submit();
                state.error.clear();
                if state.phase == TxPhase::Error {
                    state.phase = TxPhase::Idle;
                }
            }
            state.expected.loading = true;
        });

        let core = self.core.clone();
        self.preview_timer
            .schedule(self.core.settings.preview_delay, async move { core.simulate().await });
    }

    /// Refresh the fee and output preview now.
    pub async fn simulate(&self) {
        self.core.simulate().await;
    }

    pub fn reset(&self) {
        self.reset_timer.cancel();
        self.core.reset();
    }

    pub async fn load_metadata(&self) -> Result<TokenMeta> {
        self.core.load_metadata().await
    }

    /// Whether the success auto-reset is still pending
    pub fn reset_pending(&self) -> bool {
        self.reset_timer.is_pending()
    }

    /// Validate, switch chain if needed, run `steps`, then settle.
    pub(super) async fn submit<F, Fut>(&self, action: TxAction, steps: F) -> TxOutcome
    where
        F: FnOnce(Arc<TxCore>, Submission) -> Fut,
        Fut: Future<Output = Result<TxHash>>,
    {
        let core = &self.core;
        core.update(|state| state.phase = TxPhase::Validating);

        let tx = match self.prepare(action).await {
            Ok(tx) => tx,
            Err(precondition) => {
                core.update(|state| state.phase = TxPhase::Idle);
                return TxOutcome::Skipped(precondition);
            }
        };

        let wallet = &core.deps.wallet;
        let switch_to = core.params.read().chain_id.filter(|id| wallet.chain_id() != Some(*id));
        if let Some(target) = switch_to {
            tracing::info!(
                action = action.name(),
                from = ?wallet.chain_id(),
                to = target,
                "Requesting chain switch before submission"
            );
            let outcome = match wallet.switch_chain(target).await {
                Ok(()) => {
                    core.update(|state| state.phase = TxPhase::Idle);
                    TxOutcome::ChainSwitchRequested(target)
                }
                Err(e) => TxOutcome::Failed(self.settle_failure(action, &e)),
            };
            core.update(|state| state.is_loading = false);
            return outcome;
        }

        core.update(|state| {
            state.phase = TxPhase::Submitting;
            state.is_loading = true;
            state.error.clear();
            state.button = ButtonState::submitting();
        });
        let notifier = &core.deps.notifier;
        let toast = notifier.loading(&format!(
            "Submitted {} for {} {}",
            action.verb(),
            tx.amount.normalized,
            tx.symbol
        ));
        tracing::info!(
            action = action.name(),
            pool = %tx.pool,
            amount = %tx.amount,
            chain_id = tx.chain_id,
            "Submitting transaction"
        );

        let outcome = match steps(core.clone(), tx.clone()).await {
            Ok(hash) => {
                self.settle_success(action, &tx, hash);
                TxOutcome::Submitted(hash)
            }
            Err(e) => TxOutcome::Failed(self.settle_failure(action, &e)),
        };

        notifier.dismiss(toast);
        core.update(|state| state.is_loading = false);
        outcome
    }

    async fn prepare(&self, action: TxAction) -> std::result::Result<Submission, Precondition> {
        let core = &self.core;
        let params = core.params();

        let skip = |precondition: Precondition| {
            tracing::warn!(action = action.name(), reason = precondition.describe(), "Transaction skipped");
            precondition
        };

        let account = core.deps.wallet.account().ok_or_else(|| skip(Precondition::WalletDisconnected))?;
        let pool = params.pool.ok_or_else(|| skip(Precondition::MissingPool))?;
        let asset = params.asset.ok_or_else(|| skip(Precondition::MissingAsset))?;
        if params.value.trim().is_empty() {
            return Err(skip(Precondition::MissingValue));
        }

        // Everything up to here is local; metadata is only read once the
        // amount passes at the cached precision
        let exact = core.state.read().meta.is_loaded();
        let cached = core.decimals();
        let (mut amount, mut redemption) = Self::check_amount(action, &params, cached, exact).map_err(&skip)?;

        let meta = core.ensure_metadata().await.map_err(|e| {
            tracing::warn!(action = action.name(), error = %e, "Token metadata load failed");
            skip(Precondition::MetadataUnavailable)
        })?;
        let decimals = meta.decimals.unwrap_or(DEFAULT_DECIMALS);
        if !exact || decimals != cached {
            (amount, redemption) = Self::check_amount(action, &params, decimals, true).map_err(&skip)?;
        }

        Ok(Submission {
            account,
            pool,
            asset,
            chain_id: core.active_chain(),
            amount,
            symbol: meta.symbol.unwrap_or_default(),
            redemption,
        })
    }

    /// Normalize the input at `decimals` and, for a claim, find the
    /// redemption it names. Without `exact` decimals a claim is only
    /// rejected when no precision up to 18 could match.
    fn check_amount(
        action: TxAction,
        params: &TxParams,
        decimals: u8,
        exact: bool,
    ) -> std::result::Result<(NormalizedAmount, Option<Redemption>), Precondition> {
        let amount = NormalizedAmount::from_input(&params.value, decimals);
        if amount.is_zero() {
            return Err(Precondition::ZeroAmount);
        }
        if action != TxAction::Claim {
            return Ok((amount, None));
        }

        if exact {
            let found = params.redemptions.iter().find(|r| r.matches(amount.raw)).cloned();
            if found.is_none() {
                tracing::error!(
                    amount = %amount,
                    available = params.redemptions.len(),
                    "No redemption matches the requested amount"
                );
                return Err(Precondition::RedemptionNotFound);
            }
            return Ok((amount, found));
        }

        let plausible = (0..=DEFAULT_DECIMALS).any(|candidate| {
            let raw = NormalizedAmount::from_input(&params.value, candidate).raw;
            params.redemptions.iter().any(|r| r.matches(raw))
        });
        if !plausible {
            tracing::error!(
                value = %params.value,
                available = params.redemptions.len(),
                "No redemption matches the requested amount at any precision"
            );
            return Err(Precondition::RedemptionNotFound);
        }
        Ok((amount, None))
    }

    fn settle_success(&self, action: TxAction, tx: &Submission, hash: TxHash) {
        let core = &self.core;
        self.track_receipt(action, tx, hash);

        core.deps.queries.refetch_queries();
        core.update(|state| {
            state.phase = TxPhase::Success;
            state.is_success = true;
            state.button = ButtonState::success();
        });

        if core.settings.dev_mode {
            tracing::info!(action = action.name(), hash = %hash, "Transaction hash");
        }

        let reset_core = core.clone();
        self.reset_timer.schedule(core.settings.success_reset, async move {
            reset_core.reset();
            reset_core.close_modal();
        });
    }

    fn settle_failure(&self, action: TxAction, error: &AppError) -> TxFailure {
        let failure = TxFailure::classify(error);
        let notifier = &self.core.deps.notifier;

        let button = match failure.kind {
            FailureKind::UserRejected => {
                tracing::warn!(action = action.name(), "User rejected transaction");
                notifier.warning(USER_REJECTED_TOAST);
                ButtonState::submit()
            }
            FailureKind::Execution => {
                tracing::error!(action = action.name(), error = %error, "Transaction failed");
                notifier.error(EXECUTION_ERROR_TOAST);
                ButtonState::error()
            }
        };

        self.core.update(|state| {
            state.phase = TxPhase::Error;
            state.is_success = false;
            state.error = failure.label.clone();
            state.button = button;
        });
        failure
    }

    /// Announce the hash now and the mined result once the receipt arrives.
    fn track_receipt(&self, action: TxAction, tx: &Submission, hash: TxHash) {
        let notifier = self.core.deps.notifier.clone();
        notifier.info(&format!(
            "{} sent: {}",
            action.title(),
            shared::truncate_address(&hash.to_string())
        ));

        let contracts = self.core.deps.contracts.clone();
        let chain_id = tx.chain_id;
        let summary = format!("{} of {} {} confirmed", action.title(), tx.amount.normalized, tx.symbol);
        spawn_tracked("tx_receipt", async move {
            match contracts.wait_for_transaction(chain_id, hash).await {
                Ok(receipt) if receipt.status == TxStatus::Success => {
                    tracing::info!(hash = %hash, block = receipt.block_number, "Transaction confirmed");
                    notifier.success(&summary);
                }
                Ok(receipt) => {
                    tracing::error!(hash = %hash, block = receipt.block_number, "Transaction reverted");
                    notifier.error(&format!("{} reverted", action.title()));
                }
                Err(e) => {
                    tracing::warn!(hash = %hash, error = %e, "Receipt unavailable");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::DepositHook;
    use crate::testing::{asset_address, pool_address, Harness};

    #[test]
    fn test_classify_user_rejection() {
        let err = AppError::Wallet("User rejected the request.".to_string());
        let failure = TxFailure::classify(&err);
        assert_eq!(failure.kind, FailureKind::UserRejected);
        assert_eq!(failure.label, "Wallet error");
    }

    #[test]
    fn test_classify_revert_keeps_prefix() {
        let err = AppError::Contract("execution reverted: insufficient balance".to_string());
        let failure = TxFailure::classify(&err);
        assert_eq!(failure.kind, FailureKind::Execution);
        assert_eq!(failure.label, "execution reverted");
    }

    #[test]
    fn test_classify_without_colon_uses_fallback() {
        let failure = TxFailure::classify(&"nonce too low");
        assert_eq!(failure.label, FALLBACK_ERROR_LABEL);

        let empty_prefix = TxFailure::classify(&": boom");
        assert_eq!(empty_prefix.label, FALLBACK_ERROR_LABEL);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let failure = TxFailure::classify(&"USER REJECTED signing");
        assert_eq!(failure.kind, FailureKind::UserRejected);
    }

    #[test]
    fn test_default_state() {
        let state = TxUiState::default();
        assert_eq!(state.phase, TxPhase::Idle);
        assert_eq!(state.button, ButtonState::zero());
        assert!(state.button.disabled);
        assert!(state.error.is_empty());
        assert!(!state.meta.is_loaded());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_value_updates_button() {
        let harness = Harness::connected(1);
        let hook = DepositHook::new(harness.deps(), HookSettings::default());

        hook.set_value("0");
        assert_eq!(hook.state().button, ButtonState::zero());

        hook.set_value("12.5");
        let state = hook.state();
        assert_eq!(state.button, ButtonState::submit());
        assert!(state.expected.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_preview_uses_last_value() {
        let harness = Harness::connected(1);
        let hook = DepositHook::new(harness.deps(), HookSettings::default());
        hook.set_target(Some(pool_address()), Some(asset_address()), Some(1));

        for value in ["1", "10", "100"] {
            hook.set_value(value);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(harness.contracts.previews().is_empty());

        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(harness.contracts.previews(), vec![U256::from(100_000_000u64)]);
        let expected = hook.state().expected;
        assert!(!expected.loading);
        assert_eq!(expected.out.normalized, "99.95");
        assert_eq!(expected.fee.raw, U256::from(ESTIMATED_FEE_RAW));
        assert_eq!(expected.fee.normalized, "0.2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_empty_value_is_zero() {
        let harness = Harness::connected(1);
        let hook = DepositHook::new(harness.deps(), HookSettings::default());
        hook.set_target(Some(pool_address()), Some(asset_address()), Some(1));

        hook.set_value("");
        tokio::time::sleep(Duration::from_millis(600)).await;

        let expected = hook.state().expected;
        assert!(!expected.loading);
        assert!(expected.out.is_zero());
        assert!(expected.fee.is_zero());
        assert!(harness.contracts.previews().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_skipped_on_chain_mismatch() {
        let harness = Harness::connected(10);
        let hook = DepositHook::new(harness.deps(), HookSettings::default());
        hook.set_target(Some(pool_address()), Some(asset_address()), Some(1));

        hook.set_value("5");
        hook.simulate().await;
        assert!(harness.contracts.previews().is_empty());
    }

    #[tokio::test]
    async fn test_load_metadata() {
        let harness = Harness::connected(1);
        let hook = DepositHook::new(harness.deps(), HookSettings::default());

        assert!(hook.load_metadata().await.is_err());

        hook.set_target(Some(pool_address()), Some(asset_address()), Some(1));
        let meta = hook.load_metadata().await.unwrap();
        assert_eq!(meta.decimals, Some(6));
        assert_eq!(meta.symbol.as_deref(), Some("USDC"));
        assert_eq!(meta.lock_time.normalized, "604800");
        assert_eq!(hook.state().meta, meta);
    }

    #[tokio::test]
    async fn test_reset_clears_state_and_input() {
        let harness = Harness::connected(1);
        let hook = DepositHook::new(harness.deps(), HookSettings::default());
        let cleared = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = cleared.clone();
        hook.on_clear_input(move || flag.store(true, std::sync::atomic::Ordering::SeqCst));

        hook.set_value("3");
        hook.reset();

        let state = hook.state();
        assert_eq!(state.phase, TxPhase::Idle);
        assert_eq!(state.button, ButtonState::zero());
        assert!(hook.params().value.is_empty());
        assert!(cleared.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_target_change_drops_metadata() {
        let harness = Harness::connected(1);
        let hook = DepositHook::new(harness.deps(), HookSettings::default());
        hook.set_target(Some(pool_address()), Some(asset_address()), Some(1));
        hook.load_metadata().await.unwrap();

        hook.set_target(Some(pool_address()), Some(asset_address()), Some(1));
        assert!(hook.state().meta.is_loaded());

        hook.set_target(Some(pool_address()), Some(asset_address()), Some(8453));
        assert!(!hook.state().meta.is_loaded());
    }
}
