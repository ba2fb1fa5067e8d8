//! # Application Orchestrator
//!
//! The [`App`] composes the providers every screen depends on and runs the
//! egui frame loop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App::update()                                       │   │
//! │  │  1. on_tick()        drain AppEvents, poll session    │   │
//! │  │  2. ui::render()     draw, collect UiActions          │   │
//! │  │  3. handle_action()  spawn work for each intent       │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>   route, wallet, table │   │
//! │  │  QueryClient                    cached reads         │   │
//! │  │  PoolSession per pool           deposit/withdraw hooks│  │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  handlers::wallet        connect / disconnect / switch      │
//! │  handlers::transactions  hook submissions                   │
//! │  tasks::wallet           session poll                       │
//! │  Fetcher                 query fetches                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Providers
//!
//! | Provider | Shared as |
//! |----------|-----------|
//! | Query cache | [`QueryClient`] inside [`Fetcher`] and [`TxDeps`] |
//! | Wallet bridge | `Arc<dyn WalletConnector>` |
//! | Theme | [`Theme`] applied to the egui context when it changes |
//! | Toasts | [`NotificationCenter`] fed by hooks, drawn by [`NotificationManager`] |
//!
//! A change of the effective chain (wallet chain, or the fallback when no
//! wallet is connected) invalidates every cached query, since reads are keyed
//! by pool and not by chain.
//!
//! Locks are held for a single read or write and never across `.await`.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::{AppState, PoolSession, Route};

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use alloy_primitives::Address;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::ChainId;

use crate::config::DashboardConfig;
use crate::core::service::{ContractService, LendingSdk, WalletConnector};
use crate::hooks::{HookSettings, TxDeps};
use crate::query::{Fetcher, QueryClient};
use crate::services::{ApiClient, NotificationCenter, WalletBridge};
use crate::ui::theme::{Theme, ThemeConfig};
use crate::ui::widgets::NotificationManager;
use crate::ui::UiAction;

/// Upper bound between frames so timers, polls and spinners keep moving
/// without input.
const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

pub struct App {
    /// Route, wallet status and table paging read by every frame
    pub state: Arc<RwLock<AppState>>,
    pub event_rx: Receiver<AppEvent>,
    event_tx: Sender<AppEvent>,

    pub(crate) config: DashboardConfig,
    pub(crate) theme_config: ThemeConfig,
    pub(crate) theme: Theme,
    theme_path: PathBuf,
    theme_dirty: bool,

    pub(crate) fetcher: Fetcher,
    pub(crate) tx_deps: TxDeps,
    pub(crate) hook_settings: HookSettings,
    /// One session per visited pool, kept for the app's lifetime
    pub(crate) sessions: HashMap<Address, PoolSession>,

    wallet: Arc<dyn WalletConnector>,
    last_session_poll: Option<Instant>,
    poll_in_flight: Arc<AtomicBool>,
    active_chain: ChainId,

    pub(crate) notifications: NotificationManager,
    pub(crate) notifier: Arc<NotificationCenter>,
}

impl App {
    /// Create the app against the configured gateway and wallet bridge.
    ///
    /// Must be called inside a Tokio runtime context; hooks and fetches
    /// spawn tasks from the UI thread.
    pub fn new(config: DashboardConfig) -> Self {
        let api = Arc::new(ApiClient::new(&config));
        let wallet = Arc::new(WalletBridge::new(&config));
        let notifier = Arc::new(NotificationCenter::new());
        let theme_path = handlers::settings::get_config_path();

        Self::with_services(config, api.clone(), api, wallet, notifier, theme_path)
    }

    /// Create the app from explicit service implementations.
    pub fn with_services(
        config: DashboardConfig,
        sdk: Arc<dyn LendingSdk>,
        contracts: Arc<dyn ContractService>,
        wallet: Arc<dyn WalletConnector>,
        notifier: Arc<NotificationCenter>,
        theme_path: PathBuf,
    ) -> Self {
        let queries = QueryClient::new(config.query_stale_time);
        let fetcher = Fetcher::new(
            sdk,
            wallet.clone(),
            queries.clone(),
            config.fallback_chain_id,
            config.api_key.clone(),
        );
        let tx_deps = TxDeps {
            contracts,
            wallet: wallet.clone(),
            notifier: notifier.clone(),
            queries,
        };

        let theme_config = handlers::settings::load_settings(&theme_path);
        let theme = Theme::from_config(&theme_config);
        let (event_tx, event_rx) = unbounded();
        let active_chain = wallet
            .account()
            .and(wallet.chain_id())
            .unwrap_or(config.fallback_chain_id);

        tracing::info!(
            api_url = %config.api_url,
            wallet_url = %config.wallet_url,
            fallback_chain_id = config.fallback_chain_id,
            "App initialized"
        );

        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            event_rx,
            event_tx,
            hook_settings: HookSettings::from_config(&config),
            config,
            theme_config,
            theme,
            theme_path,
            theme_dirty: true,
            fetcher,
            tx_deps,
            sessions: HashMap::new(),
            wallet,
            last_session_poll: None,
            poll_in_flight: Arc::new(AtomicBool::new(false)),
            active_chain,
            notifications: NotificationManager::new(),
            notifier,
        }
    }

    /// Chain the connected wallet is on
    pub fn wallet_chain(&self) -> Option<ChainId> {
        self.wallet.account().and(self.wallet.chain_id())
    }

    /// Process pending async events and start periodic work. Called once per
    /// frame; never blocks.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        let poll_due = self
            .last_session_poll
            .map_or(true, |last| last.elapsed() >= tasks::wallet::SESSION_POLL_INTERVAL);
        if poll_due {
            self.last_session_poll = Some(Instant::now());
            tasks::wallet::poll_session(self.wallet.clone(), self.event_tx.clone(), self.poll_in_flight.clone());
        }

        self.sync_active_chain();
    }

    fn sync_active_chain(&mut self) {
        let chain = self.wallet_chain().unwrap_or(self.config.fallback_chain_id);
        if chain == self.active_chain {
            return;
        }

        let invalidated = self.fetcher.queries().refetch_queries();
        tracing::info!(from = self.active_chain, to = chain, invalidated = invalidated, "Active chain changed");
        self.active_chain = chain;
    }

    /// Dispatch one intent collected during rendering.
    pub fn handle_action(&mut self, action: UiAction) {
        tracing::debug!(action = ?action, "UI action");

        match action {
            UiAction::Navigate(route) => handlers::navigation::handle_navigate(&self.state, route),
            UiAction::OpenUrl(url) => handlers::navigation::handle_open_url(&url),
            UiAction::ConnectWallet => {
                handlers::wallet::handle_connect(&self.state, self.wallet.clone(), self.event_tx.clone());
            }
            UiAction::DisconnectWallet => {
                handlers::wallet::handle_disconnect(self.wallet.clone(), self.event_tx.clone());
            }
            UiAction::SwitchChain(chain_id) => {
                handlers::wallet::handle_switch_chain(self.wallet.clone(), self.event_tx.clone(), chain_id);
            }
            UiAction::ToggleTheme => {
                handlers::settings::handle_theme_toggle(&mut self.theme_config, &self.theme_path);
                self.theme = Theme::from_config(&self.theme_config);
                self.theme_dirty = true;
            }
            UiAction::Deposit(pool) => {
                if let Some(session) = self.session(pool) {
                    handlers::transactions::handle_deposit(session.deposit.clone(), pool, self.event_tx.clone());
                }
            }
            UiAction::RequestWithdraw(pool) => {
                if let Some(session) = self.session(pool) {
                    handlers::transactions::handle_request_withdraw(
                        session.withdraw.clone(),
                        pool,
                        self.event_tx.clone(),
                    );
                }
            }
            UiAction::Claim { pool, amount } => {
                if let Some(session) = self.session(pool) {
                    handlers::transactions::handle_claim(session.withdraw.clone(), pool, amount, self.event_tx.clone());
                }
            }
        }
    }

    fn session(&self, pool: Address) -> Option<&PoolSession> {
        let session = self.sessions.get(&pool);
        if session.is_none() {
            tracing::error!(pool = %pool, "No session for pool");
        }
        session
    }

    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.on_tick();

        if self.theme_dirty {
            self.theme.apply(ctx);
            self.theme_dirty = false;
        }

        let actions = crate::ui::render(ctx, self);
        for action in actions {
            self.handle_action(action);
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
