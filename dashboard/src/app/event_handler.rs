//! # Event Handler
//!
//! Applies [`AppEvent`]s from background tasks on the UI thread. Each handler
//! takes the state write lock once and releases it before touching anything
//! else.

use shared::{ChainId, WalletSession};

use crate::app::{App, AppEvent};
use crate::core::service::Notifier;
use crate::hooks::{TxAction, TxOutcome};
use crate::services::WalletStatus;

impl App {
    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WalletSession(result) => self.handle_wallet_session(result),
            AppEvent::WalletConnected(result) => self.handle_wallet_connected(result),
            AppEvent::WalletDisconnected(result) => self.handle_wallet_disconnected(result),
            AppEvent::ChainSwitched(result) => self.handle_chain_switched(result),
            AppEvent::TransactionFinished { pool, action, outcome } => {
                Self::log_transaction(pool, action, &outcome);
            }
        }
    }

    fn handle_wallet_session(&mut self, result: Result<WalletSession, String>) {
        let session = match result {
            Ok(session) => session,
            Err(e) => {
                tracing::debug!(error = %e, "Wallet session unavailable");
                return;
            }
        };

        let status = WalletStatus::from(&session);
        let mut state = self.state.write();
        // A poll that lands mid-connect must not reset the pending status
        if state.wallet == WalletStatus::Connecting && !status.is_connected() {
            return;
        }
        if state.wallet != status {
            tracing::info!(account = ?session.account, chain_id = ?session.chain_id, "Wallet status changed");
            state.wallet = status;
        }
    }

    fn handle_wallet_connected(&mut self, result: Result<WalletSession, String>) {
        match result {
            Ok(session) => {
                let status = WalletStatus::from(&session);
                let connected = status.is_connected();
                self.state.write().wallet = status;

                if connected {
                    self.notifier.success("Wallet connected");
                } else {
                    tracing::warn!("Connect returned a session without an account");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Wallet connect failed");
                self.state.write().wallet = WalletStatus::Error(e.clone());
                self.notifier.error(&e);
            }
        }
    }

    fn handle_wallet_disconnected(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.state.write().wallet = WalletStatus::Disconnected;
                self.notifier.info("Wallet disconnected");
            }
            Err(e) => {
                tracing::error!(error = %e, "Wallet disconnect failed");
                self.notifier.error(&e);
            }
        }
    }

    fn handle_chain_switched(&mut self, result: Result<ChainId, String>) {
        match result {
            Ok(chain_id) => {
                let name = shared::chain::chain_name(chain_id);
                tracing::info!(chain_id = chain_id, "Header chain switch finished");
                self.notifier.success(&format!("Switched to {}", name));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Chain switch failed");
                self.notifier.error(&e);
            }
        }
    }

    fn log_transaction(pool: alloy_primitives::Address, action: TxAction, outcome: &TxOutcome) {
        let action = action.name();
        match outcome {
            TxOutcome::Submitted(hash) => {
                tracing::info!(pool = %pool, action = action, hash = %hash, "Transaction submitted");
            }
            TxOutcome::ChainSwitchRequested(chain_id) => {
                tracing::info!(pool = %pool, action = action, chain_id = chain_id, "Transaction waiting on chain switch");
            }
            TxOutcome::Skipped(precondition) => {
                tracing::info!(pool = %pool, action = action, reason = precondition.describe(), "Transaction skipped");
            }
            TxOutcome::Failed(failure) => {
                tracing::warn!(pool = %pool, action = action, failure = ?failure, "Transaction failed");
            }
        }
    }
}
