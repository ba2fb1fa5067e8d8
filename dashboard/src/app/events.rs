//! # Application Events
//!
//! Results sent from background tasks to the UI thread.

use alloy_primitives::Address;
use shared::{ChainId, WalletSession};

use crate::hooks::{TxAction, TxOutcome};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic session poll finished
    WalletSession(Result<WalletSession, String>),
    /// Connect request finished
    WalletConnected(Result<WalletSession, String>),
    /// Disconnect request finished
    WalletDisconnected(Result<(), String>),
    /// Header chain switch finished
    ChainSwitched(Result<ChainId, String>),
    /// A hook submission finished; the hook already toasted the outcome
    TransactionFinished {
        pool: Address,
        action: TxAction,
        outcome: TxOutcome,
    },
}
