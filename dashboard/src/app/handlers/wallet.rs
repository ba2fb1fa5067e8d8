//! # Wallet Handlers
//!
//! Connect, disconnect and chain switch requests from the header. Each spawns
//! one bridge call and reports back through [`AppEvent`].

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::ChainId;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::WalletConnector;
use crate::debug::spawn_tracked;
use crate::services::WalletStatus;

/// Handle wallet connect button click
///
/// Internal handler function - use [`crate::app::App::handle_action`] instead.
pub(crate) fn handle_connect(
    state: &Arc<RwLock<AppState>>,
    wallet: Arc<dyn WalletConnector>,
    event_tx: Sender<AppEvent>,
) {
    {
        let mut state = state.write();
        if state.wallet == WalletStatus::Connecting {
            tracing::debug!("Connect already in flight");
            return;
        }
        state.wallet = WalletStatus::Connecting;
    }

    spawn_tracked("wallet_connect", async move {
        let result = wallet.connect().await.map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::WalletConnected(result)).await;
    });
}

/// Handle wallet disconnect button click
pub(crate) fn handle_disconnect(wallet: Arc<dyn WalletConnector>, event_tx: Sender<AppEvent>) {
    spawn_tracked("wallet_disconnect", async move {
        let result = wallet.disconnect().await.map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::WalletDisconnected(result)).await;
    });
}

/// Ask the wallet to switch to `chain_id`
pub(crate) fn handle_switch_chain(wallet: Arc<dyn WalletConnector>, event_tx: Sender<AppEvent>, chain_id: ChainId) {
    tracing::info!(chain_id = chain_id, "Switching chain");

    spawn_tracked("wallet_switch_chain", async move {
        let result = wallet
            .switch_chain(chain_id)
            .await
            .map(|_| chain_id)
            .map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::ChainSwitched(result)).await;
    });
}
