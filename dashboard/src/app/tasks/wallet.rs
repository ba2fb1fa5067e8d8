//! # Wallet Session Poll
//!
//! The bridge may change account or chain on its own (the user acts in the
//! browser wallet), so the app polls the session on a fixed interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_channel::Sender;

use crate::app::events::AppEvent;
use crate::core::service::WalletConnector;
use crate::debug::spawn_tracked;

pub const SESSION_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Refresh the wallet session once. Skipped while a previous poll is still
/// running so a slow bridge does not pile up requests.
pub(crate) fn poll_session(wallet: Arc<dyn WalletConnector>, event_tx: Sender<AppEvent>, in_flight: Arc<AtomicBool>) {
    if in_flight.swap(true, Ordering::AcqRel) {
        return;
    }

    spawn_tracked("wallet_session_poll", async move {
        let result = wallet.refresh_session().await.map_err(|e| e.to_string());
        in_flight.store(false, Ordering::Release);
        let _ = event_tx.send(AppEvent::WalletSession(result)).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{account_address, MockWallet};

    #[tokio::test]
    async fn test_poll_reports_session() {
        let (tx, rx) = async_channel::unbounded();
        let in_flight = Arc::new(AtomicBool::new(false));

        poll_session(Arc::new(MockWallet::connected(10)), tx, in_flight.clone());

        match rx.recv().await.unwrap() {
            AppEvent::WalletSession(Ok(session)) => {
                assert_eq!(session.account, Some(account_address()));
                assert_eq!(session.chain_id, Some(10));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(!in_flight.load(Ordering::Acquire));
    }

    #[tokio::test]
    async fn test_poll_skipped_while_in_flight() {
        let (tx, rx) = async_channel::unbounded();
        let in_flight = Arc::new(AtomicBool::new(true));

        poll_session(Arc::new(MockWallet::connected(1)), tx, in_flight);

        assert!(rx.try_recv().is_err());
    }
}
