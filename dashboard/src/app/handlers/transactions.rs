//! # Transaction Handlers
//!
//! Run a hook submission on a Tokio task. The hook owns state transitions
//! and toasts; the finished outcome is only reported back for logging.

use std::sync::Arc;

use alloy_primitives::Address;
use async_channel::Sender;

use crate::app::events::AppEvent;
use crate::debug::spawn_tracked;
use crate::hooks::{DepositHook, TxAction, WithdrawHook};

pub(crate) fn handle_deposit(hook: Arc<DepositHook>, pool: Address, event_tx: Sender<AppEvent>) {
    spawn_tracked("deposit", async move {
        let outcome = hook.handle_deposit().await;
        let _ = event_tx
            .send(AppEvent::TransactionFinished {
                pool,
                action: TxAction::Deposit,
                outcome,
            })
            .await;
    });
}

pub(crate) fn handle_request_withdraw(hook: Arc<WithdrawHook>, pool: Address, event_tx: Sender<AppEvent>) {
    spawn_tracked("request_withdraw", async move {
        let outcome = hook.request_withdraw().await;
        let _ = event_tx
            .send(AppEvent::TransactionFinished {
                pool,
                action: TxAction::RequestRedeem,
                outcome,
            })
            .await;
    });
}

/// Claim the redemption of `amount` shares. The hook matches redemptions
/// against its input, so the amount is written there first.
pub(crate) fn handle_claim(hook: Arc<WithdrawHook>, pool: Address, amount: String, event_tx: Sender<AppEvent>) {
    hook.set_value(amount);

    spawn_tracked("claim", async move {
        let outcome = hook.handle_withdraw().await;
        let _ = event_tx
            .send(AppEvent::TransactionFinished {
                pool,
                action: TxAction::Claim,
                outcome,
            })
            .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{HookSettings, Precondition, TxOutcome};
    use crate::testing::{asset_address, pool_address, Harness};

    #[tokio::test]
    async fn test_deposit_without_value_is_skipped() {
        let harness = Harness::connected(1);
        let hook = Arc::new(DepositHook::new(harness.deps(), HookSettings::default()));
        hook.set_target(Some(pool_address()), Some(asset_address()), Some(1));
        let (tx, rx) = async_channel::unbounded();

        handle_deposit(hook, pool_address(), tx);

        match rx.recv().await.unwrap() {
            AppEvent::TransactionFinished { pool, action, outcome } => {
                assert_eq!(pool, pool_address());
                assert_eq!(action, TxAction::Deposit);
                assert!(matches!(outcome, TxOutcome::Skipped(Precondition::MissingValue)));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(harness.wallet.writes().is_empty());
    }

    #[tokio::test]
    async fn test_claim_sets_value_before_submitting() {
        let harness = Harness::connected(1);
        let hook = Arc::new(WithdrawHook::new(harness.deps(), HookSettings::default()));
        hook.set_target(Some(pool_address()), Some(asset_address()), Some(1));
        let (tx, rx) = async_channel::unbounded();

        handle_claim(hook.clone(), pool_address(), "5".to_string(), tx);
        assert_eq!(hook.params().value, "5");

        match rx.recv().await.unwrap() {
            AppEvent::TransactionFinished { action, .. } => assert_eq!(action, TxAction::Claim),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
