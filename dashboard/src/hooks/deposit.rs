//! Deposit of the underlying asset into a lending pool.
//!
//! The pool pulls the asset with `transferFrom`, so an `approve(pool, amount)`
//! is sent and mined first whenever the current allowance is too small.

use std::ops::Deref;
use std::sync::Arc;

use alloy_primitives::TxHash;
use shared::PoolCall;

use crate::core::error::Result;

use super::transaction::{HookSettings, PreviewKind, Submission, TxAction, TxCore, TxDeps, TxHook, TxOutcome};

pub struct DepositHook {
    hook: TxHook,
}

impl DepositHook {
    pub fn new(deps: TxDeps, settings: HookSettings) -> Self {
        Self {
            hook: TxHook::new(PreviewKind::Deposit, deps, settings),
        }
    }

    /// Deposit the current value into the pool for the connected account.
    pub async fn handle_deposit(&self) -> TxOutcome {
        self.hook.submit(TxAction::Deposit, deposit_steps).await
    }
}

impl Deref for DepositHook {
    type Target = TxHook;

    fn deref(&self) -> &TxHook {
        &self.hook
    }
}

async fn deposit_steps(core: Arc<TxCore>, tx: Submission) -> Result<TxHash> {
    let allowance = core
        .deps
        .contracts
        .allowance(tx.chain_id, tx.asset, tx.account, tx.pool)
        .await?;

    if allowance < tx.amount.raw {
        tracing::info!(
            asset = %tx.asset,
            allowance = %allowance,
            required = %tx.amount.raw,
            "Allowance too low, approving pool"
        );
        let approval = PoolCall::Approve {
            spender: tx.pool,
            amount: tx.amount.raw,
        };
        let hash = core.write(&tx, tx.asset, approval).await?;
        core.confirm(tx.chain_id, hash).await?;
    }

    let deposit = PoolCall::Deposit {
        assets: tx.amount.raw,
        receiver: tx.account,
    };
    core.write(&tx, tx.pool, deposit).await
}
