//! Two-step withdrawal: `requestRedeem` locks shares for the pool's lag
//! duration, `claim` pays out a matured redemption.

use std::ops::Deref;
use std::sync::Arc;

use alloy_primitives::TxHash;
use shared::PoolCall;

use crate::core::error::{AppError, Result};

use super::transaction::{HookSettings, PreviewKind, Submission, TxAction, TxCore, TxDeps, TxHook, TxOutcome};

pub struct WithdrawHook {
    hook: TxHook,
}

impl WithdrawHook {
    pub fn new(deps: TxDeps, settings: HookSettings) -> Self {
        Self {
            hook: TxHook::new(PreviewKind::Redeem, deps, settings),
        }
    }

    /// Request redemption of the current value in shares.
    pub async fn request_withdraw(&self) -> TxOutcome {
        self.hook.submit(TxAction::RequestRedeem, request_steps).await
    }

    /// Claim the redemption whose amount equals the current value exactly.
    pub async fn handle_withdraw(&self) -> TxOutcome {
        self.hook.submit(TxAction::Claim, claim_steps).await
    }
}

impl Deref for WithdrawHook {
    type Target = TxHook;

    fn deref(&self) -> &TxHook {
        &self.hook
    }
}

async fn request_steps(core: Arc<TxCore>, tx: Submission) -> Result<TxHash> {
    let call = PoolCall::RequestRedeem {
        shares: tx.amount.raw,
        receiver: tx.account,
        owner: tx.account,
    };
    core.write(&tx, tx.pool, call).await
}

async fn claim_steps(core: Arc<TxCore>, tx: Submission) -> Result<TxHash> {
    let redemption = tx
        .redemption
        .clone()
        .ok_or_else(|| AppError::State("claim without a matched redemption".to_string()))?;

    let call = PoolCall::Claim {
        year: redemption.year.raw,
        month: redemption.month.raw,
        day: redemption.day.raw,
        receiver: tx.account,
    };
    core.write(&tx, tx.pool, call).await
}
