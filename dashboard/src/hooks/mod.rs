//! # Transaction Hooks
//!
//! Stateful controllers behind the deposit modal and the withdraw panel.
//!
//! - **[`transaction`]**: shared state, failure classification, submission template
//! - **[`deposit`]**: `approve` (when needed) then `deposit`
//! - **[`withdraw`]**: `requestRedeem` and `claim`
//! - **[`timer`]**: cancellable one-shot timers for the debounce and auto-reset
//!
//! Each handler runs the same pipeline:
//!
//! ```text
//! preconditions ──► chain switch? ──► loading toast ──► simulate ──► write
//!                                                                     │
//!        refetch_queries ◄── completion toast ◄───────────────────────┘
//! ```

pub mod deposit;
pub mod timer;
pub mod transaction;
pub mod withdraw;

pub use deposit::DepositHook;
pub use timer::Timer;
pub use transaction::{
    labels, ButtonState, Expected, FailureKind, HookSettings, Precondition, TokenMeta, TxAction,
    TxDeps, TxFailure, TxHook, TxOutcome, TxParams, TxPhase, TxUiState,
};
pub use withdraw::WithdrawHook;
