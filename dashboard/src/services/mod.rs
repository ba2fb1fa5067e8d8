//! # Services Module
//!
//! Production implementations of the traits in [`crate::core::service`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Dashboard (egui)                     │
//! │                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐   │
//! │  │  ApiClient   │  │ WalletBridge │  │ Notification │   │
//! │  │  (api/)      │  │ (wallet.rs)  │  │ Center       │   │
//! │  └──────┬───────┘  └──────┬───────┘  └──────────────┘   │
//! └─────────┼─────────────────┼─────────────────────────────┘
//!           │ HTTP/JSON       │ HTTP/JSON
//!           ▼                 ▼
//! ┌────────────────────┐  ┌────────────────────────────────┐
//! │  SDK gateway       │  │  Wallet bridge                 │
//! │  /api/pools/*      │  │  /api/wallet/session           │
//! │  /api/contracts/*  │  │  /api/wallet/connect           │
//! │  /api/transactions │  │  /api/wallet/switch-chain      │
//! │                    │  │  /api/wallet/write-contract    │
//! └────────────────────┘  └────────────────────────────────┘
//! ```
//!
//! | Service | Trait(s) |
//! |---------|----------|
//! | [`ApiClient`] | `LendingSdk`, `ContractService` |
//! | [`WalletBridge`] | `WalletConnector` |
//! | [`NotificationCenter`] | `Notifier` |
//!
//! ## Error Mapping
//!
//! Both HTTP services decode `{ "error": "..." }` bodies. Gateway messages
//! from contract calls become [`AppError::Contract`](crate::core::AppError::Contract)
//! unchanged; bridge messages become `AppError::Wallet`, which is how a
//! wallet rejection ("User rejected the request.") reaches the hooks.

pub mod api;
pub mod notifications;
pub mod wallet;

pub use api::ApiClient;
pub use notifications::{LoadingToast, NotificationCenter, QueuedToast, ToastLevel};
pub use wallet::{WalletBridge, WalletStatus};
