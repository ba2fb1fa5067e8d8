//! # Lending Pool Dashboard - Library Root
//!
//! A **native desktop GUI** for browsing on-chain lending pools, depositing
//! into them and managing two-step withdrawals. This library crate contains
//! every module used by the binary (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui-notify    - Toasts                               │
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client                          │
//! │  alloy-primitives - Addresses, U256, tx hashes         │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP/JSON                    │ HTTP/JSON
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  SDK gateway    │          │   Wallet bridge         │
//! │  reads, sims    │          │   connect, sign, switch │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`App`] orchestrator, routes, async event plumbing
//! - **config**: Environment configuration ([`config::DashboardConfig`])
//! - **core**: Error type and the service traits every backend implements
//! - **debug**: Logging setup and tracked task spawning
//! - **hooks**: Deposit and withdraw transaction state machines
//! - **query**: Request cache and the pool data fetcher
//! - **services**: HTTP gateway client, wallet bridge client, toast queue
//! - **ui**: Screens, widgets and theme
//! - **utils**: Runtime construction
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers)
//!   │   ├── hooks ──► core::service traits ◄── services
//!   │   └── query ──► core::service traits
//!   │
//!   └── ui (rendering)
//!       ├── screens::{pools, pool_detail}
//!       ├── widgets::*
//!       └── theme
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p dashboard
//! ```
//!
//! Service traits are mocked in `testing.rs`, compiled only for tests.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod hooks;
pub mod query;
pub mod services;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{App, AppEvent, AppState, Route};
pub use core::{AppError, Result};
