//! # SDK Gateway Client Module
//!
//! HTTP client for the lending SDK gateway: pool reads, contract reads,
//! simulations and receipts.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient, response decoding, trait impls
//! ├── pools.rs      - /api/pools endpoints
//! └── contracts.rs  - /api/contracts and /api/transactions endpoints
//! ```

pub mod client;
pub mod contracts;
pub mod pools;

pub use client::ApiClient;
