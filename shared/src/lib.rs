//! # Shared Domain Library
//!
//! Types that cross every boundary of the lending dashboard: the SDK gateway,
//! the wallet bridge, and the UI.
//!
//! ## Structure
//!
//! - **[`amount`]**: [`amount::NormalizedAmount`], raw `U256` plus display string
//! - **[`chain`]**: Supported networks and explorer links
//! - **[`dto`]**: Data Transfer Objects for gateway and bridge communication
//!   - **[`dto::pool`]**: Pools, redemptions, read options
//!   - **[`dto::contracts`]**: Contract reads, simulations, receipts
//!   - **[`dto::wallet`]**: Wallet session and write results
//! - **[`utils`]**: Address and number formatting
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Optional fields are omitted from JSON when `None`
//! - Addresses are `0x`-prefixed hex, `U256` values are `0x`-prefixed hex quantities
//!
//! ## Usage
//!
//! ```rust
//! use shared::amount::NormalizedAmount;
//! use shared::utils::truncate_address;
//!
//! let amount = NormalizedAmount::from_input("99.95", 6);
//! assert_eq!(amount.raw.to_string(), "99950000");
//! assert_eq!(truncate_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F"), "0x71C7...976F");
//! ```

pub mod amount;
pub mod chain;
pub mod dto;
pub mod utils;

pub use alloy_primitives::{Address, TxHash, U256};
pub use amount::{AmountError, NormalizedAmount};
pub use chain::ChainId;
pub use dto::*;
pub use utils::*;
