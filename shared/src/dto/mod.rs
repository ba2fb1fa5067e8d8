//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the SDK gateway and the wallet bridge.
//!
//! ## Module Organization
//!
//! - [`pool`] - Lending pools, redemptions and SDK read options
//! - [`contracts`] - Contract reads, simulations and receipts
//! - [`wallet`] - Wallet session, chain switching and write results
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Contract calls**: adjacently tagged, `{"function": "claim", "args": {...}}`
//! - **Integers above 64 bits**: `U256` hex strings (`"0x3e8"`)
//! - **Optional fields**: Omitted when `None`
//!
//! ## Example
//!
//! ```text
//! POST /api/contracts/simulate
//! Content-Type: application/json
//!
//! {
//!   "chain_id": 1,
//!   "account": "0x1111111111111111111111111111111111111111",
//!   "address": "0x2222222222222222222222222222222222222222",
//!   "call": {
//!     "function": "requestRedeem",
//!     "args": { "shares": "0x5f5e100", "receiver": "0x1111...", "owner": "0x1111..." }
//!   }
//! }
//! ```
//!
//! Errors from either service use the same body:
//!
//! ```text
//! HTTP/1.1 400 Bad Request
//!
//! { "error": "execution reverted: insufficient balance" }
//! ```

pub mod contracts;
pub mod pool;
pub mod wallet;

pub use contracts::*;
pub use pool::*;
pub use wallet::*;
