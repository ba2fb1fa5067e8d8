//! # Query Layer
//!
//! - **[`client`]**: Request cache with stale time and global invalidation
//! - **[`fetcher`]**: Routes tagged keys to the lending SDK and caches the result

pub mod client;
pub mod fetcher;

pub use client::{QueryClient, QueryKey, QuerySnapshot, QueryStatus};
pub use fetcher::{FetchData, Fetcher};
