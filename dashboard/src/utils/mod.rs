//! # Utility Functions
//!
//! - **[`runtime`]**: Tokio runtime construction for the desktop process
//!
//! Display formatting (addresses, compact numbers) lives in [`shared::utils`].

pub mod runtime;
