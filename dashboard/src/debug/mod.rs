//! # Logging and Task Tracing
//!
//! - **File-based logging**: Structured logs to `logs/dashboard-debug.log` (daily rotation)
//! - **Async task tracking**: Task lifecycle logging via [`spawn_tracked`]
//! - **Panic logging**: Panics are written to the log before the default hook runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Initialize at app startup
//! debug::init();
//!
//! // Track async tasks
//! spawn_tracked("fetch_pools", async move { /* ... */ });
//!
//! // Log with structured fields
//! tracing::info!(pool = %address, chain_id = 1, "Pool loaded");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Log level filter (default `dashboard=info,warn`)
//! - `DASHBOARD_LOG_DIR`: Log directory (default `logs`)
//! - `DASHBOARD_LOG_STDERR`: Mirror logs to stderr (1=on)

pub mod config;
pub mod logger;
pub mod task_tracker;

pub use config::DebugConfig;
pub use logger::init as init_logger;
pub use task_tracker::{active_task_count, spawn_tracked};

/// Initialize logging. Call once at startup before anything logs.
pub fn init() {
    init_logger();
}
