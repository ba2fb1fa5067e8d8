//! Tokio runtime for the desktop process.
//!
//! egui owns the main thread, so the runtime is built up front and entered
//! for the lifetime of the window. Anything that calls `tokio::spawn` from
//! the UI thread (hooks, fetches, wallet handlers) relies on that guard.

use tokio::runtime::{Builder, Runtime};

/// Multi-threaded runtime with IO and time drivers enabled
pub fn build_runtime() -> std::io::Result<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .thread_name("dashboard-worker")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_runs_spawned_tasks() {
        let rt = build_runtime().unwrap();
        let value = rt.block_on(async { tokio::spawn(async { 21 * 2 }).await.unwrap() });
        assert_eq!(value, 42);
    }
}
