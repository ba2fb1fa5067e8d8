//! Async task lifecycle tracking for debugging hung tasks

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::task::JoinHandle;

/// Tasks currently running
static ACTIVE_TASKS: AtomicU64 = AtomicU64::new(0);

/// Monotonic id source for log correlation
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(0);

/// Get current number of active tasks
pub fn active_task_count() -> u64 {
    ACTIVE_TASKS.load(Ordering::Relaxed)
}

/// Decrements the active counter even when the task is aborted mid-flight.
struct ActiveGuard;

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE_TASKS.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Spawn an instrumented async task with lifecycle tracking
///
/// # Arguments
///
/// * `name` - Task name for logging (e.g., "fetch_pools", "withdraw_submit")
/// * `future` - The async task to execute
///
/// # Example
///
/// ```rust,ignore
/// spawn_tracked("fetch_pools", async move {
///     fetcher.query(QueryKey::pools(), |data| data).await
/// });
/// ```
pub fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    ACTIVE_TASKS.fetch_add(1, Ordering::Relaxed);
    let start = Instant::now();

    tracing::debug!(task = %name, task_id = task_id, "Task spawned");

    tokio::spawn(async move {
        let _active = ActiveGuard;
        let result = future.await;
        let duration = start.elapsed();

        tracing::debug!(
            task = %name,
            task_id = task_id,
            duration_ms = duration.as_millis(),
            "Task completed"
        );

        if duration.as_secs() > 30 {
            tracing::warn!(
                task = %name,
                task_id = task_id,
                duration_ms = duration.as_millis(),
                "Task took very long (potential hang)"
            );
        }

        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_tracked_returns_output() {
        let handle = spawn_tracked("test_task", async { 40 + 2 });
        assert_eq!(handle.await.unwrap(), 42);
    }
}
