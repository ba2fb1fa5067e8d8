//! Cancellable one-shot timer backed by a Tokio task.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::debug::spawn_tracked;

/// At most one pending task; scheduling again aborts the previous one.
///
/// The pending task is aborted when the timer is dropped.
pub struct Timer {
    name: &'static str,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Timer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            handle: Mutex::new(None),
        }
    }

    /// Run `task` after `delay`, cancelling whatever was scheduled before.
    ///
    /// An already-running task is aborted at its next await point.
    pub fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = spawn_tracked(self.name, async move {
            tokio::time::sleep(delay).await;
            task.await;
        });

        if let Some(previous) = self.handle.lock().replace(handle) {
            previous.abort();
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.handle.lock().take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.get_mut().take() {
            handle.abort();
        }
    }
}
