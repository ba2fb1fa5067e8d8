//! # Query Client
//!
//! In-process cache for gateway reads, keyed by tagged [`QueryKey`]s.
//!
//! ```text
//!            should_fetch?            begin_fetch
//!  render ───────────────► QueryClient ──────────► spawn fetch task
//!    ▲                         │                        │
//!    │        snapshot::<T>    │       finish_fetch     │
//!    └─────────────────────────┘◄───────────────────────┘
//!
//!  refetch_queries(): every entry invalidated, generation += 1
//! ```
//!
//! Entries store type-erased `Arc<dyn Any>` data; readers ask for the concrete
//! type they cached. A type mismatch reads as "no data" rather than panicking.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;

use crate::core::error::Result;

/// Ordered list of key parts, e.g. `["lending-pool", "0xabc..."]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub const POOL: &'static str = "lending-pool";
    pub const POOLS: &'static str = "lending-pools";
    pub const REDEMPTIONS: &'static str = "redemptions";

    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn pools() -> Self {
        Self::new([Self::POOLS])
    }

    pub fn pool(address: impl Into<String>) -> Self {
        Self::new([Self::POOL.to_string(), address.into()])
    }

    pub fn redemptions(pool: impl Into<String>, account: impl Into<String>) -> Self {
        Self::new([Self::REDEMPTIONS.to_string(), pool.into(), account.into()])
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// First part of the key, used for routing
    pub fn tag(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn part(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never fetched
    Idle,
    /// First fetch in flight, no data yet
    Loading,
    Success,
    Error,
}

/// Point-in-time view of one cache entry.
#[derive(Debug)]
pub struct QuerySnapshot<T> {
    pub data: Option<Arc<T>>,
    pub status: QueryStatus,
    pub error: Option<String>,
    pub is_fetching: bool,
}

impl<T> QuerySnapshot<T> {
    fn idle() -> Self {
        Self {
            data: None,
            status: QueryStatus::Idle,
            error: None,
            is_fetching: false,
        }
    }

    /// Loading with nothing to show yet
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && matches!(self.status, QueryStatus::Idle | QueryStatus::Loading)
    }
}

impl<T> Clone for QuerySnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            status: self.status,
            error: self.error.clone(),
            is_fetching: self.is_fetching,
        }
    }
}

struct QueryEntry {
    data: Option<Arc<dyn Any + Send + Sync>>,
    error: Option<String>,
    status: QueryStatus,
    updated_at: Option<Instant>,
    invalidated: bool,
    fetching: bool,
}

impl QueryEntry {
    fn new() -> Self {
        Self {
            data: None,
            error: None,
            status: QueryStatus::Idle,
            updated_at: None,
            invalidated: false,
            fetching: false,
        }
    }
}

struct QueryInner {
    entries: RwLock<HashMap<QueryKey, QueryEntry>>,
    stale_time: Duration,
    generation: AtomicU64,
}

/// Shared request cache. Cheap to clone.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<QueryInner>,
}

impl QueryClient {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            inner: Arc::new(QueryInner {
                entries: RwLock::new(HashMap::new()),
                stale_time,
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.inner.stale_time
    }

    /// Bumped by every [`QueryClient::refetch_queries`].
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot<T: Send + Sync + 'static>(&self, key: &QueryKey) -> QuerySnapshot<T> {
        let entries = self.inner.entries.read();
        match entries.get(key) {
            Some(entry) => QuerySnapshot {
                data: entry
                    .data
                    .clone()
                    .and_then(|data| data.downcast::<T>().ok()),
                status: entry.status,
                error: entry.error.clone(),
                is_fetching: entry.fetching,
            },
            None => QuerySnapshot::idle(),
        }
    }

    pub fn get<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        self.snapshot::<T>(key).data
    }

    /// Store data directly, as if a fetch had just succeeded.
    pub fn set_data<T: Send + Sync + 'static>(&self, key: QueryKey, data: T) -> Arc<T> {
        let data = Arc::new(data);
        let mut entries = self.inner.entries.write();
        let entry = entries.entry(key).or_insert_with(QueryEntry::new);
        entry.data = Some(data.clone());
        entry.error = None;
        entry.status = QueryStatus::Success;
        entry.updated_at = Some(Instant::now());
        entry.invalidated = false;
        data
    }

    /// Missing, invalidated or stale, and not currently fetching.
    ///
    /// A failed fetch counts as an update: the key is retried once the stale
    /// time has passed or after [`QueryClient::refetch_queries`].
    pub fn should_fetch(&self, key: &QueryKey) -> bool {
        let entries = self.inner.entries.read();
        match entries.get(key) {
            None => true,
            Some(entry) if entry.fetching => false,
            Some(entry) => {
                entry.invalidated
                    || entry
                        .updated_at
                        .map_or(true, |at| at.elapsed() >= self.inner.stale_time)
            }
        }
    }

    /// Mark `key` as fetching. Returns `false` if a fetch is already in flight.
    pub fn begin_fetch(&self, key: &QueryKey) -> bool {
        let mut entries = self.inner.entries.write();
        let entry = entries.entry(key.clone()).or_insert_with(QueryEntry::new);
        if entry.fetching {
            return false;
        }
        entry.fetching = true;
        if entry.data.is_none() {
            entry.status = QueryStatus::Loading;
        }
        true
    }

    /// Record the outcome of a fetch started with [`QueryClient::begin_fetch`].
    ///
    /// On error the previous data is kept so the UI can keep showing it.
    pub fn finish_fetch<T: Send + Sync + 'static>(
        &self,
        key: &QueryKey,
        result: &Result<Arc<T>>,
    ) {
        let mut entries = self.inner.entries.write();
        let entry = entries.entry(key.clone()).or_insert_with(QueryEntry::new);
        entry.fetching = false;
        entry.updated_at = Some(Instant::now());
        match result {
            Ok(data) => {
                entry.data = Some(data.clone());
                entry.error = None;
                entry.status = QueryStatus::Success;
                entry.invalidated = false;
            }
            Err(e) => {
                entry.error = Some(e.to_string());
                entry.status = QueryStatus::Error;
            }
        }
    }

    /// Run `future` and cache its result under `key`.
    pub async fn fetch<T, Fut>(&self, key: QueryKey, future: Fut) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        Fut: Future<Output = Result<T>>,
    {
        self.begin_fetch(&key);
        let result = future.await.map(Arc::new);
        if let Err(e) = &result {
            tracing::warn!(key = %key, error = %e, "Query failed");
        } else {
            tracing::debug!(key = %key, "Query succeeded");
        }
        self.finish_fetch(&key, &result);
        result
    }

    /// Invalidate every cached entry so the next render refetches it.
    ///
    /// Returns the number of entries invalidated.
    pub fn refetch_queries(&self) -> usize {
        let count = {
            let mut entries = self.inner.entries.write();
            for entry in entries.values_mut() {
                entry.invalidated = true;
            }
            entries.len()
        };
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(invalidated = count, generation = generation, "Refetching all queries");
        count
    }

    pub fn remove(&self, key: &QueryKey) -> bool {
        self.inner.entries.write().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.inner.entries.write().clear();
    }

    /// Whether any entry has a fetch in flight
    pub fn is_fetching(&self) -> bool {
        self.inner.entries.read().values().any(|entry| entry.fetching)
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}
