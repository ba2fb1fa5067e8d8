//! # Data-Fetch Hook
//!
//! Routes a tagged [`QueryKey`] to one of the read-only SDK calls and caches the
//! transformed result in the [`QueryClient`].
//!
//! | Key | SDK call |
//! |-----|----------|
//! | `["lending-pool", <address>]` | `get_lending_pool(address, opts)` |
//! | `["lending-pools"]` | `get_lending_pools(opts)` |
//! | anything else | `get_lending_pools(opts)` |
//!
//! `opts` carries the wallet's active chain (or the configured fallback chain)
//! and the optional RPC provider key.

use std::sync::Arc;

use alloy_primitives::Address;
use shared::{ChainId, LendingOptions, Pool, Redemption};

use crate::core::error::{AppError, Result};
use crate::core::service::{LendingSdk, WalletConnector};
use crate::debug::spawn_tracked;

use super::client::{QueryClient, QueryKey, QuerySnapshot};

/// Untransformed result of a routed fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchData {
    Pool(Pool),
    Pools(Vec<Pool>),
    /// Key was rejected before any SDK call
    Empty,
}

impl FetchData {
    pub fn into_pool(self) -> Option<Pool> {
        match self {
            FetchData::Pool(pool) => Some(pool),
            _ => None,
        }
    }

    pub fn into_pools(self) -> Vec<Pool> {
        match self {
            FetchData::Pools(pools) => pools,
            FetchData::Pool(pool) => vec![pool],
            FetchData::Empty => Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct Fetcher {
    sdk: Arc<dyn LendingSdk>,
    wallet: Arc<dyn WalletConnector>,
    queries: QueryClient,
    fallback_chain: ChainId,
    api_key: Option<String>,
}

impl Fetcher {
    pub fn new(
        sdk: Arc<dyn LendingSdk>,
        wallet: Arc<dyn WalletConnector>,
        queries: QueryClient,
        fallback_chain: ChainId,
        api_key: Option<String>,
    ) -> Self {
        Self {
            sdk,
            wallet,
            queries,
            fallback_chain,
            api_key,
        }
    }

    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    /// SDK options for the wallet's chain, or the fallback chain when disconnected.
    pub fn options(&self) -> LendingOptions {
        LendingOptions {
            chain_id: self.wallet.chain_id().unwrap_or(self.fallback_chain),
            api_key: self.api_key.clone(),
        }
    }

    /// Route `key` to an SDK call without touching the cache.
    pub async fn fetch(&self, key: &QueryKey) -> Result<FetchData> {
        let opts = self.options();

        match key.tag() {
            Some(QueryKey::POOL) => {
                let Some(address) = key.part(1).and_then(shared::parse_address) else {
                    tracing::error!(key = %key, "Second query key in array must be an address");
                    return Ok(FetchData::Empty);
                };
                tracing::debug!(pool = %address, chain_id = opts.chain_id, "Fetching lending pool");
                self.sdk
                    .get_lending_pool(address, &opts)
                    .await
                    .map(FetchData::Pool)
            }
            _ => {
                tracing::debug!(key = %key, chain_id = opts.chain_id, "Fetching lending pools");
                self.sdk.get_lending_pools(&opts).await.map(FetchData::Pools)
            }
        }
    }

    /// Fetch, transform, and cache under `key`.
    pub async fn query<T, F>(&self, key: QueryKey, transform: F) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce(FetchData) -> T,
    {
        let fetch = async {
            let data = self.fetch(&key).await?;
            Ok::<T, AppError>(transform(data))
        };
        self.queries.fetch(key.clone(), fetch).await
    }

    /// Frame-driven read: return the cached snapshot and start a background
    /// fetch when the entry is missing, stale or invalidated.
    ///
    /// Must be called inside a Tokio runtime context.
    pub fn use_query<T, F>(&self, key: QueryKey, transform: F) -> QuerySnapshot<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce(FetchData) -> T + Send + 'static,
    {
        if self.queries.should_fetch(&key) && self.queries.begin_fetch(&key) {
            let fetcher = self.clone();
            let task_key = key.clone();
            spawn_tracked("query_fetch", async move {
                let result: Result<Arc<T>> = async {
                    let data = fetcher.fetch(&task_key).await?;
                    Ok(Arc::new(transform(data)))
                }
                .await;
                if let Err(e) = &result {
                    tracing::warn!(key = %task_key, error = %e, "Background query failed");
                }
                fetcher.queries.finish_fetch(&task_key, &result);
            });
        }

        self.queries.snapshot(&key)
    }

    /// Frame-driven read of the connected account's pending redemptions.
    pub fn use_redemptions(&self, pool: Address, account: Address) -> QuerySnapshot<Vec<Redemption>> {
        let key = QueryKey::redemptions(pool.to_string(), account.to_string());

        if self.queries.should_fetch(&key) && self.queries.begin_fetch(&key) {
            let sdk = self.sdk.clone();
            let queries = self.queries.clone();
            let opts = self.options();
            let task_key = key.clone();
            spawn_tracked("redemptions_fetch", async move {
                let result = sdk
                    .get_available_redemptions(pool, account, &opts)
                    .await
                    .map(Arc::new);
                if let Err(e) = &result {
                    tracing::warn!(key = %task_key, error = %e, "Redemptions query failed");
                }
                queries.finish_fetch(&task_key, &result);
            });
        }

        self.queries.snapshot(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryStatus;
    use crate::testing::{
        account_address, pool_address, sample_pool, sample_redemption, MockSdk, MockWallet, POOL_ADDRESS,
    };
    use std::time::Duration;

    fn fetcher(sdk: Arc<MockSdk>, wallet: Arc<MockWallet>) -> Fetcher {
        Fetcher::new(sdk, wallet, QueryClient::default(), 1, Some("key-123".to_string()))
    }

    #[tokio::test]
    async fn test_pool_key_routes_to_single_pool() {
        let sdk = Arc::new(MockSdk::default());
        let fetcher = fetcher(sdk.clone(), Arc::new(MockWallet::disconnected()));

        let data = fetcher.fetch(&QueryKey::pool(POOL_ADDRESS)).await.unwrap();
        assert!(matches!(data, FetchData::Pool(ref pool) if pool.address.to_string() == POOL_ADDRESS));
        assert_eq!(sdk.pool_calls(), 1);
        assert_eq!(sdk.pools_calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_address_is_empty_without_sdk_call() {
        let sdk = Arc::new(MockSdk::default());
        let fetcher = fetcher(sdk.clone(), Arc::new(MockWallet::disconnected()));

        let invalid = fetcher.fetch(&QueryKey::pool("not-an-address")).await.unwrap();
        let missing = fetcher.fetch(&QueryKey::new([QueryKey::POOL])).await.unwrap();

        assert_eq!(invalid, FetchData::Empty);
        assert_eq!(missing, FetchData::Empty);
        assert_eq!(sdk.pool_calls(), 0);
        assert_eq!(sdk.pools_calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_tag_falls_back_to_pool_list() {
        let sdk = Arc::new(MockSdk::default());
        let fetcher = fetcher(sdk.clone(), Arc::new(MockWallet::disconnected()));

        let data = fetcher.fetch(&QueryKey::new(["something-else"])).await.unwrap();
        assert!(matches!(data, FetchData::Pools(_)));
        assert_eq!(sdk.pools_calls(), 1);
    }

    #[tokio::test]
    async fn test_options_follow_wallet_chain() {
        let sdk = Arc::new(MockSdk::default());
        let wallet = Arc::new(MockWallet::connected(42161));
        let fetcher = fetcher(sdk.clone(), wallet);

        fetcher.fetch(&QueryKey::pools()).await.unwrap();
        let opts = sdk.last_options().unwrap();
        assert_eq!(opts.chain_id, 42161);
        assert_eq!(opts.api_key.as_deref(), Some("key-123"));

        let disconnected = Fetcher::new(sdk.clone(), Arc::new(MockWallet::disconnected()), QueryClient::default(), 8453, None);
        assert_eq!(disconnected.options().chain_id, 8453);
    }

    #[tokio::test]
    async fn test_transform_applied_before_caching() {
        let sdk = Arc::new(MockSdk::with_pools(vec![sample_pool(), sample_pool()]));
        let fetcher = fetcher(sdk, Arc::new(MockWallet::disconnected()));
        let key = QueryKey::pools();

        let count = fetcher
            .query(key.clone(), |data| data.into_pools().len())
            .await
            .unwrap();
        assert_eq!(*count, 2);
        assert_eq!(fetcher.queries().get::<usize>(&key).as_deref(), Some(&2));
    }

    #[tokio::test]
    async fn test_use_query_fetches_once_in_background() {
        let sdk = Arc::new(MockSdk::default());
        let fetcher = fetcher(sdk.clone(), Arc::new(MockWallet::disconnected()));
        let key = QueryKey::pools();

        let first = fetcher.use_query(key.clone(), FetchData::into_pools);
        assert!(first.is_loading());
        // Second frame while the first fetch is in flight
        let _ = fetcher.use_query(key.clone(), FetchData::into_pools);

        tokio::time::sleep(Duration::from_millis(10)).await;

        let snapshot = fetcher.use_query(key.clone(), FetchData::into_pools);
        assert_eq!(snapshot.data.map(|pools| pools.len()), Some(1));
        assert_eq!(sdk.pools_calls(), 1);

        fetcher.queries().refetch_queries();
        let _ = fetcher.use_query(key, FetchData::into_pools);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(sdk.pools_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_query_not_refetched_every_frame() {
        let sdk = Arc::new(MockSdk::with_pools(Vec::new()));
        let fetcher = fetcher(sdk.clone(), Arc::new(MockWallet::disconnected()));
        let key = QueryKey::pool(POOL_ADDRESS);

        for _ in 0..20 {
            let _ = fetcher.use_query(key.clone(), FetchData::into_pool);
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let snapshot = fetcher.use_query(key.clone(), FetchData::into_pool);
        assert_eq!(snapshot.status, QueryStatus::Error);
        assert!(snapshot.error.is_some());
        assert_eq!(sdk.pool_calls(), 1);

        tokio::time::sleep(fetcher.queries().stale_time()).await;
        let _ = fetcher.use_query(key, FetchData::into_pool);
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(sdk.pool_calls(), 2);
    }

    #[tokio::test]
    async fn test_use_redemptions_fetches_once_per_account() {
        let sdk = Arc::new(MockSdk::default().with_redemptions(vec![sample_redemption(5_000_000, true)]));
        let fetcher = fetcher(sdk.clone(), Arc::new(MockWallet::connected(8453)));

        let first = fetcher.use_redemptions(pool_address(), account_address());
        assert!(first.is_loading());
        let _ = fetcher.use_redemptions(pool_address(), account_address());

        tokio::time::sleep(Duration::from_millis(10)).await;

        let snapshot = fetcher.use_redemptions(pool_address(), account_address());
        let redemptions = snapshot.data.unwrap();
        assert_eq!(redemptions.len(), 1);
        assert!(redemptions[0].is_matured);
        assert_eq!(sdk.redemption_calls(), 1);
        assert_eq!(sdk.last_options().unwrap().chain_id, 8453);

        let key = QueryKey::redemptions(pool_address().to_string(), account_address().to_string());
        assert!(fetcher.queries().get::<Vec<Redemption>>(&key).is_some());
    }
}
