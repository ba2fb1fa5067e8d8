//! # Application State Types
//!
//! Route, frame-shared state and the per-pool hook session.

use std::fmt;
use std::sync::Arc;

use alloy_primitives::Address;
use shared::{Pool, Redemption};

use crate::hooks::{DepositHook, HookSettings, TxDeps, WithdrawHook};
use crate::services::WalletStatus;
use crate::ui::widgets::{ModalState, TableState};

const POOLS_PREFIX: &str = "/pools/";

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Pools,
    /// `/pools/<address>`
    PoolDetail(Address),
}

impl Route {
    /// Parse a path; `None` for paths the dashboard does not serve.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Some(Route::Pools);
        }

        let address = path.strip_prefix(POOLS_PREFIX)?.trim_end_matches('/');
        shared::parse_address(address).map(Route::PoolDetail)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Pools => "/".to_string(),
            Route::PoolDetail(address) => format!("{}{}", POOLS_PREFIX, address),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// State read by every frame.
#[derive(Debug, Clone)]
pub struct AppState {
    pub route: Route,
    pub wallet: WalletStatus,
    pub pools_table: TableState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Pools,
            wallet: WalletStatus::Disconnected,
            pools_table: TableState::default(),
        }
    }
}

/// Hooks and modal state for one pool, created on first visit and kept for
/// the rest of the session so pending timers and toasts survive navigation.
pub struct PoolSession {
    pub deposit: Arc<DepositHook>,
    pub withdraw: Arc<WithdrawHook>,
    pub deposit_modal: ModalState,
}

impl PoolSession {
    pub fn new(deps: TxDeps, settings: HookSettings) -> Self {
        let deposit = Arc::new(DepositHook::new(deps.clone(), settings.clone()));
        let withdraw = Arc::new(WithdrawHook::new(deps, settings));
        let deposit_modal = ModalState::default();

        deposit.on_close_modal(deposit_modal.closer());

        Self {
            deposit,
            withdraw,
            deposit_modal,
        }
    }

    /// Point both hooks at `pool`; a no-op when nothing changed.
    pub fn sync_target(&self, pool: &Pool) {
        let target = (Some(pool.address), Some(pool.underlying.address), Some(pool.chain_id));
        self.deposit.set_target(target.0, target.1, target.2);
        self.withdraw.set_target(target.0, target.1, target.2);
    }

    pub fn sync_redemptions(&self, redemptions: &[Redemption]) {
        if self.withdraw.params().redemptions != redemptions {
            self.withdraw.set_redemptions(redemptions.to_vec());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pool_address, sample_pool, sample_redemption, Harness, POOL_ADDRESS};

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Some(Route::Pools));
        assert_eq!(Route::parse(""), Some(Route::Pools));
        assert_eq!(
            Route::parse(&format!("/pools/{}", POOL_ADDRESS)),
            Some(Route::PoolDetail(pool_address()))
        );
        assert_eq!(
            Route::parse(&format!("/pools/{}/", POOL_ADDRESS)),
            Some(Route::PoolDetail(pool_address()))
        );
        assert_eq!(Route::parse("/pools/not-an-address"), None);
        assert_eq!(Route::parse("/about"), None);
    }

    #[test]
    fn test_route_path() {
        assert_eq!(Route::Pools.path(), "/");
        let route = Route::PoolDetail(pool_address());
        assert_eq!(route.path(), format!("/pools/{}", POOL_ADDRESS));
        assert_eq!(Route::parse(&route.path()), Some(route));
    }

    #[tokio::test]
    async fn test_pool_session_targets_both_hooks() {
        let harness = Harness::connected(1);
        let session = PoolSession::new(harness.deps(), HookSettings::default());
        let pool = sample_pool();

        session.sync_target(&pool);
        assert_eq!(session.deposit.params().pool, Some(pool.address));
        assert_eq!(session.withdraw.params().asset, Some(pool.underlying.address));
        assert_eq!(session.withdraw.params().chain_id, Some(1));

        let redemptions = vec![sample_redemption(5_000_000, true)];
        session.sync_redemptions(&redemptions);
        assert_eq!(session.withdraw.params().redemptions, redemptions);
        assert!(session.deposit.params().redemptions.is_empty());
    }
}
