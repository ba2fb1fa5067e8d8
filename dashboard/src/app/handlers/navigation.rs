//! # Navigation Handlers

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::{AppState, Route};

/// Switch the active route
///
/// Internal handler function - use [`crate::app::App::handle_action`] instead.
pub(crate) fn handle_navigate(state: &Arc<RwLock<AppState>>, route: Route) {
    let mut state = state.write();
    if state.route == route {
        return;
    }

    tracing::info!(from = %state.route, to = %route, "Navigate");
    state.route = route;
}

/// Open an external link in the system browser
pub(crate) fn handle_open_url(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!(url = %url, error = %e, "Failed to open link");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::pool_address;

    #[test]
    fn test_navigate_updates_route() {
        let state = Arc::new(RwLock::new(AppState::default()));
        handle_navigate(&state, Route::PoolDetail(pool_address()));
        assert_eq!(state.read().route, Route::PoolDetail(pool_address()));

        handle_navigate(&state, Route::Pools);
        assert_eq!(state.read().route, Route::Pools);
    }
}
