//! # Screen Modules
//!
//! One module per route:
//!
//! - **[`pools`]**: `/`, stats row and the table of lending pools
//! - **[`pool_detail`]**: `/pools/<address>`, pool stats, deposit modal and withdraw panel
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, ctx: &ScreenContext, /* local state */, theme: &Theme) -> Vec<UiAction>
//! ```
//!
//! Screens read cached queries through the [`Fetcher`](crate::query::Fetcher),
//! which starts background fetches on demand, and hand user intents back to
//! the [`App`](crate::app::App) as [`UiAction`](crate::ui::UiAction)s.

pub mod pool_detail;
pub mod pools;

use alloy_primitives::Address;
use shared::ChainId;

use crate::query::Fetcher;

/// Read-only inputs shared by every screen.
pub struct ScreenContext<'a> {
    pub fetcher: &'a Fetcher,
    pub account: Option<Address>,
    pub wallet_chain: Option<ChainId>,
    pub fallback_chain: ChainId,
}

impl ScreenContext<'_> {
    /// Chain the data on screen was read from
    pub fn active_chain(&self) -> ChainId {
        self.wallet_chain.unwrap_or(self.fallback_chain)
    }
}
