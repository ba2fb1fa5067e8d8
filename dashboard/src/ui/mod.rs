//! # GUI Rendering
//!
//! Immediate-mode rendering of the dashboard with **egui**.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ header: title · nav · chain dropdown · wallet · theme    │  TopBottomPanel
//! ├──────────────────────────────────────────────────────────┤
//! │                                                          │
//! │   Route::Pools        → screens::pools                   │  CentralPanel
//! │   Route::PoolDetail   → screens::pool_detail             │
//! │                                                          │
//! └──────────────────────────────────────────────────────────┘
//!                                          toasts (top right)
//!                                  loading toasts (bottom right)
//! ```
//!
//! Rendering never blocks and never mutates shared state directly. Every
//! user intent comes back as a [`UiAction`] that the [`App`] dispatches
//! after the frame.

pub mod screens;
pub mod theme;
pub mod widgets;

use alloy_primitives::Address;
use shared::ChainId;

use crate::app::{App, Route};
use crate::ui::screens::ScreenContext;
use crate::ui::widgets::header::{render_header, HeaderProps};
use crate::ui::widgets::web3_button::Web3Click;

/// User intent produced while rendering a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(Route),
    OpenUrl(String),
    ConnectWallet,
    DisconnectWallet,
    SwitchChain(ChainId),
    ToggleTheme,
    Deposit(Address),
    RequestWithdraw(Address),
    /// Claim the redemption of exactly `amount` shares
    Claim { pool: Address, amount: String },
}

impl UiAction {
    /// Map a gated button click to its intent; `action` is used for the
    /// wrapped button itself.
    pub fn from_web3(click: Web3Click, action: UiAction) -> Self {
        match click {
            Web3Click::Connect => UiAction::ConnectWallet,
            Web3Click::Switch(chain_id) => UiAction::SwitchChain(chain_id),
            Web3Click::Action => action,
        }
    }
}

/// Render one frame and collect the user's intents.
pub fn render(ctx: &egui::Context, app: &mut App) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let (route, wallet, mut table) = {
        let state = app.state.read();
        (state.route, state.wallet.clone(), state.pools_table)
    };
    let wallet_chain = app.wallet_chain();
    let fallback_chain = app.config.fallback_chain_id;

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        let props = HeaderProps {
            wallet: &wallet,
            wallet_chain,
            fallback_chain,
        };
        actions.extend(render_header(ui, &props, &app.theme));
        ui.add_space(6.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            let screen = ScreenContext {
                fetcher: &app.fetcher,
                account: wallet.address(),
                wallet_chain,
                fallback_chain,
            };

            match route {
                Route::Pools => {
                    actions.extend(screens::pools::render(ui, &screen, &mut table, &app.theme));
                }
                Route::PoolDetail(address) => {
                    let session = app.sessions.entry(address).or_insert_with(|| {
                        crate::app::PoolSession::new(app.tx_deps.clone(), app.hook_settings.clone())
                    });
                    actions.extend(screens::pool_detail::render(ui, &screen, address, session, &app.theme));
                }
            }
        });
    });

    app.state.write().pools_table = table;
    app.notifications.show(ctx, &app.notifier, &app.theme);

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::pool_address;

    #[test]
    fn test_web3_click_mapping() {
        let deposit = UiAction::Deposit(pool_address());
        assert_eq!(UiAction::from_web3(Web3Click::Connect, deposit.clone()), UiAction::ConnectWallet);
        assert_eq!(UiAction::from_web3(Web3Click::Switch(10), deposit.clone()), UiAction::SwitchChain(10));
        assert_eq!(UiAction::from_web3(Web3Click::Action, deposit.clone()), deposit);
    }
}
