//! # Web3 Button
//!
//! Wraps a transaction button with the wallet gate:
//!
//! | Wallet | Shows |
//! |--------|-------|
//! | not connected | "Connect Wallet" |
//! | on another chain | "Switch Network" (always enabled) |
//! | on the required chain | the wrapped action button |

use alloy_primitives::Address;
use egui::{Button, RichText, Ui, Vec2};
use shared::ChainId;

use crate::hooks::ButtonState;
use crate::ui::theme::Theme;

pub const CONNECT_LABEL: &str = "Connect Wallet";
pub const SWITCH_LABEL: &str = "Switch Network";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Web3ButtonMode {
    Connect,
    SwitchNetwork(ChainId),
    Action,
}

impl Web3ButtonMode {
    pub fn resolve(account: Option<Address>, wallet_chain: Option<ChainId>, required_chain: ChainId) -> Self {
        if account.is_none() {
            return Web3ButtonMode::Connect;
        }
        if wallet_chain != Some(required_chain) {
            return Web3ButtonMode::SwitchNetwork(required_chain);
        }
        Web3ButtonMode::Action
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Web3Click {
    Connect,
    Switch(ChainId),
    Action,
}

/// Full-width button; returns what was clicked.
pub fn render_web3_button(ui: &mut Ui, mode: Web3ButtonMode, button: ButtonState, theme: &Theme) -> Option<Web3Click> {
    let (text, enabled, click) = match mode {
        Web3ButtonMode::Connect => (CONNECT_LABEL, true, Web3Click::Connect),
        Web3ButtonMode::SwitchNetwork(chain_id) => (SWITCH_LABEL, true, Web3Click::Switch(chain_id)),
        Web3ButtonMode::Action => (button.text, !button.disabled, Web3Click::Action),
    };

    let widget = Button::new(RichText::new(text).strong().color(theme.colors.background))
        .fill(theme.colors.primary)
        .min_size(Vec2::new(ui.available_width(), 36.0));

    ui.add_enabled(enabled, widget).clicked().then_some(click)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::account_address;

    #[test]
    fn test_connect_without_account() {
        assert_eq!(Web3ButtonMode::resolve(None, Some(1), 1), Web3ButtonMode::Connect);
    }

    #[test]
    fn test_switch_on_other_chain() {
        let account = Some(account_address());
        assert_eq!(
            Web3ButtonMode::resolve(account, Some(8453), 1),
            Web3ButtonMode::SwitchNetwork(1)
        );
        assert_eq!(
            Web3ButtonMode::resolve(account, None, 1),
            Web3ButtonMode::SwitchNetwork(1)
        );
    }

    #[test]
    fn test_action_on_required_chain() {
        assert_eq!(
            Web3ButtonMode::resolve(Some(account_address()), Some(1), 1),
            Web3ButtonMode::Action
        );
    }
}
