//! # Header
//!
//! Top bar: title, navigation, chain selector, wallet status and the theme
//! toggle.

use egui::{Align, Layout, RichText, Ui};
use shared::{truncate_address, ChainId};

use crate::app::Route;
use crate::services::WalletStatus;
use crate::ui::theme::{Theme, ThemeMode};
use crate::ui::UiAction;

use super::chain_dropdown::render_chain_dropdown;

pub const APP_TITLE: &str = "Lending Pools";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "About", path: "/" },
    NavItem { label: "Contact", path: "/" },
];

pub struct HeaderProps<'a> {
    pub wallet: &'a WalletStatus,
    pub wallet_chain: Option<ChainId>,
    pub fallback_chain: ChainId,
}

/// Wallet button text for a status
pub fn wallet_label(status: &WalletStatus) -> String {
    match status {
        WalletStatus::Disconnected => "Connect Wallet".to_string(),
        WalletStatus::Connecting => "Connecting...".to_string(),
        WalletStatus::Connected(address) => truncate_address(&address.to_string()),
        WalletStatus::Error(_) => "Retry Connect".to_string(),
    }
}

pub fn render_header(ui: &mut Ui, props: &HeaderProps<'_>, theme: &Theme) -> Vec<UiAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        let title = RichText::new(APP_TITLE).font(theme.h1()).color(theme.colors.primary);
        if ui.add(egui::Label::new(title).sense(egui::Sense::click())).clicked() {
            actions.push(UiAction::Navigate(Route::Pools));
        }
        ui.add_space(24.0);

        for item in NAV_ITEMS {
            if ui.selectable_label(false, item.label).clicked() {
                if let Some(route) = Route::parse(item.path) {
                    actions.push(UiAction::Navigate(route));
                }
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let toggle = match theme.mode {
                ThemeMode::Dark => "☀",
                ThemeMode::Light => "🌙",
            };
            if ui
                .button(toggle)
                .on_hover_text(format!("Switch to {} mode", theme.mode.toggled().label()))
                .clicked()
            {
                actions.push(UiAction::ToggleTheme);
            }

            let wallet = ui.add_enabled(
                *props.wallet != WalletStatus::Connecting,
                egui::Button::new(wallet_label(props.wallet)),
            );
            let wallet = match props.wallet {
                WalletStatus::Connected(address) => wallet.on_hover_text(format!("{}\nClick to disconnect", address)),
                WalletStatus::Error(error) => wallet.on_hover_text(error),
                _ => wallet,
            };
            if wallet.clicked() {
                actions.push(match props.wallet {
                    WalletStatus::Connected(_) => UiAction::DisconnectWallet,
                    _ => UiAction::ConnectWallet,
                });
            }

            if props.wallet.is_connected() {
                if let Some(chain_id) = render_chain_dropdown(ui, props.wallet_chain, props.fallback_chain, theme) {
                    actions.push(UiAction::SwitchChain(chain_id));
                }
            }
        });
    });

    actions
}
