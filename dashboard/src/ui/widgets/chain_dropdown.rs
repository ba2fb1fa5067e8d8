//! Network selector. The selection mirrors the wallet's chain; picking a
//! known chain asks the wallet to switch.

use egui::{RichText, Ui};
use shared::chain::{chain_info, ChainInfo, SUPPORTED_CHAINS};
use shared::ChainId;

use crate::ui::theme::Theme;

/// Icon label plus name, or `"Unknown"` for chains outside the table.
pub fn chain_label(chain_id: ChainId) -> String {
    match chain_info(chain_id) {
        Some(chain) => format!("{}  {}", chain.short_name, chain.name),
        None => "Unknown".to_string(),
    }
}

/// Switch request for a selection; unknown ids are ignored.
pub fn chain_choice(selected: ChainId, current: Option<ChainId>) -> Option<ChainId> {
    if chain_info(selected).is_none() {
        tracing::warn!(chain_id = selected, "Ignoring unknown chain selection");
        return None;
    }
    (Some(selected) != current).then_some(selected)
}

/// Returns the chain the user asked to switch to.
pub fn render_chain_dropdown(
    ui: &mut Ui,
    wallet_chain: Option<ChainId>,
    fallback_chain: ChainId,
    theme: &Theme,
) -> Option<ChainId> {
    let active = wallet_chain.unwrap_or(fallback_chain);
    let mut selected = active;

    egui::ComboBox::from_id_salt("chain_dropdown")
        .selected_text(RichText::new(chain_label(active)).color(theme.colors.text))
        .width(170.0)
        .show_ui(ui, |ui| {
            for ChainInfo { id, .. } in SUPPORTED_CHAINS {
                ui.selectable_value(&mut selected, *id, chain_label(*id));
            }
        });

    if selected == active {
        return None;
    }
    chain_choice(selected, wallet_chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(chain_label(1), "ETH  Ethereum");
        assert_eq!(chain_label(8453), "BASE  Base");
        assert_eq!(chain_label(56), "Unknown");
    }

    #[test]
    fn test_choice_requires_known_chain() {
        assert_eq!(chain_choice(10, Some(1)), Some(10));
        assert_eq!(chain_choice(56, Some(1)), None);
    }

    #[test]
    fn test_choice_of_current_chain_is_noop() {
        assert_eq!(chain_choice(1, Some(1)), None);
        // Disconnected wallets still get the request
        assert_eq!(chain_choice(1, None), Some(1));
    }
}
