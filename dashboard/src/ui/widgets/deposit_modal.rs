//! Deposit form in a modal: amount in, previewed shares out, estimated fee
//! and the gated submit button. Closes itself once the deposit succeeds.

use egui::{Grid, RichText, TextEdit, Ui};
use shared::Pool;

use crate::hooks::{DepositHook, Expected};
use crate::ui::theme::Theme;
use crate::ui::UiAction;

use super::modal::{render_modal, ModalState};
use super::web3_button::{render_web3_button, Web3ButtonMode};

pub const DEPOSIT_TITLE: &str = "Deposit";

/// Previewed output; blank while a preview is pending.
pub fn out_text(expected: &Expected) -> String {
    if expected.loading {
        " ".to_string()
    } else {
        expected.out.normalized.clone()
    }
}

pub fn render_deposit_modal(
    ui: &mut Ui,
    modal: &mut ModalState,
    hook: &DepositHook,
    pool: &Pool,
    mode: Web3ButtonMode,
    theme: &Theme,
) -> Option<UiAction> {
    let state = hook.state();
    let mut action = None;
    let asset_symbol = state.meta.symbol.clone().unwrap_or_else(|| pool.underlying.symbol.clone());

    render_modal(
        ui,
        modal,
        DEPOSIT_TITLE,
        DEPOSIT_TITLE,
        state.is_success,
        theme,
        || hook.set_value(""),
        |ui| {
            let mut value = hook.params().value;

            Grid::new(("deposit_form", pool.address)).num_columns(3).spacing([12.0, 10.0]).show(ui, |ui| {
                ui.label(RichText::new("In").color(theme.colors.text_secondary));
                let input = TextEdit::singleline(&mut value)
                    .hint_text("0.0")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(300.0);
                if ui.add(input).changed() {
                    hook.set_value(value.clone());
                }
                ui.label(&asset_symbol);
                ui.end_row();

                ui.label(RichText::new("Out").color(theme.colors.text_secondary));
                ui.label(RichText::new(out_text(&state.expected)).monospace());
                ui.label(&pool.symbol);
                ui.end_row();

                ui.label(RichText::new("Fee").color(theme.colors.text_secondary));
                ui.label(RichText::new(&state.expected.fee.normalized).monospace());
                ui.label(&asset_symbol);
                ui.end_row();
            });

            if !state.error.is_empty() {
                ui.colored_label(theme.colors.error, &state.error);
            }

            ui.add_space(8.0);
            if let Some(click) = render_web3_button(ui, mode, state.button, theme) {
                action = Some(UiAction::from_web3(click, UiAction::Deposit(pool.address)));
            }
        },
    );

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use shared::NormalizedAmount;

    #[test]
    fn test_out_blank_while_loading() {
        let mut expected = Expected {
            fee: NormalizedAmount::from_raw(U256::from(200_000u64), 6),
            out: NormalizedAmount::from_raw(U256::from(99_950_000u64), 6),
            loading: true,
        };
        assert_eq!(out_text(&expected), " ");

        expected.loading = false;
        assert_eq!(out_text(&expected), "99.95");
    }
}
