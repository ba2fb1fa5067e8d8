//! # Withdraw Panel
//!
//! Two-step withdrawal UI: request a redemption of shares, then claim it
//! from the list once the lock time has passed.

use alloy_primitives::Address;
use egui::{Grid, RichText, TextEdit, Ui};
use shared::{Pool, Redemption};

use crate::hooks::WithdrawHook;
use crate::query::QuerySnapshot;
use crate::ui::theme::Theme;
use crate::ui::UiAction;

use super::web3_button::{render_web3_button, Web3ButtonMode};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// `"7 days"`, `"1 day"`, `"12 hours"`, `"30 minutes"`
pub fn format_lock_time(seconds: u64) -> String {
    let (count, unit) = if seconds >= SECONDS_PER_DAY {
        (seconds / SECONDS_PER_DAY, "day")
    } else if seconds >= SECONDS_PER_HOUR {
        (seconds / SECONDS_PER_HOUR, "hour")
    } else {
        (seconds / SECONDS_PER_MINUTE, "minute")
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{}", count, unit, plural)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionRow {
    pub amount: String,
    pub date: String,
    pub claimable: bool,
}

impl From<&Redemption> for RedemptionRow {
    fn from(redemption: &Redemption) -> Self {
        Self {
            amount: redemption.amount.normalized.clone(),
            date: redemption
                .maturity_date()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            claimable: redemption.is_matured,
        }
    }
}

pub struct WithdrawProps<'a> {
    pub pool: &'a Pool,
    pub account: Option<Address>,
    pub redemptions: Option<&'a QuerySnapshot<Vec<Redemption>>>,
    pub mode: Web3ButtonMode,
}

pub fn render_withdraw_panel(ui: &mut Ui, hook: &WithdrawHook, props: &WithdrawProps<'_>, theme: &Theme) -> Option<UiAction> {
    let state = hook.state();
    let pool = props.pool;
    let mut action = None;

    let lock_seconds = if state.meta.lock_time.is_zero() {
        pool.lag_duration
    } else {
        u64::try_from(state.meta.lock_time.raw).unwrap_or(pool.lag_duration)
    };

    ui.label(RichText::new("Withdraw").font(theme.h2()));
    ui.label(
        RichText::new(format!("Redemptions unlock {} after the request", format_lock_time(lock_seconds)))
            .color(theme.colors.text_secondary),
    );
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let mut value = hook.params().value;
        let input = TextEdit::singleline(&mut value)
            .hint_text("0.0")
            .font(egui::TextStyle::Monospace)
            .desired_width(240.0);
        if ui.add(input).changed() {
            hook.set_value(value.clone());
        }
        ui.label(&pool.symbol);
        if !state.expected.loading && !state.expected.out.is_zero() {
            ui.label(
                RichText::new(format!("≈ {} {}", state.expected.out.normalized, pool.underlying.symbol))
                    .color(theme.colors.text_secondary),
            );
        }
    });

    if !state.error.is_empty() {
        ui.colored_label(theme.colors.error, &state.error);
    }

    ui.add_space(6.0);
    if let Some(click) = render_web3_button(ui, props.mode, state.button, theme) {
        action = Some(UiAction::from_web3(click, UiAction::RequestWithdraw(pool.address)));
    }

    ui.add_space(12.0);
    ui.label(RichText::new("Pending redemptions").strong());

    let Some(snapshot) = props.redemptions.filter(|_| props.account.is_some()) else {
        ui.colored_label(theme.colors.text_secondary, "Connect a wallet to see your redemptions");
        return action;
    };

    if snapshot.is_loading() {
        ui.spinner();
        return action;
    }
    if let (None, Some(error)) = (&snapshot.data, &snapshot.error) {
        ui.colored_label(theme.colors.error, error);
        return action;
    }

    let redemptions = snapshot.data.as_deref().map(Vec::as_slice).unwrap_or_default();
    if redemptions.is_empty() {
        ui.colored_label(theme.colors.text_secondary, "No pending redemptions");
        return action;
    }

    let can_claim = props.mode == Web3ButtonMode::Action && !state.is_loading;

    Grid::new(("redemptions", pool.address)).num_columns(3).striped(true).spacing([16.0, 6.0]).show(ui, |ui| {
        ui.label(RichText::new("Amount").color(theme.colors.text_secondary));
        ui.label(RichText::new("Matures").color(theme.colors.text_secondary));
        ui.label("");
        ui.end_row();

        for redemption in redemptions {
            let row = RedemptionRow::from(redemption);
            ui.label(RichText::new(format!("{} {}", row.amount, pool.symbol)).monospace());
            ui.label(&row.date);
            if row.claimable {
                if ui.add_enabled(can_claim, egui::Button::new("Claim")).clicked() {
                    action = Some(UiAction::Claim {
                        pool: pool.address,
                        amount: row.amount.clone(),
                    });
                }
            } else {
                ui.colored_label(theme.colors.text_secondary, "Locked");
            }
            ui.end_row();
        }
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_redemption;

    #[test]
    fn test_format_lock_time() {
        assert_eq!(format_lock_time(604_800), "7 days");
        assert_eq!(format_lock_time(86_400), "1 day");
        assert_eq!(format_lock_time(43_200), "12 hours");
        assert_eq!(format_lock_time(1_800), "30 minutes");
        assert_eq!(format_lock_time(0), "0 minutes");
    }

    #[test]
    fn test_redemption_row() {
        let row = RedemptionRow::from(&sample_redemption(5_000_000, true));
        assert_eq!(row.amount, "5");
        assert_eq!(row.date, "2026-05-01");
        assert!(row.claimable);

        let locked = RedemptionRow::from(&sample_redemption(5_000_000, false));
        assert!(!locked.claimable);
    }
}
