//! Pool detail: breadcrumbs, headline stats, the deposit modal and the
//! withdraw panel for one pool.

use alloy_primitives::Address;
use egui::{RichText, Ui};
use shared::{format_compact_number, Pool};

use crate::app::PoolSession;
use crate::query::{FetchData, QueryKey};
use crate::ui::theme::Theme;
use crate::ui::widgets::deposit_modal::render_deposit_modal;
use crate::ui::widgets::section::{render_section, Crumb, SectionProps};
use crate::ui::widgets::stat::render_stat;
use crate::ui::widgets::web3_button::Web3ButtonMode;
use crate::ui::widgets::withdraw_panel::{format_lock_time, render_withdraw_panel, WithdrawProps};
use crate::ui::UiAction;

use super::ScreenContext;

pub fn description(pool: &Pool) -> String {
    format!(
        "Deposit {} to receive {} shares. Withdrawals unlock {} after they are requested.",
        pool.underlying.symbol,
        pool.symbol,
        format_lock_time(pool.lag_duration)
    )
}

pub fn render(
    ui: &mut Ui,
    ctx: &ScreenContext<'_>,
    address: Address,
    session: &mut PoolSession,
    theme: &Theme,
) -> Vec<UiAction> {
    let snapshot = ctx
        .fetcher
        .use_query(QueryKey::pool(address.to_string()), FetchData::into_pool);
    let crumbs = [Crumb::new("Pools", "/")];
    let mut actions = Vec::new();

    let Some(pool) = snapshot.data.as_deref().and_then(Option::as_ref) else {
        let props = SectionProps {
            title: Some("Pool"),
            breadcrumbs: Some(&crumbs),
            loading: snapshot.is_loading(),
            ..SectionProps::default()
        };
        let navigate = render_section(ui, &props, theme, |_| {}, |ui| {
            if snapshot.is_loading() {
                ui.spinner();
            } else if let Some(error) = &snapshot.error {
                ui.colored_label(theme.colors.error, format!("Failed to load pool: {}", error));
            } else {
                ui.colored_label(theme.colors.text_secondary, format!("No lending pool at {}", address));
            }
        });
        push_navigation(&mut actions, navigate);
        return actions;
    };

    session.sync_target(pool);
    let redemptions = ctx.account.map(|account| {
        let snapshot = ctx.fetcher.use_redemptions(pool.address, account);
        if let Some(data) = &snapshot.data {
            session.sync_redemptions(data);
        }
        snapshot
    });

    let mode = Web3ButtonMode::resolve(ctx.account, ctx.wallet_chain, ctx.fallback_chain);
    let description = description(pool);
    let props = SectionProps {
        title: Some(&pool.name),
        description: Some(&description),
        breadcrumbs: Some(&crumbs),
        loading: false,
        chain_id: Some(pool.chain_id),
    };

    let mut deposit_action = None;
    let mut body_actions = Vec::new();

    let navigate = render_section(
        ui,
        &props,
        theme,
        |ui| {
            deposit_action = render_deposit_modal(ui, &mut session.deposit_modal, &session.deposit, pool, mode, theme);
        },
        |ui| {
            ui.horizontal(|ui| {
                render_stat(
                    ui,
                    "Total value locked",
                    &format_compact_number(pool.total_assets.to_f64(), false),
                    Some(&pool.underlying.symbol),
                    true,
                    theme,
                );
                render_stat(ui, "APY", &format!("{:.2}", pool.apy), Some("%"), true, theme);
                render_stat(ui, "Lock time", &format_lock_time(pool.lag_duration), None, true, theme);
            });

            let explorer = shared::chain::explorer_address_url(pool.chain_id, &pool.address.to_string());
            if let Some(url) = explorer {
                if ui.link(RichText::new("View contract on explorer").small()).clicked() {
                    body_actions.push(UiAction::OpenUrl(url));
                }
            }

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            let withdraw_props = WithdrawProps {
                pool,
                account: ctx.account,
                redemptions: redemptions.as_ref(),
                mode,
            };
            if let Some(action) = render_withdraw_panel(ui, &session.withdraw, &withdraw_props, theme) {
                body_actions.push(action);
            }
        },
    );

    push_navigation(&mut actions, navigate);
    actions.extend(deposit_action);
    actions.extend(body_actions);
    actions
}

fn push_navigation(actions: &mut Vec<UiAction>, path: Option<String>) {
    if let Some(route) = path.as_deref().and_then(crate::app::Route::parse) {
        actions.push(UiAction::Navigate(route));
    }
}
