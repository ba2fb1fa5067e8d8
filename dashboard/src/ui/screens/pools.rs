//! Pools list: headline stats and the paginated pool table.

use egui::{RichText, Ui};
use shared::{format_compact_number, Pool};

use crate::app::Route;
use crate::query::{FetchData, QueryKey};
use crate::ui::theme::Theme;
use crate::ui::widgets::section::{render_section, SectionProps};
use crate::ui::widgets::stat::render_stat;
use crate::ui::widgets::table::{render_table, row_target, CellValue, Column, Row, TableProps, TableState};
use crate::ui::widgets::withdraw_panel::format_lock_time;
use crate::ui::UiAction;

use super::ScreenContext;

pub const TITLE: &str = "Lending Pools";
pub const DESCRIPTION: &str = "Deposit assets into on-chain lending pools and earn yield.";
const UID_KEY: &str = "address";

fn format_apy(apy: f64) -> String {
    format!("{:.2}%", apy)
}

pub const POOL_COLUMNS: [Column; 6] = [
    Column::new("name", "Pool", 180.0),
    Column::new("asset", "Asset", 70.0),
    Column::new("tvl", "TVL", 120.0).right(),
    Column::new("apy", "APY", 70.0).right().format(format_apy),
    Column::new("lock", "Lock", 80.0).right(),
    Column::new(UID_KEY, "Address", 120.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolStats {
    pub count: usize,
    /// Sum of pool assets in display units
    pub tvl: f64,
}

pub fn pool_stats(pools: &[Pool]) -> PoolStats {
    PoolStats {
        count: pools.len(),
        tvl: pools.iter().map(|pool| pool.total_assets.to_f64()).sum(),
    }
}

pub fn pool_rows(pools: &[Pool]) -> Vec<Row> {
    pools
        .iter()
        .map(|pool| {
            Row::from([
                ("name", CellValue::Text(pool.name.clone())),
                ("asset", CellValue::Text(pool.underlying.symbol.clone())),
                ("tvl", CellValue::Amount(pool.total_assets.clone())),
                ("apy", CellValue::Number(pool.apy)),
                ("lock", CellValue::Text(format_lock_time(pool.lag_duration))),
                (UID_KEY, CellValue::Address(pool.address)),
            ])
        })
        .collect()
}

pub fn render(ui: &mut Ui, ctx: &ScreenContext<'_>, table: &mut TableState, theme: &Theme) -> Vec<UiAction> {
    let snapshot = ctx.fetcher.use_query(QueryKey::pools(), FetchData::into_pools);
    let pools = snapshot.data.as_deref().map(Vec::as_slice).unwrap_or_default();
    let rows = pool_rows(pools);
    let stats = pool_stats(pools);
    let chain_id = ctx.active_chain();

    let mut actions = Vec::new();
    let props = SectionProps {
        title: Some(TITLE),
        description: Some(DESCRIPTION),
        chain_id: Some(chain_id),
        ..SectionProps::default()
    };

    render_section(ui, &props, theme, |_| {}, |ui| {
        ui.horizontal(|ui| {
            render_stat(ui, "Pools", &stats.count.to_string(), None, true, theme);
            render_stat(ui, "Total value locked", &format_compact_number(stats.tvl, true), None, true, theme);
        });
        ui.add_space(16.0);

        if let (None, Some(error)) = (&snapshot.data, &snapshot.error) {
            ui.label(RichText::new(format!("Failed to load pools: {}", error)).color(theme.colors.error));
            return;
        }

        let response = render_table(
            ui,
            &TableProps {
                id: "pools_table",
                columns: &POOL_COLUMNS,
                rows: &rows,
                uid_key: UID_KEY,
                loading: snapshot.is_loading(),
                action: Some("Open"),
            },
            table,
            theme,
        );

        let navigate = response
            .navigate
            .or_else(|| response.action.and_then(|index| row_target(&rows, index, UID_KEY)));
        if let Some(route) = navigate.as_deref().and_then(Route::parse) {
            actions.push(UiAction::Navigate(route));
        }
        if let Some(url) = response
            .open_address
            .and_then(|address| shared::chain::explorer_address_url(chain_id, &address))
        {
            actions.push(UiAction::OpenUrl(url));
        }
    });

    actions
}
