//! # Table
//!
//! Paginated data table with clickable rows.
//!
//! Rows are maps from column id to [`CellValue`]. Clicking a row navigates to
//! `/pools/<uid>` where `uid` is the row's value under `uid_key`.
//!
//! ```text
//! ┌──────────┬──────────┬─────────────┐
//! │ Name     │ Asset    │         TVL │   header
//! ├──────────┼──────────┼─────────────┤
//! │ Pool A   │ USDC     │     1.2M    │   rows (page slice)
//! │ Pool B   │ DAI      │     800K    │
//! └──────────┴──────────┴─────────────┘
//!     Rows per page [10 ▾]   1–2 of 2   ◀ ▶
//! ```

use std::collections::HashMap;
use std::ops::Range;

use alloy_primitives::Address;
use egui::{Align, Label, Layout, RichText, ScrollArea, Sense, Ui, Vec2};
use shared::{truncate_address, NormalizedAmount};

use crate::ui::theme::Theme;

pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [10, 25, 100];
pub const MAX_HEIGHT: f32 = 440.0;

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub id: &'static str,
    pub header: &'static str,
    pub min_width: f32,
    pub align_right: bool,
    /// Applied to numeric cells only
    pub format: Option<fn(f64) -> String>,
}

impl Column {
    pub const fn new(id: &'static str, header: &'static str, min_width: f32) -> Self {
        Self {
            id,
            header,
            min_width,
            align_right: false,
            format: None,
        }
    }

    pub const fn right(mut self) -> Self {
        self.align_right = true;
        self
    }

    pub const fn format(mut self, format: fn(f64) -> String) -> Self {
        self.format = Some(format);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Amount(NormalizedAmount),
    Address(Address),
}

/// What a cell renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellText {
    Plain(String),
    /// Truncated address rendered as a link
    Link { text: String, address: String },
}

impl CellValue {
    /// Amounts show their normalized string; anything that reads as an
    /// address is truncated into a link.
    pub fn display(&self, column: &Column) -> CellText {
        let text = match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Amount(amount) => amount.normalized.clone(),
            CellValue::Address(address) => address.to_string(),
            CellValue::Number(value) => {
                return CellText::Plain(match column.format {
                    Some(format) => format(*value),
                    None => value.to_string(),
                })
            }
        };

        if shared::is_address(&text) {
            CellText::Link {
                text: truncate_address(&text),
                address: text,
            }
        } else {
            CellText::Plain(text)
        }
    }

    /// Row identifier form of the value; empty values have none
    pub fn uid(&self) -> Option<String> {
        let uid = match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(value) => value.to_string(),
            CellValue::Amount(amount) => amount.normalized.clone(),
            CellValue::Address(address) => address.to_string(),
        };
        (!uid.is_empty()).then_some(uid)
    }
}

pub type Row = HashMap<&'static str, CellValue>;

/// Route for a clicked row, or `None` with an error log when the row has no uid.
pub fn row_target(rows: &[Row], index: usize, uid_key: &str) -> Option<String> {
    match rows.get(index).and_then(|row| row.get(uid_key)).and_then(CellValue::uid) {
        Some(uid) => Some(format!("/pools/{}", uid)),
        None => {
            tracing::error!(index = index, uid_key = uid_key, "uid not found");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    page: usize,
    rows_per_page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
        }
    }
}

impl TableState {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size always returns to the first page
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page).max(1)
    }

    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.rows_per_page).min(total);
        let end = (start + self.rows_per_page).min(total);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    /// `"11–20 of 23"`
    pub fn label(&self, total: usize) -> String {
        let range = self.range(total);
        let first = if range.is_empty() { 0 } else { range.start + 1 };
        format!("{}–{} of {}", first, range.end, total)
    }
}

pub struct TableProps<'a> {
    pub id: &'a str,
    pub columns: &'a [Column],
    pub rows: &'a [Row],
    pub uid_key: &'a str,
    pub loading: bool,
    /// Label of a trailing right-aligned button in every row
    pub action: Option<&'a str>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableResponse {
    /// Path of a clicked row
    pub navigate: Option<String>,
    /// Address link that was clicked
    pub open_address: Option<String>,
    /// Index into `rows` whose action button was clicked
    pub action: Option<usize>,
}

pub fn render_table(ui: &mut Ui, props: &TableProps<'_>, state: &mut TableState, theme: &Theme) -> TableResponse {
    let mut response = TableResponse::default();
    let total = props.rows.len();
    let range = state.range(total);
    let num_columns = props.columns.len() + usize::from(props.action.is_some());

    ScrollArea::vertical()
        .id_salt(props.id)
        .max_height(MAX_HEIGHT)
        .show(ui, |ui| {
            egui::Grid::new(props.id)
                .num_columns(num_columns)
                .spacing([16.0, 8.0])
                .striped(true)
                .show(ui, |ui| {
                    for column in props.columns {
                        aligned(ui, column.align_right, column.min_width, |ui| {
                            ui.label(RichText::new(column.header).strong().color(theme.colors.text_secondary));
                        });
                    }
                    if props.action.is_some() {
                        ui.label("");
                    }
                    ui.end_row();

                    if props.loading {
                        for column in props.columns {
                            skeleton(ui, column.min_width.max(60.0), theme);
                        }
                        if props.action.is_some() {
                            skeleton(ui, 60.0, theme);
                        }
                        ui.end_row();
                        return;
                    }

                    for index in range.clone() {
                        let row = &props.rows[index];
                        let mut row_clicked = false;

                        for column in props.columns {
                            let Some(value) = row.get(column.id) else {
                                ui.label("");
                                continue;
                            };
                            aligned(ui, column.align_right, column.min_width, |ui| match value.display(column) {
                                CellText::Plain(text) => {
                                    let label = Label::new(RichText::new(text).monospace()).sense(Sense::click());
                                    if ui.add(label).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                                        row_clicked = true;
                                    }
                                }
                                CellText::Link { text, address } => {
                                    if ui.link(text).on_hover_text(&address).clicked() {
                                        response.open_address = Some(address);
                                    }
                                }
                            });
                        }

                        if let Some(label) = props.action {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                if ui.button(label).clicked() {
                                    response.action = Some(index);
                                }
                            });
                        }
                        ui.end_row();

                        if row_clicked {
                            response.navigate = row_target(props.rows, index, props.uid_key);
                        }
                    }
                });
        });

    render_pagination(ui, state, total);
    response
}

fn aligned(ui: &mut Ui, right: bool, min_width: f32, add: impl FnOnce(&mut Ui)) {
    let layout = if right {
        Layout::right_to_left(Align::Center)
    } else {
        Layout::left_to_right(Align::Center)
    };
    ui.allocate_ui_with_layout(Vec2::new(min_width, 0.0), layout, |ui| {
        ui.set_min_width(min_width);
        add(ui);
    });
}

fn skeleton(ui: &mut Ui, width: f32, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 18.0), Sense::hover());
    ui.painter().rect_filled(rect, 4.0, theme.colors.border);
}

fn render_pagination(ui: &mut Ui, state: &mut TableState, total: usize) {
    ui.add_space(4.0);
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        if ui.add_enabled(state.has_next(total), egui::Button::new("▶")).clicked() {
            state.set_page(state.page() + 1);
        }
        if ui.add_enabled(state.has_previous(), egui::Button::new("◀")).clicked() {
            state.set_page(state.page() - 1);
        }
        ui.label(state.label(total));

        let mut rows_per_page = state.rows_per_page();
        egui::ComboBox::from_id_salt(ui.id().with("rows_per_page"))
            .selected_text(rows_per_page.to_string())
            .width(60.0)
            .show_ui(ui, |ui| {
                for option in ROWS_PER_PAGE_OPTIONS {
                    ui.selectable_value(&mut rows_per_page, option, option.to_string());
                }
            });
        if rows_per_page != state.rows_per_page() {
            state.set_rows_per_page(rows_per_page);
        }
        ui.label("Rows per page:");
    });
}
