//! # Section Skeleton
//!
//! Page section with optional breadcrumbs, title, chain chip, description and
//! an action slot to the right of the heading.
//!
//! ```text
//! Pools / USDC Lending Pool                       breadcrumbs
//! USDC Lending Pool  (ETH Ethereum)     [action]  title + chip
//! Deposit USDC and earn yield.                    description
//! ──────────────────────────────────────────────
//! body
//! ```

use egui::{Align, Frame, Layout, Margin, RichText, Sense, Stroke, Ui, Vec2};
use shared::chain::chain_info;
use shared::ChainId;

use crate::ui::theme::Theme;

pub const DESCRIPTION_SIZE: f32 = 18.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub path: String,
}

impl Crumb {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

#[derive(Default)]
pub struct SectionProps<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub breadcrumbs: Option<&'a [Crumb]>,
    pub loading: bool,
    pub chain_id: Option<ChainId>,
}

/// Anchor id: lowercase title with spaces as dashes.
pub fn section_id(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Chip text: the chain's name, or its numeric id when unknown.
pub fn chain_chip_label(chain_id: ChainId) -> String {
    chain_info(chain_id)
        .map(|chain| chain.name.to_string())
        .unwrap_or_else(|| chain_id.to_string())
}

/// Render a section. Returns the path of a clicked breadcrumb.
pub fn render_section<A, B>(ui: &mut Ui, props: &SectionProps<'_>, theme: &Theme, action: A, body: B) -> Option<String>
where
    A: FnOnce(&mut Ui),
    B: FnOnce(&mut Ui),
{
    let mut navigate = None;
    let id = props.title.map(section_id).unwrap_or_else(|| "section".to_string());

    ui.push_id(id, |ui| {
        if let (Some(crumbs), Some(title)) = (props.breadcrumbs, props.title) {
            ui.horizontal(|ui| {
                for crumb in crumbs {
                    if ui.link(&crumb.label).clicked() {
                        navigate = Some(crumb.path.clone());
                    }
                    ui.label(RichText::new("/").color(theme.colors.text_secondary));
                }
                ui.label(RichText::new(title).color(theme.colors.text_secondary));
            });
            ui.add_space(8.0);
        }

        if props.title.is_some() || props.description.is_some() {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    if let Some(title) = props.title {
                        ui.horizontal(|ui| {
                            if props.loading {
                                let (rect, _) = ui.allocate_exact_size(Vec2::new(300.0, 36.0), Sense::hover());
                                ui.painter().rect_filled(rect, 4.0, theme.colors.border);
                            } else {
                                ui.label(RichText::new(title).font(theme.h2()));
                            }
                            if let Some(chain_id) = props.chain_id {
                                render_chip(ui, &chain_chip_label(chain_id), theme);
                            }
                        });
                    }
                    if let Some(description) = props.description {
                        ui.label(RichText::new(description).size(DESCRIPTION_SIZE));
                    }
                });
                ui.with_layout(Layout::right_to_left(Align::Min), action);
            });
            ui.add_space(16.0);
        }

        body(ui);
    });

    navigate
}

fn render_chip(ui: &mut Ui, label: &str, theme: &Theme) {
    Frame::new()
        .stroke(Stroke::new(1.0, theme.colors.primary))
        .corner_radius(12.0)
        .inner_margin(Margin::symmetric(10, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().color(theme.colors.primary));
        });
}
