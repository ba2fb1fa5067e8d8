//! Headline figure with a unit caption, used in the stats rows.

use egui::{Frame, Margin, RichText, Stroke, Ui};

use crate::ui::theme::{Theme, H2_SIZE};

pub fn render_stat(ui: &mut Ui, label: &str, value: &str, unit: Option<&str>, outlined: bool, theme: &Theme) {
    let body = |ui: &mut Ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small().color(theme.colors.text_secondary));
            ui.horizontal(|ui| {
                ui.label(RichText::new(value).monospace().size(H2_SIZE * 0.6));
                if let Some(unit) = unit {
                    ui.label(RichText::new(unit).color(theme.colors.text_secondary));
                }
            });
        });
    };

    if outlined {
        Frame::group(ui.style())
            .stroke(Stroke::new(2.0, theme.colors.border))
            .inner_margin(Margin::same(12))
            .show(ui, body);
    } else {
        body(ui);
    }
}
