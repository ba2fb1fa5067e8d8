//! # Amount Display
//!
//! Monospace token amount with an optional symbol. In `round` mode the value
//! is shown in compact notation (`1.2M`) and the exact figure moves into a
//! hover tooltip.

use egui::{Align, Layout, Response, RichText, Ui};
use shared::format_compact_number;

use crate::ui::theme::Theme;

const DEFAULT_SIZE: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountDisplay<'a> {
    pub value: &'a str,
    pub symbol: Option<&'a str>,
    pub round: bool,
    pub size: Option<f32>,
    /// USD price of one unit; enables the caption
    pub usd_price: Option<f64>,
}

impl<'a> AmountDisplay<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            symbol: None,
            round: false,
            size: None,
            usd_price: None,
        }
    }

    pub fn symbol(mut self, symbol: &'a str) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub fn round(mut self) -> Self {
        self.round = true;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn usd(mut self, price: f64) -> Self {
        self.usd_price = Some(price);
        self
    }

    fn numeric(&self) -> f64 {
        self.value.trim().parse::<f64>().unwrap_or(0.0)
    }

    /// Text of the amount itself, without the symbol
    pub fn text(&self) -> String {
        if self.round {
            format_compact_number(self.numeric(), false)
        } else {
            self.value.to_string()
        }
    }

    /// Exact value on hover, only for rounded non-zero amounts
    pub fn tooltip(&self) -> Option<&'a str> {
        if !self.round || self.value == "0" || self.value == "0.0" {
            return None;
        }
        Some(self.value)
    }

    /// `$1.2K`-style caption; hidden without a non-zero price
    pub fn usd_caption(&self) -> Option<String> {
        let price = self.usd_price.filter(|price| *price != 0.0 && price.is_finite())?;
        Some(format_compact_number(self.numeric() * price, true))
    }
}

/// Render right-aligned, the way amounts line up in tables and stat rows.
pub fn render_amount(ui: &mut Ui, amount: &AmountDisplay<'_>, theme: &Theme) -> Response {
    let size = amount.size.unwrap_or(DEFAULT_SIZE);

    let inner = ui.with_layout(Layout::top_down(Align::Max), |ui| {
        let row = ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(amount.text()).monospace().size(size));
            if let Some(symbol) = amount.symbol {
                ui.label(RichText::new(symbol).size(size));
            }
        });

        if let Some(caption) = amount.usd_caption() {
            ui.label(RichText::new(caption).small().color(theme.colors.text_secondary));
        }

        row.response
    });

    match amount.tooltip() {
        Some(exact) => inner.inner.on_hover_text(exact),
        None => inner.inner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_amount_is_verbatim() {
        let amount = AmountDisplay::new("1234567.891").symbol("USDC");
        assert_eq!(amount.text(), "1234567.891");
        assert_eq!(amount.tooltip(), None);
    }

    #[test]
    fn test_round_uses_compact_notation() {
        let amount = AmountDisplay::new("1234567.891").round();
        assert_eq!(amount.text(), "1.2M");
        assert_eq!(amount.tooltip(), Some("1234567.891"));
    }

    #[test]
    fn test_zero_has_no_tooltip() {
        assert_eq!(AmountDisplay::new("0").round().tooltip(), None);
        assert_eq!(AmountDisplay::new("0.0").round().tooltip(), None);
        assert_eq!(AmountDisplay::new("0").round().text(), "0");
    }

    #[test]
    fn test_usd_caption() {
        let amount = AmountDisplay::new("2500").usd(2.0);
        assert_eq!(amount.usd_caption().as_deref(), Some("$5K"));

        assert_eq!(AmountDisplay::new("2500").usd_caption(), None);
        assert_eq!(AmountDisplay::new("2500").usd(0.0).usd_caption(), None);
    }

    #[test]
    fn test_garbage_counts_as_zero() {
        assert_eq!(AmountDisplay::new("abc").round().text(), "0");
    }
}
