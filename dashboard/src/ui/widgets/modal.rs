//! # Modal
//!
//! Trigger button plus a fixed-width window with a title and a close button.
//!
//! The window closes when the user dismisses it, when `close_when` turns true
//! (rising edge only), or when a background task requests it through the
//! handle from [`ModalState::closer`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use egui::{Align, Button, Layout, RichText, Stroke, Ui};

use crate::ui::theme::Theme;

pub const MODAL_WIDTH: f32 = 500.0;

#[derive(Debug, Default)]
pub struct ModalState {
    open: bool,
    last_close_when: bool,
    close_requested: Arc<AtomicBool>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.close_requested.store(false, Ordering::Relaxed);
    }

    /// Closes the modal from any thread on the next frame
    pub fn closer(&self) -> impl Fn() + Send + Sync + 'static {
        let flag = self.close_requested.clone();
        move || flag.store(true, Ordering::Relaxed)
    }

    /// Apply `close_when` and pending close requests. Returns true when the
    /// modal was open and has just been closed.
    pub fn sync(&mut self, close_when: bool) -> bool {
        let rising = close_when && !self.last_close_when;
        self.last_close_when = close_when;
        let requested = self.close_requested.swap(false, Ordering::Relaxed);

        if self.open && (rising || requested) {
            self.open = false;
            return true;
        }
        false
    }

    fn dismiss(&mut self) {
        self.open = false;
    }
}

/// Render the trigger and, while open, the window.
///
/// `on_close` runs once for every transition to closed.
pub fn render_modal<F, C>(
    ui: &mut Ui,
    state: &mut ModalState,
    trigger: &str,
    title: &str,
    close_when: bool,
    theme: &Theme,
    on_close: C,
    contents: F,
) where
    F: FnOnce(&mut Ui),
    C: FnOnce(),
{
    let trigger_button = Button::new(RichText::new(trigger).color(theme.colors.primary))
        .fill(egui::Color32::TRANSPARENT)
        .stroke(Stroke::new(1.0, theme.colors.primary));
    if ui.add(trigger_button).clicked() {
        state.open();
    }

    let mut closed = state.sync(close_when);

    if state.is_open() {
        let mut dismissed = false;

        egui::Window::new(title)
            .id(ui.id().with(("modal", title)))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .default_width(MODAL_WIDTH)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ui.ctx(), |ui| {
                ui.set_width(MODAL_WIDTH);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(title).font(theme.h2()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("✕").on_hover_text("Close").clicked() {
                            dismissed = true;
                        }
                    });
                });
                ui.separator();
                contents(ui);
            });

        if dismissed {
            state.dismiss();
            closed = true;
        }
    }

    if closed {
        on_close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_on_rising_edge() {
        let mut modal = ModalState::default();
        modal.open();

        assert!(!modal.sync(false));
        assert!(modal.sync(true));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_stale_close_when_does_not_close_reopened_modal() {
        let mut modal = ModalState::default();
        modal.open();
        assert!(modal.sync(true));

        // Still true from the previous success; reopening must stick
        modal.open();
        assert!(!modal.sync(true));
        assert!(modal.is_open());
    }

    #[test]
    fn test_closer_from_another_thread() {
        let mut modal = ModalState::default();
        modal.open();

        let close = modal.closer();
        std::thread::spawn(move || close()).join().unwrap();

        assert!(modal.sync(false));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_closed_modal_ignores_requests() {
        let mut modal = ModalState::default();
        modal.closer()();
        assert!(!modal.sync(true));

        // The request was consumed while closed
        modal.open();
        assert!(!modal.sync(false));
    }
}
