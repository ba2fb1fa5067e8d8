//! # Notifications Widget
//!
//! Toasts for transaction progress. Short-lived toasts go through
//! `egui-notify`; loading toasts stay in the bottom-right corner until the
//! hook dismisses them or the user clicks their close button.

use std::time::Duration;

use egui::{Align2, Area, Frame, Id, RichText};
use egui_notify::Toasts;

use crate::core::service::Notifier;
use crate::services::{NotificationCenter, QueuedToast, ToastLevel};
use crate::ui::theme::Theme;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Move queued toasts from background tasks into egui-notify.
    pub fn pump(&mut self, center: &NotificationCenter) -> usize {
        let drained = center.drain();
        let count = drained.len();
        for QueuedToast { level, message } in drained {
            match level {
                ToastLevel::Success => self.success(message),
                ToastLevel::Info => self.info(message),
                ToastLevel::Warning => self.warning(message),
                ToastLevel::Error => self.error(message),
            }
        }
        count
    }

    /// Render queued and loading toasts.
    pub fn show(&mut self, ctx: &egui::Context, center: &NotificationCenter, theme: &Theme) {
        self.pump(center);
        self.toasts.show(ctx);

        let loading = center.active_loading();
        if loading.is_empty() {
            return;
        }

        Area::new(Id::new("loading_toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                for toast in &loading {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(RichText::new(&toast.message).color(theme.colors.text));
                            if ui.small_button("✕").on_hover_text("Dismiss").clicked() {
                                center.dismiss(toast.id);
                            }
                        });
                    });
                    ui.add_space(6.0);
                }
            });

        // Keep the spinner moving
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
