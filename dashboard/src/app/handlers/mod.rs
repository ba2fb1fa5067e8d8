//! # Action Handlers
//!
//! Handlers for [`UiAction`](crate::ui::UiAction)s, organized by domain.

pub mod navigation;
pub mod settings;
pub mod transactions;
pub mod wallet;
