//! # Reusable UI Widgets
//!
//! Widgets are free functions taking `&mut Ui` and the active [`Theme`](crate::ui::theme::Theme).
//! They return user intents instead of performing side effects, so screens
//! stay pure rendering code.

pub mod amount_display;
pub mod chain_dropdown;
pub mod deposit_modal;
pub mod header;
pub mod modal;
pub mod notifications;
pub mod section;
pub mod stat;
pub mod table;
pub mod web3_button;
pub mod withdraw_panel;

pub use amount_display::{render_amount, AmountDisplay};
pub use modal::ModalState;
pub use notifications::NotificationManager;
pub use section::{render_section, Crumb, SectionProps};
pub use table::{CellValue, Column, Row, TableState};
pub use web3_button::{Web3ButtonMode, Web3Click};
