//! # Async Tasks
//!
//! Background work started by the [`App`](crate::app::App) itself rather than
//! by a user action.

pub mod wallet;
