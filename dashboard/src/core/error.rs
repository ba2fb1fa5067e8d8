//! # Common Error Types
//!
//! Consolidated error handling for the dashboard.
//!
//! This module provides a centralized error type [`AppError`] that covers every
//! fallible call the dashboard makes against its collaborators.
//!
//! ## Error Categories
//!
//! - **Api**: SDK gateway communication errors (network, HTTP, JSON parsing)
//! - **Wallet**: Wallet bridge errors (not connected, chain switch, signing)
//! - **Contract**: Node / contract failures, message kept verbatim
//! - **State**: Application state errors (invalid transitions)
//! - **Validation**: Input validation errors (amounts, addresses)
//! - **Config**: Environment configuration errors
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use dashboard::core::error::AppError;
//!
//! fn require_account(account: Option<&str>) -> Result<&str, AppError> {
//!     account.ok_or_else(|| AppError::Wallet("No wallet connected".to_string()))
//! }
//! ```
//!
//! ## Contract Messages
//!
//! [`AppError::Contract`] displays its message unchanged. Transaction failure
//! classification (see [`crate::hooks::TxFailure`]) works on the raw node text,
//! e.g. `"execution reverted: insufficient balance"`, so no prefix is added.
//!
//! ## Error Conversion
//!
//! - `String` / `&str` → `AppError::Api`
//! - `reqwest::Error` → `AppError::Api`
//! - `AmountError` → `AppError::Validation`

use shared::AmountError;
use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use dashboard::core::error::AppError;
///
/// let api_err = AppError::Api("Connection timeout".to_string());
/// let contract_err = AppError::Contract("execution reverted: paused".to_string());
///
/// assert_eq!(api_err.to_string(), "API error: Connection timeout");
/// assert_eq!(contract_err.to_string(), "execution reverted: paused");
/// ```
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// SDK gateway communication error.
    ///
    /// Network failures, non-success HTTP status without a contract message,
    /// malformed JSON responses.
    #[error("API error: {0}")]
    Api(String),

    /// Wallet bridge error.
    ///
    /// Includes user rejections forwarded by the bridge, e.g.
    /// `"User rejected the request."`.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Contract or node error, displayed verbatim.
    #[error("{0}")]
    Contract(String),

    /// Application state error.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error (missing or malformed environment variables).
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Api(format!("Request timed out: {}", err))
        } else if err.is_decode() {
            AppError::Api(format!("Failed to parse response: {}", err))
        } else {
            AppError::Api(format!("Network error: {}", err))
        }
    }
}

impl From<AmountError> for AppError {
    fn from(err: AmountError) -> Self {
        AppError::Validation(err.to_string())
    }
}
