//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits (`LendingSdk`, `ContractService`, `WalletConnector`, `Notifier`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use dashboard::core::service::LendingSdk;
//!
//! // In production: HTTP gateway client
//! let sdk: Arc<dyn LendingSdk> = Arc::new(dashboard::services::api::ApiClient::new(&config));
//!
//! // In tests: mock implementation with call counters
//! let sdk: Arc<dyn LendingSdk> = Arc::new(MockSdk::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{ContractService, LendingSdk, Notifier, ToastId, WalletConnector};
