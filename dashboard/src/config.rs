//! # Dashboard Configuration
//!
//! Configuration loaded from environment variables (and a `.env` file when
//! present). All values are validated on startup to fail fast if misconfigured.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DASHBOARD_API_URL` | `http://127.0.0.1:3001` | SDK gateway base URL |
//! | `DASHBOARD_WALLET_URL` | `http://127.0.0.1:3002` | Wallet bridge base URL |
//! | `DASHBOARD_API_KEY` | unset | RPC provider key forwarded to the SDK |
//! | `DASHBOARD_FALLBACK_CHAIN_ID` | `1` | Chain used when no wallet is connected |
//! | `DASHBOARD_PREVIEW_DELAY_MS` | `500` | Debounce before previewing an amount |
//! | `DASHBOARD_SUCCESS_RESET_MS` | `4000` | Delay before a successful form resets |
//! | `DASHBOARD_QUERY_STALE_SECS` | `30` | Age after which cached reads refetch |
//! | `DASHBOARD_DEV_MODE` | `0` | Log transaction hashes at info level |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use dashboard::config::{config, init_config};
//!
//! init_config().expect("invalid configuration");
//! let api_url = &config().api_url;
//! ```

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::Url;
use shared::ChainId;

use crate::core::error::{AppError, Result};

/// Dashboard configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// SDK gateway base URL (no trailing slash)
    pub api_url: String,

    /// Wallet bridge base URL (no trailing slash)
    pub wallet_url: String,

    /// RPC provider key passed through to the SDK
    pub api_key: Option<String>,

    /// Chain used for reads while no wallet is connected, and the chain the
    /// connect button asks the wallet to switch to
    pub fallback_chain_id: ChainId,

    /// Debounce delay for fee / output previews
    pub preview_delay: Duration,

    /// Delay before a successful transaction form resets
    pub success_reset: Duration,

    /// Cached reads older than this are refetched
    pub query_stale_time: Duration,

    /// Development mode: transaction hashes are logged
    pub dev_mode: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:3001".to_string(),
            wallet_url: "http://127.0.0.1:3002".to_string(),
            api_key: None,
            fallback_chain_id: 1,
            preview_delay: Duration::from_millis(500),
            success_reset: Duration::from_millis(4000),
            query_stale_time: Duration::from_secs(30),
            dev_mode: false,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_url = env::var("DASHBOARD_API_URL").unwrap_or(defaults.api_url);
        let wallet_url = env::var("DASHBOARD_WALLET_URL").unwrap_or(defaults.wallet_url);
        let api_key = env::var("DASHBOARD_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            wallet_url: wallet_url.trim_end_matches('/').to_string(),
            api_key,
            fallback_chain_id: parse_var("DASHBOARD_FALLBACK_CHAIN_ID", defaults.fallback_chain_id)?,
            preview_delay: Duration::from_millis(parse_var(
                "DASHBOARD_PREVIEW_DELAY_MS",
                defaults.preview_delay.as_millis() as u64,
            )?),
            success_reset: Duration::from_millis(parse_var(
                "DASHBOARD_SUCCESS_RESET_MS",
                defaults.success_reset.as_millis() as u64,
            )?),
            query_stale_time: Duration::from_secs(parse_var(
                "DASHBOARD_QUERY_STALE_SECS",
                defaults.query_stale_time.as_secs(),
            )?),
            dev_mode: env::var("DASHBOARD_DEV_MODE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.fallback_chain_id == 0 {
            return Err(AppError::Config(
                "DASHBOARD_FALLBACK_CHAIN_ID must be non-zero".to_string(),
            ));
        }

        for (name, value) in [
            ("DASHBOARD_API_URL", &self.api_url),
            ("DASHBOARD_WALLET_URL", &self.wallet_url),
        ] {
            let url = Url::parse(value)
                .map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", name, e)))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::Config(format!(
                    "{} must use http or https, got {}",
                    name,
                    url.scheme()
                )));
            }
        }

        Ok(())
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} must be a valid number: {}", name, e))),
        Err(_) => Ok(default),
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// Load `.env`, read and validate the environment, and store the result.
///
/// # Errors
///
/// Returns an error if a variable is malformed, validation fails, or the
/// config has already been initialized.
pub fn init_config() -> Result<&'static DashboardConfig> {
    dotenvy::dotenv().ok();

    let loaded = DashboardConfig::from_env()?;
    loaded.validate()?;

    CONFIG
        .set(loaded)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    Ok(config())
}

/// Get the global configuration, falling back to defaults if
/// [`init_config`] has not run (tests, tooling).
pub fn config() -> &'static DashboardConfig {
    CONFIG.get_or_init(DashboardConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.preview_delay, Duration::from_millis(500));
        assert_eq!(config.success_reset, Duration::from_secs(4));
    }

    #[test]
    fn test_zero_chain_rejected() {
        let config = DashboardConfig {
            fallback_chain_id: 0,
            ..DashboardConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_malformed_url_rejected() {
        let config = DashboardConfig {
            api_url: "not a url".to_string(),
            ..DashboardConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(msg)) if msg.contains("DASHBOARD_API_URL")));

        let config = DashboardConfig {
            wallet_url: "ftp://127.0.0.1".to_string(),
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_var_reports_name() {
        std::env::set_var("DASHBOARD_TEST_PARSE_VAR", "abc");
        let result: Result<u64> = parse_var("DASHBOARD_TEST_PARSE_VAR", 1);
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.starts_with("DASHBOARD_TEST_PARSE_VAR")));
        std::env::remove_var("DASHBOARD_TEST_PARSE_VAR");

        let result: Result<u64> = parse_var("DASHBOARD_TEST_PARSE_VAR_UNSET", 7);
        assert_eq!(result.ok(), Some(7));
    }
}
