//! # API Client
//!
//! HTTP client for the lending SDK gateway.

use std::time::Duration;

use alloy_primitives::{Address, TxHash, U256};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    ChainId, ContractRead, ErrorResponse, LendingOptions, Pool, PreparedCall, ReadContractRequest,
    Redemption, SimulateRequest, TxReceipt,
};

use crate::config::DashboardConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{ContractService, LendingSdk};

/// Header carrying the RPC provider key to the gateway
pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the SDK gateway.
///
/// Holds one pooled `reqwest::Client`; cloning the struct shares the pool.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    /// Delay between receipt polls
    pub(crate) poll_interval: Duration,
    /// Give up waiting for a receipt after this long
    pub(crate) receipt_timeout: Duration,
}

impl ApiClient {
    /// Create a client for the gateway at `config.api_url`.
    ///
    /// Requests time out after 10 seconds so a stalled gateway never freezes a task.
    pub fn new(config: &DashboardConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            poll_interval: Duration::from_secs(2),
            receipt_timeout: Duration::from_secs(180),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a successful body, or turn `{ "error": "..." }` into an error.
///
/// `contract` selects [`AppError::Contract`] so node messages stay verbatim.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response, contract: bool) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, status = status.as_u16(), "Response parse error");
            AppError::Api(format!("Failed to parse response: {}", e))
        });
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed with status {}", status),
    };
    tracing::warn!(status = status.as_u16(), error = %message, "Gateway returned an error");

    if contract {
        Err(AppError::Contract(message))
    } else {
        Err(AppError::Api(message))
    }
}

/// Attach the optional provider key header.
pub(crate) fn with_api_key(request: reqwest::RequestBuilder, opts: &LendingOptions) -> reqwest::RequestBuilder {
    match &opts.api_key {
        Some(key) => request.header(API_KEY_HEADER, key),
        None => request,
    }
}

#[async_trait::async_trait]
impl LendingSdk for ApiClient {
    async fn get_lending_pool(&self, address: Address, opts: &LendingOptions) -> Result<Pool> {
        super::pools::get_lending_pool(self, address, opts).await
    }

    async fn get_lending_pools(&self, opts: &LendingOptions) -> Result<Vec<Pool>> {
        super::pools::get_lending_pools(self, opts).await
    }

    async fn get_available_redemptions(
        &self,
        pool: Address,
        account: Address,
        opts: &LendingOptions,
    ) -> Result<Vec<Redemption>> {
        super::pools::get_available_redemptions(self, pool, account, opts).await
    }
}

#[async_trait::async_trait]
impl ContractService for ApiClient {
    async fn decimals(&self, chain_id: ChainId, token: Address) -> Result<u8> {
        let raw = super::contracts::read_contract(self, read(chain_id, token, ContractRead::Decimals)).await?;
        raw.trim()
            .parse::<u8>()
            .map_err(|_| AppError::Api(format!("Invalid decimals value: {}", raw)))
    }

    async fn symbol(&self, chain_id: ChainId, token: Address) -> Result<String> {
        super::contracts::read_contract(self, read(chain_id, token, ContractRead::Symbol)).await
    }

    async fn lag_duration(&self, chain_id: ChainId, pool: Address) -> Result<U256> {
        super::contracts::read_uint(self, read(chain_id, pool, ContractRead::LagDuration)).await
    }

    async fn allowance(
        &self,
        chain_id: ChainId,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256> {
        let call = ContractRead::Allowance { owner, spender };
        super::contracts::read_uint(self, read(chain_id, token, call)).await
    }

    async fn preview_deposit(&self, chain_id: ChainId, pool: Address, assets: U256) -> Result<U256> {
        let call = ContractRead::PreviewDeposit { assets };
        super::contracts::read_uint(self, read(chain_id, pool, call)).await
    }

    async fn preview_redeem(&self, chain_id: ChainId, pool: Address, shares: U256) -> Result<U256> {
        let call = ContractRead::PreviewRedeem { shares };
        super::contracts::read_uint(self, read(chain_id, pool, call)).await
    }

    async fn simulate(&self, request: SimulateRequest) -> Result<PreparedCall> {
        super::contracts::simulate_contract(self, request).await
    }

    async fn wait_for_transaction(&self, chain_id: ChainId, hash: TxHash) -> Result<TxReceipt> {
        super::contracts::wait_for_transaction(self, chain_id, hash).await
    }
}

fn read(chain_id: ChainId, address: Address, call: ContractRead) -> ReadContractRequest {
    ReadContractRequest { chain_id, address, call }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = DashboardConfig {
            api_url: "http://localhost:4000/".to_string(),
            ..DashboardConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(client.url("/api/pools"), "http://localhost:4000/api/pools");
    }

    #[test]
    fn test_api_key_header_only_when_set() {
        let client = Client::new();
        let without = with_api_key(client.get("http://localhost/"), &LendingOptions::default())
            .build()
            .unwrap();
        assert!(without.headers().get(API_KEY_HEADER).is_none());

        let opts = LendingOptions {
            chain_id: 1,
            api_key: Some("secret".to_string()),
        };
        let with = with_api_key(client.get("http://localhost/"), &opts).build().unwrap();
        assert_eq!(with.headers().get(API_KEY_HEADER).unwrap(), "secret");
    }
}
