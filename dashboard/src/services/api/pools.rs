//! # Pool Endpoints
//!
//! Read-only lending pool queries.

use alloy_primitives::Address;
use shared::{LendingOptions, Pool, Redemption};

use super::client::{decode, with_api_key, ApiClient};
use crate::core::error::{AppError, Result};

/// Get every lending pool on the chain in `opts`.
#[tracing::instrument(skip(client, opts), fields(chain_id = opts.chain_id))]
pub async fn get_lending_pools(client: &ApiClient, opts: &LendingOptions) -> Result<Vec<Pool>> {
    let start = std::time::Instant::now();
    let url = client.url("/api/pools");

    tracing::debug!("Fetching lending pools");

    let request = client.client.get(&url).query(&[("chain_id", opts.chain_id)]);
    let response = with_api_key(request, opts).send().await.map_err(|e| {
        tracing::error!(error = %e, url = %url, "Pool list network error");
        AppError::from(e)
    })?;

    let pools: Vec<Pool> = decode(response, false).await?;
    tracing::debug!(
        count = pools.len(),
        duration_ms = start.elapsed().as_millis(),
        "Lending pools fetched"
    );
    Ok(pools)
}

/// Get one lending pool by contract address.
#[tracing::instrument(skip(client, opts), fields(pool = %address, chain_id = opts.chain_id))]
pub async fn get_lending_pool(client: &ApiClient, address: Address, opts: &LendingOptions) -> Result<Pool> {
    let start = std::time::Instant::now();
    let url = client.url(&format!("/api/pools/{}", address));

    let request = client.client.get(&url).query(&[("chain_id", opts.chain_id)]);
    let response = with_api_key(request, opts).send().await.map_err(|e| {
        tracing::error!(error = %e, url = %url, "Pool fetch network error");
        AppError::from(e)
    })?;

    let pool: Pool = decode(response, false).await?;
    tracing::debug!(
        name = %pool.name,
        duration_ms = start.elapsed().as_millis(),
        "Lending pool fetched"
    );
    Ok(pool)
}

/// Get redemptions requested by `account` that have not been claimed yet.
#[tracing::instrument(skip(client, opts), fields(pool = %pool, account = %account))]
pub async fn get_available_redemptions(
    client: &ApiClient,
    pool: Address,
    account: Address,
    opts: &LendingOptions,
) -> Result<Vec<Redemption>> {
    let url = client.url(&format!("/api/pools/{}/redemptions", pool));

    let request = client
        .client
        .get(&url)
        .query(&[("account", account.to_string()), ("chain_id", opts.chain_id.to_string())]);
    let response = with_api_key(request, opts).send().await.map_err(|e| {
        tracing::error!(error = %e, url = %url, "Redemption fetch network error");
        AppError::from(e)
    })?;

    let redemptions: Vec<Redemption> = decode(response, false).await?;
    tracing::debug!(count = redemptions.len(), "Redemptions fetched");
    Ok(redemptions)
}
