//! # Contract Endpoints
//!
//! Contract reads, simulations and receipt polling. The gateway encodes the
//! ABI; calls travel as function name plus typed arguments.

use alloy_primitives::{TxHash, U256};
use reqwest::StatusCode;
use shared::{ChainId, PreparedCall, ReadContractRequest, ReadContractResponse, SimulateRequest, TxReceipt};

use super::client::{decode, ApiClient};
use crate::core::error::{AppError, Result};

/// Run a read-only call and return its result as text.
#[tracing::instrument(
    skip(client, request),
    fields(function = request.call.function_name(), address = %request.address, chain_id = request.chain_id)
)]
pub async fn read_contract(client: &ApiClient, request: ReadContractRequest) -> Result<String> {
    let url = client.url("/api/contracts/read");

    let response = client.client.post(&url).json(&request).send().await.map_err(|e| {
        tracing::error!(error = %e, "Contract read network error");
        AppError::from(e)
    })?;

    let body: ReadContractResponse = decode(response, true).await?;
    tracing::trace!(result = %body.result, "Contract read");
    Ok(body.result)
}

/// Read-only call returning a `uint256`.
pub async fn read_uint(client: &ApiClient, request: ReadContractRequest) -> Result<U256> {
    let function = request.call.function_name();
    let raw = read_contract(client, request).await?;
    raw.trim()
        .parse::<U256>()
        .map_err(|e| AppError::Api(format!("Invalid {} result {}: {}", function, raw, e)))
}

/// Dry-run a state-changing call and get back the request the wallet signs.
#[tracing::instrument(
    skip(client, request),
    fields(function = request.call.function_name(), address = %request.address, account = %request.account)
)]
pub async fn simulate_contract(client: &ApiClient, request: SimulateRequest) -> Result<PreparedCall> {
    let start = std::time::Instant::now();
    let url = client.url("/api/contracts/simulate");

    let response = client.client.post(&url).json(&request).send().await.map_err(|e| {
        tracing::error!(error = %e, "Simulation network error");
        AppError::from(e)
    })?;

    let prepared: PreparedCall = decode(response, true).await?;
    tracing::debug!(
        gas = ?prepared.gas,
        duration_ms = start.elapsed().as_millis(),
        "Simulation succeeded"
    );
    Ok(prepared)
}

/// Receipt of a mined transaction, `None` while it is still pending.
pub async fn get_receipt(client: &ApiClient, chain_id: ChainId, hash: TxHash) -> Result<Option<TxReceipt>> {
    let url = client.url(&format!("/api/transactions/{}/receipt", hash));

    let response = client
        .client
        .get(&url)
        .query(&[("chain_id", chain_id)])
        .send()
        .await
        .map_err(AppError::from)?;

    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    decode(response, true).await.map(Some)
}

/// Poll for the receipt until it arrives or the client's receipt timeout passes.
#[tracing::instrument(skip(client), fields(hash = %hash, chain_id = chain_id))]
pub async fn wait_for_transaction(client: &ApiClient, chain_id: ChainId, hash: TxHash) -> Result<TxReceipt> {
    let deadline = tokio::time::Instant::now() + client.receipt_timeout;
    let mut polls = 0u32;

    loop {
        polls += 1;
        match get_receipt(client, chain_id, hash).await {
            Ok(Some(receipt)) => {
                tracing::info!(
                    block = receipt.block_number,
                    status = ?receipt.status,
                    polls = polls,
                    "Receipt received"
                );
                return Ok(receipt);
            }
            Ok(None) => {}
            // Gateway hiccups while polling are retried until the deadline
            Err(AppError::Api(message)) => {
                tracing::debug!(error = %message, polls = polls, "Receipt poll failed");
            }
            Err(e) => return Err(e),
        }

        if tokio::time::Instant::now() + client.poll_interval > deadline {
            tracing::warn!(polls = polls, "Timed out waiting for receipt");
            return Err(AppError::Api(format!("Timed out waiting for transaction {}", hash)));
        }
        tokio::time::sleep(client.poll_interval).await;
    }
}
