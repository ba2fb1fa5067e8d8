//! Contract read / simulate / receipt DTOs exchanged with the SDK gateway.
//!
//! The gateway owns ABI encoding. Calls are described here by function name and
//! typed arguments only.

use alloy_primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

use crate::chain::ChainId;

/// Read-only contract call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "function", content = "args", rename_all = "camelCase")]
pub enum ContractRead {
    /// ERC-20 `decimals()`
    Decimals,
    /// ERC-20 `symbol()`
    Symbol,
    /// Pool `lagDuration()`
    LagDuration,
    /// ERC-20 `allowance(owner, spender)`
    Allowance { owner: Address, spender: Address },
    /// Pool `previewDeposit(assets)`
    PreviewDeposit { assets: U256 },
    /// Pool `previewRedeem(shares)`
    PreviewRedeem { shares: U256 },
}

impl ContractRead {
    pub fn function_name(&self) -> &'static str {
        match self {
            ContractRead::Decimals => "decimals",
            ContractRead::Symbol => "symbol",
            ContractRead::LagDuration => "lagDuration",
            ContractRead::Allowance { .. } => "allowance",
            ContractRead::PreviewDeposit { .. } => "previewDeposit",
            ContractRead::PreviewRedeem { .. } => "previewRedeem",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadContractRequest {
    pub chain_id: ChainId,
    pub address: Address,
    pub call: ContractRead,
}

/// Read result; numbers arrive as decimal strings, strings verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadContractResponse {
    pub result: String,
}

/// State-changing pool or token call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "function", content = "args", rename_all = "camelCase")]
pub enum PoolCall {
    /// `deposit(assets, receiver)`
    Deposit { assets: U256, receiver: Address },
    /// `requestRedeem(shares, receiver, owner)`
    RequestRedeem {
        shares: U256,
        receiver: Address,
        owner: Address,
    },
    /// `claim(year, month, day, receiver)`
    Claim {
        year: U256,
        month: U256,
        day: U256,
        receiver: Address,
    },
    /// ERC-20 `approve(spender, amount)`
    Approve { spender: Address, amount: U256 },
}

impl PoolCall {
    pub fn function_name(&self) -> &'static str {
        match self {
            PoolCall::Deposit { .. } => "deposit",
            PoolCall::RequestRedeem { .. } => "requestRedeem",
            PoolCall::Claim { .. } => "claim",
            PoolCall::Approve { .. } => "approve",
        }
    }
}

/// Dry-run request for a [`PoolCall`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulateRequest {
    pub chain_id: ChainId,
    pub account: Address,
    /// Contract the call targets
    pub address: Address,
    pub call: PoolCall,
}

/// Simulated call ready to be handed to the wallet for signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedCall {
    pub chain_id: ChainId,
    pub account: Address,
    pub address: Address,
    pub call: PoolCall,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
    /// Encoded request as produced by the gateway, passed through untouched
    #[serde(default)]
    pub request: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Reverted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub transaction_hash: TxHash,
    pub status: TxStatus,
    pub block_number: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_names() {
        let claim = PoolCall::Claim {
            year: U256::from(2025u64),
            month: U256::from(1u64),
            day: U256::from(31u64),
            receiver: Address::ZERO,
        };
        assert_eq!(claim.function_name(), "claim");
        assert_eq!(
            ContractRead::PreviewRedeem { shares: U256::ZERO }.function_name(),
            "previewRedeem"
        );
    }

    #[test]
    fn test_call_wire_format() {
        let call = PoolCall::RequestRedeem {
            shares: U256::from(1u64),
            receiver: Address::ZERO,
            owner: Address::ZERO,
        };
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["function"], "requestRedeem");
        assert!(value["args"]["shares"].is_string());

        let read = serde_json::to_value(ContractRead::LagDuration).unwrap();
        assert_eq!(read["function"], "lagDuration");
    }

    #[test]
    fn test_receipt_status() {
        let receipt: TxReceipt = serde_json::from_value(serde_json::json!({
            "transaction_hash": format!("0x{}", "ab".repeat(32)),
            "status": "reverted",
            "block_number": 12
        }))
        .unwrap();
        assert_eq!(receipt.status, TxStatus::Reverted);
    }
}
