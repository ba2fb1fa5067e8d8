use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};

use crate::chain::ChainId;

/// Wallet bridge session: the connected account and its active chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSession {
    pub account: Option<Address>,
    pub chain_id: Option<ChainId>,
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}

/// Switch chain request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchChainRequest {
    pub chain_id: ChainId,
}

/// Write contract response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteContractResponse {
    pub hash: TxHash,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
