//! # Supported Chains
//!
//! Static table of EVM networks the dashboard knows how to label. Lookups by
//! unknown id fall back to `"Unknown"` rather than failing, since the wallet may
//! sit on any network.

use serde::{Deserialize, Serialize};

/// EIP-155 chain identifier.
pub type ChainId = u64;

/// Display metadata for a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainInfo {
    pub id: ChainId,
    pub name: &'static str,
    /// Short label rendered in place of a chain icon
    pub short_name: &'static str,
    pub explorer_url: &'static str,
}

/// Networks offered in the chain dropdown.
pub const SUPPORTED_CHAINS: &[ChainInfo] = &[
    ChainInfo {
        id: 1,
        name: "Ethereum",
        short_name: "ETH",
        explorer_url: "https://etherscan.io",
    },
    ChainInfo {
        id: 10,
        name: "Optimism",
        short_name: "OP",
        explorer_url: "https://optimistic.etherscan.io",
    },
    ChainInfo {
        id: 137,
        name: "Polygon",
        short_name: "POL",
        explorer_url: "https://polygonscan.com",
    },
    ChainInfo {
        id: 8453,
        name: "Base",
        short_name: "BASE",
        explorer_url: "https://basescan.org",
    },
    ChainInfo {
        id: 42161,
        name: "Arbitrum One",
        short_name: "ARB",
        explorer_url: "https://arbiscan.io",
    },
    ChainInfo {
        id: 11155111,
        name: "Sepolia",
        short_name: "SEP",
        explorer_url: "https://sepolia.etherscan.io",
    },
];

/// Wire shape used when a chain selection is exchanged with the wallet bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSelection {
    pub chain_id: ChainId,
}

pub fn chain_info(id: ChainId) -> Option<&'static ChainInfo> {
    SUPPORTED_CHAINS.iter().find(|chain| chain.id == id)
}

pub fn is_supported(id: ChainId) -> bool {
    chain_info(id).is_some()
}

/// Human-readable chain name, `"Unknown"` for ids outside the table.
pub fn chain_name(id: ChainId) -> &'static str {
    chain_info(id).map(|chain| chain.name).unwrap_or("Unknown")
}

/// Block explorer link for a transaction hash, if the chain is known.
pub fn explorer_tx_url(id: ChainId, hash: &str) -> Option<String> {
    chain_info(id).map(|chain| format!("{}/tx/{}", chain.explorer_url, hash))
}

pub fn explorer_address_url(id: ChainId, address: &str) -> Option<String> {
    chain_info(id).map(|chain| format!("{}/address/{}", chain.explorer_url, address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_lookup() {
        assert_eq!(chain_name(1), "Ethereum");
        assert_eq!(chain_name(42161), "Arbitrum One");
        assert_eq!(chain_name(999_999), "Unknown");
        assert!(is_supported(8453));
        assert!(!is_supported(56));
    }

    #[test]
    fn test_explorer_url() {
        assert_eq!(
            explorer_tx_url(1, "0xabc").as_deref(),
            Some("https://etherscan.io/tx/0xabc")
        );
        assert_eq!(explorer_tx_url(999_999, "0xabc"), None);
        assert_eq!(
            explorer_address_url(8453, "0xdef").as_deref(),
            Some("https://basescan.org/address/0xdef")
        );
    }

    #[test]
    fn test_chain_ids_unique() {
        for (i, a) in SUPPORTED_CHAINS.iter().enumerate() {
            for b in &SUPPORTED_CHAINS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
