//! Lending pool read models returned by the SDK gateway.

use alloy_primitives::{Address, U256};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amount::NormalizedAmount;
use crate::chain::ChainId;

/// Options forwarded with every SDK read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingOptions {
    pub chain_id: ChainId,
    /// RPC provider key, forwarded to the gateway when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Deposit asset of a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderlyingAsset {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

/// Lending pool as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub address: Address,
    pub name: String,
    /// Share token symbol
    pub symbol: String,
    /// Share token decimals
    pub decimals: u8,
    pub underlying: UnderlyingAsset,
    pub total_supply: NormalizedAmount,
    pub total_assets: NormalizedAmount,
    /// Annual percentage yield, in percent
    #[serde(default)]
    pub apy: f64,
    /// Redemption lag in seconds
    #[serde(default)]
    pub lag_duration: u64,
    pub chain_id: ChainId,
}

impl Pool {
    /// Identifier used in routes and table rows.
    pub fn uid(&self) -> String {
        self.address.to_string()
    }

    /// Redemption lag rounded down to whole days.
    pub fn lock_days(&self) -> u64 {
        self.lag_duration / 86_400
    }
}

/// A pending withdrawal request.
///
/// The date parts mirror the contract's `uint256` arguments and are carried
/// with 0 decimals so they can be passed to `claim` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redemption {
    pub amount: NormalizedAmount,
    pub year: NormalizedAmount,
    pub month: NormalizedAmount,
    pub day: NormalizedAmount,
    pub is_matured: bool,
    pub receiver: Address,
}

impl Redemption {
    /// Calendar date the redemption becomes claimable, if the parts form a valid date.
    pub fn maturity_date(&self) -> Option<NaiveDate> {
        let part = |value: &U256| u32::try_from(*value).ok();
        let year = i32::try_from(u32::try_from(self.year.raw).ok()?).ok()?;
        NaiveDate::from_ymd_opt(year, part(&self.month.raw)?, part(&self.day.raw)?)
    }

    /// Whether this redemption is for exactly `raw` units.
    pub fn matches(&self, raw: U256) -> bool {
        self.amount.raw == raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date_part(value: u64) -> NormalizedAmount {
        NormalizedAmount::from_raw(U256::from(value), 0)
    }

    fn redemption(year: u64, month: u64, day: u64) -> Redemption {
        Redemption {
            amount: NormalizedAmount::from_raw(U256::from(5_000_000u64), 6),
            year: date_part(year),
            month: date_part(month),
            day: date_part(day),
            is_matured: false,
            receiver: Address::ZERO,
        }
    }

    #[test]
    fn test_maturity_date() {
        let r = redemption(2025, 3, 14);
        assert_eq!(r.maturity_date(), NaiveDate::from_ymd_opt(2025, 3, 14));
        assert_eq!(r.year.normalized, "2025");
    }

    #[test]
    fn test_invalid_maturity_date() {
        assert_eq!(redemption(2025, 13, 1).maturity_date(), None);
        assert_eq!(redemption(2025, 2, 30).maturity_date(), None);
    }

    #[test]
    fn test_matches_exact_raw() {
        let r = redemption(2025, 1, 1);
        assert!(r.matches(U256::from(5_000_000u64)));
        assert!(!r.matches(U256::from(5_000_001u64)));
    }

    #[test]
    fn test_pool_json_roundtrip_uses_snake_case() {
        let json = serde_json::json!({
            "address": "0x1111111111111111111111111111111111111111",
            "name": "USDC Pool",
            "symbol": "lpUSDC",
            "decimals": 6,
            "underlying": {
                "address": "0x2222222222222222222222222222222222222222",
                "symbol": "USDC",
                "decimals": 6
            },
            "total_supply": { "raw": "0x3e8", "decimals": 6, "normalized": "0.001" },
            "total_assets": { "raw": "0x3e8", "decimals": 6, "normalized": "0.001" },
            "lag_duration": 172800,
            "chain_id": 1
        });
        let pool: Pool = serde_json::from_value(json).unwrap();
        assert_eq!(pool.underlying.symbol, "USDC");
        assert_eq!(pool.total_assets.raw, U256::from(1000u64));
        assert_eq!(pool.lock_days(), 2);
        assert_eq!(pool.apy, 0.0);
    }
}
