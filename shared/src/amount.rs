//! # Normalized Token Amounts
//!
//! Token quantities cross every boundary of the dashboard as a [`NormalizedAmount`]:
//! the raw on-chain integer (smallest unit), the token decimals, and the
//! human-readable decimal string shown to the user.
//!
//! ## Conversions
//!
//! - [`parse_units`] - `"100"` with 6 decimals → `100000000`
//! - [`format_units`] - `99950000` with 6 decimals → `"99.95"`
//!
//! ```rust
//! use shared::amount::NormalizedAmount;
//!
//! let amount = NormalizedAmount::from_input("100", 6);
//! assert_eq!(amount.raw.to_string(), "100000000");
//! assert_eq!(amount.normalized, "100");
//! ```

use alloy_primitives::utils::{self as units, ParseUnits, Unit};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decimals assumed when a token's metadata has not been read yet.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Errors produced while parsing a user-entered amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Input was empty or whitespace only
    #[error("amount is empty")]
    Empty,

    /// Input contained something other than digits and a single decimal point
    #[error("invalid amount: {0}")]
    InvalidDigits(String),

    /// Scaled value does not fit in 256 bits
    #[error("amount overflows 256 bits: {0}")]
    Overflow(String),

    #[error("unsupported token decimals: {0}")]
    UnsupportedDecimals(u8),
}

/// A token quantity carrying both its raw integer and display representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAmount {
    /// Amount in the token's smallest unit
    pub raw: U256,
    /// Token decimals used for the conversion
    pub decimals: u8,
    /// Human-readable decimal string (trailing zeros trimmed)
    pub normalized: String,
}

impl NormalizedAmount {
    /// Zero amount for a token with the given decimals.
    pub fn zero(decimals: u8) -> Self {
        Self {
            raw: U256::ZERO,
            decimals,
            normalized: "0".to_string(),
        }
    }

    /// Build from a raw on-chain integer.
    pub fn from_raw(raw: U256, decimals: u8) -> Self {
        Self {
            raw,
            decimals,
            normalized: format_units(raw, decimals),
        }
    }

    /// Parse a user-entered decimal string, rejecting malformed input.
    pub fn parse(input: &str, decimals: u8) -> Result<Self, AmountError> {
        let raw = parse_units(input, decimals)?;
        Ok(Self::from_raw(raw, decimals))
    }

    /// Lenient variant of [`NormalizedAmount::parse`] used for live input fields.
    ///
    /// Empty or malformed input normalizes to zero.
    pub fn from_input(input: &str, decimals: u8) -> Self {
        Self::parse(input, decimals).unwrap_or_else(|_| Self::zero(decimals))
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Lossy conversion for compact display and USD estimates.
    pub fn to_f64(&self) -> f64 {
        self.normalized.parse().unwrap_or(0.0)
    }
}

impl Default for NormalizedAmount {
    fn default() -> Self {
        Self::zero(DEFAULT_DECIMALS)
    }
}

impl std::fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Scale a decimal string into the token's smallest unit.
///
/// Fractional digits beyond `decimals` are truncated, never rounded.
pub fn parse_units(input: &str, decimals: u8) -> Result<U256, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    let unit = Unit::new(decimals).ok_or(AmountError::UnsupportedDecimals(decimals))?;

    let (int_part, frac_part) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) || (int_part.is_empty() && frac_part.is_empty()) {
        return Err(AmountError::InvalidDigits(trimmed.to_string()));
    }

    let frac_part = &frac_part[..frac_part.len().min(decimals as usize)];
    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };
    let overflow = || AmountError::Overflow(trimmed.to_string());

    let scaled = ParseUnits::parse_units(&format!("{int_part}.{frac_part}"), unit)
        .map_err(|_| overflow())?
        .get_absolute();

    // Scaling wraps instead of failing, which changes the integer part
    let whole = U256::from_str_radix(int_part, 10).map_err(|_| overflow())?;
    if scaled / unit.wei() != whole {
        return Err(overflow());
    }
    Ok(scaled)
}

/// Render a raw integer as a decimal string with trailing zeros trimmed.
pub fn format_units(raw: U256, decimals: u8) -> String {
    match units::format_units(raw, decimals) {
        Ok(formatted) => formatted.trim_end_matches('0').trim_end_matches('.').to_string(),
        // Beyond 77 decimals nothing but the raw integer is meaningful
        Err(_) => raw.to_string(),
    }
}
