//! # Shared Utility Functions
//!
//! Display helpers used by every dashboard screen.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the dashboard's default lengths
//! - [`is_address`] - Validate `0x`-prefixed 20-byte hex addresses
//!
//! ## Number Formatting
//!
//! - [`format_number`] - Thousands separators (`1234567.5` → `"1,234,567.50"`)
//! - [`format_compact_number`] - Compact notation (`1234567` → `"1.2M"`)
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, format_compact_number};
//!
//! let address = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
//! assert_eq!(format_address(address, 6, 4), "0x71C7...976F");
//! assert_eq!(format_compact_number(1_250_000.0, false), "1.2M");
//! ```

use alloy_primitives::Address;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
/// assert_eq!(format_address(addr, 6, 4), "0x71C7...976F");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || !address.is_char_boundary(prefix_len)
        || !address.is_char_boundary(address_len - suffix_len)
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address as `0x` plus 4 hex digits, ellipsis, last 4 hex digits.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F"), "0x71C7...976F");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Whether `value` parses as a `0x`-prefixed 20-byte hex address.
pub fn is_address(value: &str) -> bool {
    parse_address(value).is_some()
}

pub fn parse_address(value: &str) -> Option<Address> {
    let value = value.trim();
    if !value.starts_with("0x") || value.len() != 42 {
        return None;
    }
    value.parse::<Address>().ok()
}

/// Format a number with thousands separators and a fixed number of decimals.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Compact notation with one fractional digit: `1.2K`, `3.4M`, `5.6B`, `7.8T`.
///
/// Values below 1000 keep up to two decimals. The trailing `.0` is dropped.
pub fn format_compact_number(value: f64, currency: bool) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    let prefix = if currency { "$" } else { "" };
    if !value.is_finite() {
        return format!("{}0", prefix);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    for (threshold, suffix) in UNITS {
        if abs >= threshold {
            // Truncate rather than round so 1999 never reads as 2K
            let scaled = (abs / threshold * 10.0 + 1e-9).floor() / 10.0;
            return format!("{}{}{}{}", sign, prefix, trim_fraction(format!("{:.1}", scaled)), suffix);
        }
    }

    let small = (abs * 100.0 + 1e-9).floor() / 100.0;
    format!("{}{}{}", sign, prefix, trim_fraction(format!("{:.2}", small)))
}

fn trim_fraction(formatted: String) -> String {
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
