//! Shape predicates shared by the conformance assertions.
//!
//! Ethereum JSON-RPC encodes quantities and binary data as `0x`-prefixed
//! hex strings; the suite checks shapes only, never semantics.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Non-empty hex quantity, e.g. a chain id, balance, or gas value.
pub static HEX_QUANTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]+$").unwrap());

/// Hex data, possibly empty (`0x` alone is valid, e.g. absent contract code).
pub static HEX_DATA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]*$").unwrap());

/// 20-byte account address.
pub static ADDRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap());

/// 32-byte hash (block hash, transaction hash, storage value).
pub static HASH32: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{64}$").unwrap());

/// Decimal string, as returned by `net_version`.
pub static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

pub fn is_quantity(value: &Value) -> bool {
    value.as_str().is_some_and(|s| HEX_QUANTITY.is_match(s))
}

pub fn is_data(value: &Value) -> bool {
    value.as_str().is_some_and(|s| HEX_DATA.is_match(s))
}

pub fn is_address(value: &Value) -> bool {
    value.as_str().is_some_and(|s| ADDRESS.is_match(s))
}

pub fn is_hash32(value: &Value) -> bool {
    value.as_str().is_some_and(|s| HASH32.is_match(s))
}

pub fn is_decimal(value: &Value) -> bool {
    value.as_str().is_some_and(|s| DECIMAL.is_match(s))
}

/// Decode a hex quantity into a number where a test needs to compare
/// magnitudes. Returns `None` for anything that is not a `0x` quantity
/// fitting in 64 bits.
pub fn parse_quantity(value: &Value) -> Option<u64> {
    let digits = value.as_str()?.strip_prefix("0x")?;
    u64::from_str_radix(digits, 16).ok()
}
