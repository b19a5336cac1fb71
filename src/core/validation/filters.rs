//! Reusable field filters
//!
//! These filters normalize payload values before they are validated.

use crate::core::error::{PharmacyError, PharmacyResult};

/// Filter: trim surrounding whitespace from an optional string
pub fn trim(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string())
}

/// Filter: round a number to the given number of decimal places
///
/// Values too large to scale are returned unchanged; at that magnitude an
/// `f64` has no fractional digits left to round.
pub fn round_decimals(value: Option<f64>, decimals: u32) -> Option<f64> {
    value.map(|num| {
        let factor = 10_f64.powi(decimals as i32);
        let scaled = num * factor;
        if scaled.is_finite() {
            scaled.round() / factor
        } else {
            num
        }
    })
}

/// Filter: drop repeated ids, keeping the first occurrence of each
pub fn dedup_ids(ids: Vec<i64>) -> Vec<i64> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Take a field that validation has already required
pub fn required<T>(value: Option<T>, field: &str) -> PharmacyResult<T> {
    value.ok_or_else(|| PharmacyError::invalid_field(field, "This field is required."))
}
