//! Contract configuration.

use ledger_readings_core::{DecodeMode, Record};
use serde::{Deserialize, Serialize};

/// What `updateReading` does when the key holds no record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRecordPolicy {
    /// Fail with [`ContractError::NotFound`](crate::ContractError::NotFound).
    #[default]
    Reject,
    /// Start from the zero-valued record and apply the update to it. Fields
    /// outside the update set are written as empty strings.
    CreateFromBlank,
}

/// Index bounds for the range aggregator.
///
/// The ledger scans keys in byte order, not numeric order, so the scanned
/// range is the narrowest lexicographic span `[<prefix><low>, <prefix><high>]`
/// holding every index in `first_index..=last_index`. The span can also hold
/// keys outside the numeric bounds: with the defaults `SENSOR_1000` is listed
/// while `SENSOR_9990` is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanBounds {
    pub first_index: u64,
    pub last_index: u64,
}

impl ScanBounds {
    /// Start and end keys for schema `R`, or `None` when the bounds are
    /// inverted and nothing should be scanned.
    pub fn keys<R: Record>(&self) -> Option<(String, String)> {
        if self.first_index > self.last_index {
            return None;
        }
        let (low, high) = lexicographic_span(self.first_index, self.last_index);
        Some((R::key_for(low), R::key_for(high)))
    }
}

/// The indices in `first..=last` whose decimal text sorts first and last.
///
/// Within one digit count text order matches numeric order, so each width
/// contributes its numeric minimum and maximum.
fn lexicographic_span(first: u64, last: u64) -> (u64, u64) {
    let mut low = first;
    let mut high = first;

    for width in digits(first)..=digits(last) {
        let floor = if width == 1 { 0 } else { 10u64.pow(width - 1) };
        let ceil = 10u64.checked_pow(width).map_or(u64::MAX, |p| p - 1);

        let lo = first.max(floor);
        let hi = last.min(ceil);
        if lo.to_string() < low.to_string() {
            low = lo;
        }
        if hi.to_string() > high.to_string() {
            high = hi;
        }
    }

    (low, high)
}

fn digits(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

impl Default for ScanBounds {
    fn default() -> Self {
        Self {
            first_index: 0,
            last_index: 999,
        }
    }
}

/// Configuration for a [`Contract`](crate::Contract).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// How stored values are decoded.
    pub decode_mode: DecodeMode,
    /// Behavior of `updateReading` on a missing key.
    pub missing_on_update: MissingRecordPolicy,
    /// Range scanned by `getReading`.
    pub scan: ScanBounds,
}

impl ContractConfig {
    /// Settings matching ledgers written by older deployments: lenient
    /// decoding and updates that create missing records from blank.
    pub fn legacy() -> Self {
        Self {
            decode_mode: DecodeMode::Lenient,
            missing_on_update: MissingRecordPolicy::CreateFromBlank,
            scan: ScanBounds::default(),
        }
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
