//! Proptest generators for property-based testing.

use proptest::prelude::*;

use ledger_readings_core::{Asset, Record, Sensor};

/// Generate a field value: any printable text, including quotes and
/// non-ASCII, up to 24 chars.
pub fn field_value() -> impl Strategy<Value = String> {
    "\\PC{0,24}".prop_map(String::from)
}

/// Generate a decimal-looking reading such as `23.6` or `-0.25`.
pub fn decimal_text() -> impl Strategy<Value = String> {
    (any::<bool>(), 0u32..1000, 0u32..100).prop_map(|(negative, whole, frac)| {
        let sign = if negative { "-" } else { "" };
        format!("{}{}.{}", sign, whole, frac)
    })
}

/// Generate a timestamp in the `dd/mm/yyyy hh:mm` layout seed data uses.
pub fn timestamp() -> impl Strategy<Value = String> {
    (1u32..=28, 1u32..=12, 2000u32..2100, 0u32..24, 0u32..60)
        .prop_map(|(d, m, y, h, min)| format!("{:02}/{:02}/{} {:02}:{:02}", d, m, y, h, min))
}

/// Generate a non-empty caller-chosen key.
pub fn record_key() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_-]{0,15}".prop_map(String::from)
}

/// Generate a deterministic key for schema `R` inside the default scan range.
pub fn indexed_key<R: Record>() -> impl Strategy<Value = String> {
    (0u64..1000).prop_map(R::key_for)
}

/// Generate an asset reading with plausible values.
pub fn asset() -> impl Strategy<Value = Asset> {
    (
        decimal_text(),
        decimal_text(),
        decimal_text(),
        decimal_text(),
        timestamp(),
    )
        .prop_map(|(lat, lng, ph, temp, ts)| Asset::new(lat, lng, ph, temp, ts))
}

/// Generate a sensor reading with arbitrary text fields.
pub fn sensor() -> impl Strategy<Value = Sensor> {
    (field_value(), timestamp(), field_value())
        .prop_map(|(model, ts, value)| Sensor::new(model, ts, value))
}

/// Generate an argument count that is not `arity`.
pub fn wrong_arity(arity: usize) -> impl Strategy<Value = usize> {
    (0..arity + 4).prop_filter("must differ from the required count", move |n| *n != arity)
}
