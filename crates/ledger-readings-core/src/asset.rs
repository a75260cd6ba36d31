//! Asset readings: a geo-tagged environmental sample.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A geo/environmental reading.
///
/// Every value is kept as text so the ledger stores exactly what the caller
/// supplied, with no float formatting in between.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "lat")]
    pub latitude: String,
    #[serde(rename = "lng")]
    pub longitude: String,
    pub ph: String,
    #[serde(rename = "temp")]
    pub temperature: String,
    pub timestamp: String,
}

impl Asset {
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        ph: impl Into<String>,
        temperature: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            ph: ph.into(),
            temperature: temperature.into(),
            timestamp: timestamp.into(),
        }
    }
}

impl Record for Asset {
    const KIND: &'static str = "asset";
    const KEY_PREFIX: &'static str = "ASSET_";
    const FIELDS: &'static [&'static str] = &["lat", "lng", "ph", "temp", "timestamp"];
    const UPDATE_FIELDS: &'static [&'static str] = &["lat", "lng", "ph", "temp", "timestamp"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "lat" => Some(&self.latitude),
            "lng" => Some(&self.longitude),
            "ph" => Some(&self.ph),
            "temp" => Some(&self.temperature),
            "timestamp" => Some(&self.timestamp),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "lat" => Some(&mut self.latitude),
            "lng" => Some(&mut self.longitude),
            "ph" => Some(&mut self.ph),
            "temp" => Some(&mut self.temperature),
            "timestamp" => Some(&mut self.timestamp),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Asset::new("4.2", "23.1", "0.9", "39.1", "15/02/2020 15:05"),
            Asset::new("0.2", "3.1", "14", "34.1", "15/02/2020 15:05"),
            Asset::new("1.2", "1.1", "10", "32.1", "15/02/2020 15:05"),
            Asset::new("3.2", "19.1", "9", "29.1", "15/02/2020 15:05"),
        ]
    }
}
