//! Sensor readings: a single value reported by a named device model.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A reading reported by a sensor.
///
/// Updates replace only `value`; the model and timestamp recorded when the
/// reading was created stay put.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    pub model: String,
    pub timestamp: String,
    pub value: String,
}

impl Sensor {
    pub fn new(
        model: impl Into<String>,
        timestamp: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            timestamp: timestamp.into(),
            value: value.into(),
        }
    }
}

impl Record for Sensor {
    const KIND: &'static str = "sensor";
    const KEY_PREFIX: &'static str = "SENSOR_";
    const FIELDS: &'static [&'static str] = &["model", "timestamp", "value"];
    const UPDATE_FIELDS: &'static [&'static str] = &["value"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "model" => Some(&self.model),
            "timestamp" => Some(&self.timestamp),
            "value" => Some(&self.value),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "model" => Some(&mut self.model),
            "timestamp" => Some(&mut self.timestamp),
            "value" => Some(&mut self.value),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Sensor::new("DHT11", "15/02/2020 15:05", "24.0"),
            Sensor::new("DHT22", "15/02/2020 15:05", "23.6"),
            Sensor::new("BME280", "15/02/2020 15:06", "1013.2"),
            Sensor::new("BMP180", "15/02/2020 15:06", "1012.8"),
            Sensor::new("DS18B20", "15/02/2020 15:07", "19.4"),
            Sensor::new("SHT31", "15/02/2020 15:07", "41.0"),
            Sensor::new("MQ-135", "15/02/2020 15:08", "412"),
            Sensor::new("TSL2561", "15/02/2020 15:08", "320"),
            Sensor::new("HC-SR04", "15/02/2020 15:09", "1.27"),
        ]
    }
}
