//! Wire-payload schemas for the prediction endpoint
//!
//! A schema maps a raw JSON request body to the ordered feature row the
//! artifact expects, and renders the matching success response. The active
//! schema is selected by configuration, not by duplicated services.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{InferdError, Result};

/// Feature order the air-quality schema feeds to the artifact. `PM2.5` is
/// the model's literal column name; on the wire it travels as `PM2_5`
/// because a period is not a valid identifier there.
pub const AIR_QUALITY_FEATURES: [&str; 6] = ["PM2.5", "PM10", "SO2", "O3", "NO2", "CO"];

/// Input schema variant, selected via `INPUT_SCHEMA` or the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// Flat ordered numeric vector: `{"features": [..]}`
    Features,
    /// Six named pollutant concentrations in fixed order
    AirQuality,
}

impl FromStr for SchemaKind {
    type Err = InferdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "features" => Ok(SchemaKind::Features),
            "air_quality" | "aqi" => Ok(SchemaKind::AirQuality),
            other => Err(InferdError::InvalidInput(format!(
                "unknown input schema: {} (expected features or air_quality)",
                other
            ))),
        }
    }
}

impl SchemaKind {
    /// Parse a request body against this schema. Type errors (string where
    /// float expected, missing field) come back as serde messages for the
    /// caller to surface as a client error.
    pub fn parse(&self, body: serde_json::Value) -> serde_json::Result<WireInput> {
        match self {
            SchemaKind::Features => {
                serde_json::from_value::<FeaturesPayload>(body).map(WireInput::Features)
            }
            SchemaKind::AirQuality => {
                serde_json::from_value::<AirQualityPayload>(body).map(WireInput::AirQuality)
            }
        }
    }
}

/// Variant A: arbitrary-length ordered feature vector
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturesPayload {
    pub features: Vec<f64>,
}

/// Variant B: six named pollutant concentrations. Field names match the
/// wire identifiers exactly; `pm2_5` is echoed back under `PM2.5`.
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityPayload {
    #[serde(rename = "PM2_5")]
    pub pm2_5: f64,
    #[serde(rename = "PM10")]
    pub pm10: f64,
    #[serde(rename = "SO2")]
    pub so2: f64,
    #[serde(rename = "O3")]
    pub o3: f64,
    #[serde(rename = "NO2")]
    pub no2: f64,
    #[serde(rename = "CO")]
    pub co: f64,
}

impl AirQualityPayload {
    /// Feature row in [`AIR_QUALITY_FEATURES`] order
    pub fn row(&self) -> [f64; 6] {
        [self.pm2_5, self.pm10, self.so2, self.o3, self.no2, self.co]
    }

    /// Echo of the input under the model's literal column names
    pub fn echo(&self) -> serde_json::Value {
        json!({
            "PM2.5": self.pm2_5,
            "PM10": self.pm10,
            "SO2": self.so2,
            "O3": self.o3,
            "NO2": self.no2,
            "CO": self.co,
        })
    }
}

/// A validated request payload, ready to feed the artifact
#[derive(Debug, Clone)]
pub enum WireInput {
    Features(FeaturesPayload),
    AirQuality(AirQualityPayload),
}

impl WireInput {
    /// The ordered feature row for the artifact
    pub fn row(&self) -> Vec<f64> {
        match self {
            WireInput::Features(p) => p.features.clone(),
            WireInput::AirQuality(p) => p.row().to_vec(),
        }
    }

    /// Render the schema-specific success response for a prediction
    pub fn response(&self, prediction: f64) -> serde_json::Value {
        match self {
            WireInput::Features(_) => json!({ "prediction": prediction }),
            WireInput::AirQuality(p) => json!({
                "predicted_aqi": prediction,
                "input_data": p.echo(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_kind_from_str() {
        assert_eq!("features".parse::<SchemaKind>().unwrap(), SchemaKind::Features);
        assert_eq!("air_quality".parse::<SchemaKind>().unwrap(), SchemaKind::AirQuality);
        assert_eq!("AQI".parse::<SchemaKind>().unwrap(), SchemaKind::AirQuality);
        assert!("bogus".parse::<SchemaKind>().is_err());
    }

    #[test]
    fn test_parse_features() {
        let body = json!({"features": [1.0, 2.5, 3.0]});
        let input = SchemaKind::Features.parse(body).unwrap();
        assert_eq!(input.row(), vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn test_parse_features_rejects_strings() {
        let body = json!({"features": [1.0, "two"]});
        let err = SchemaKind::Features.parse(body).unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_parse_air_quality_row_order() {
        let body = json!({
            "PM2_5": 80.5, "PM10": 120.0, "SO2": 15.2,
            "O3": 45.1, "NO2": 30.0, "CO": 0.8,
        });
        let input = SchemaKind::AirQuality.parse(body).unwrap();
        assert_eq!(input.row(), vec![80.5, 120.0, 15.2, 45.1, 30.0, 0.8]);
    }

    #[test]
    fn test_parse_air_quality_missing_field() {
        let body = json!({"PM2_5": 80.5});
        assert!(SchemaKind::AirQuality.parse(body).is_err());
    }

    #[test]
    fn test_air_quality_echo_uses_literal_names() {
        let body = json!({
            "PM2_5": 80.5, "PM10": 120.0, "SO2": 15.2,
            "O3": 45.1, "NO2": 30.0, "CO": 0.8,
        });
        let input = SchemaKind::AirQuality.parse(body).unwrap();
        let response = input.response(42.0);
        assert_eq!(response["predicted_aqi"], 42.0);
        assert_eq!(response["input_data"]["PM2.5"], 80.5);
        assert!(response["input_data"].get("PM2_5").is_none());
    }

    #[test]
    fn test_features_response_shape() {
        let input = SchemaKind::Features.parse(json!({"features": [1.0]})).unwrap();
        let response = input.response(3.5);
        assert_eq!(response, json!({"prediction": 3.5}));
    }
}
