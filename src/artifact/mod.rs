//! Model artifact loading and prediction
//!
//! The artifact is a serialized linear regression model: an intercept, a
//! coefficient vector, and (optionally) the feature names defining the
//! expected input order. It is loaded once at startup, validated, and held
//! immutable for the lifetime of the process. No retry, no reload-on-change,
//! no hot-swap.

use std::path::Path;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{InferdError, Result};

/// A pre-trained linear regression artifact.
///
/// Prediction capability: map one fixed-order numeric feature vector to one
/// numeric output via `w . x + b`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Fitted intercept (bias)
    pub intercept: f64,
    /// Fitted coefficients (weights), one per input feature
    pub coefficients: Array1<f64>,
    /// Expected feature names in input order; empty for purely positional models
    #[serde(default)]
    pub feature_names: Vec<String>,
}

impl LinearModel {
    /// Build an artifact from raw weights. Used by tests and tooling; the
    /// server always goes through [`LinearModel::load`].
    pub fn new(intercept: f64, coefficients: Vec<f64>, feature_names: Vec<String>) -> Result<Self> {
        let model = Self {
            intercept,
            coefficients: Array1::from_vec(coefficients),
            feature_names,
        };
        model.validate()?;
        Ok(model)
    }

    /// Load an artifact from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let model: Self = serde_json::from_str(&json)?;
        model.validate()?;
        Ok(model)
    }

    /// Save the artifact to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Number of input features the artifact expects
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Feature names in input order (may be empty)
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Predict on a single feature row
    pub fn predict(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(InferdError::Shape {
                expected: format!("{} features", self.coefficients.len()),
                actual: format!("{} features", row.len()),
            });
        }
        let x = ndarray::aview1(row);
        Ok(x.dot(&self.coefficients) + self.intercept)
    }

    fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(InferdError::InvalidArtifact(
                "coefficient vector is empty".to_string(),
            ));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != self.coefficients.len() {
            return Err(InferdError::InvalidArtifact(format!(
                "{} feature names but {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aqi_model() -> LinearModel {
        LinearModel::new(
            10.0,
            vec![0.5, 0.3, 0.2, 0.4, 0.6, 12.0],
            vec!["PM2.5", "PM10", "SO2", "O3", "NO2", "CO"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_predict_linear() {
        let model = LinearModel::new(1.0, vec![2.0, 3.0], vec![]).unwrap();
        let pred = model.predict(&[1.0, 2.0]).unwrap();
        assert_eq!(pred, 9.0);
    }

    #[test]
    fn test_predict_deterministic() {
        let model = aqi_model();
        let row = [80.5, 120.0, 15.2, 45.1, 30.0, 0.8];
        let a = model.predict(&row).unwrap();
        let b = model.predict(&row).unwrap();
        assert_eq!(a, b);
        assert!(a.is_finite());
    }

    #[test]
    fn test_predict_wrong_length() {
        let model = aqi_model();
        let err = model.predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, InferdError::Shape { .. }));
        assert!(err.to_string().contains("6 features"));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let model = aqi_model();
        let path = std::env::temp_dir().join("inferd-test-roundtrip.json");
        model.save(&path).unwrap();

        let loaded = LinearModel::load(&path).unwrap();
        assert_eq!(loaded.n_features(), 6);
        assert_eq!(loaded.feature_names()[0], "PM2.5");
        assert_eq!(
            loaded.predict(&[1.0; 6]).unwrap(),
            model.predict(&[1.0; 6]).unwrap()
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let err = LinearModel::load("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, InferdError::Io(_)));
    }

    #[test]
    fn test_load_corrupt_json() {
        let path = std::env::temp_dir().join("inferd-test-corrupt.json");
        std::fs::write(&path, "not json at all").unwrap();
        let err = LinearModel::load(&path).unwrap_err();
        assert!(matches!(err, InferdError::Serialization(_)));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_validate_name_count_mismatch() {
        let err = LinearModel::new(0.0, vec![1.0, 2.0], vec!["a".to_string()]).unwrap_err();
        assert!(matches!(err, InferdError::InvalidArtifact(_)));
    }

    #[test]
    fn test_validate_empty_coefficients() {
        let err = LinearModel::new(0.0, vec![], vec![]).unwrap_err();
        assert!(matches!(err, InferdError::InvalidArtifact(_)));
    }
}
