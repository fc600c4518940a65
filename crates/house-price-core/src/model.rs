// crates/house-price-core/src/model.rs
use crate::error::{PriceError, Result};
use crate::schema::FeatureVector;
use serde::{Deserialize, Serialize};

/// A trained model that maps feature vectors to scalar estimates.
///
/// Models are loaded once and shared read-only across requests, hence the
/// `Send + Sync + 'static` bound.
pub trait Regressor: Send + Sync + 'static {
    /// Number of input features the model was fitted on.
    fn n_features(&self) -> usize;

    /// Predicts one value per row of `batch`.
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>>;

    /// Convenience wrapper around [`Regressor::predict`] for a single-row batch.
    fn predict_one(&self, row: &FeatureVector) -> Result<f64> {
        self.predict(std::slice::from_ref(row))?
            .into_iter()
            .next()
            .ok_or(PriceError::EmptyPrediction)
    }
}

/// Ordinary least squares model: `intercept + coefficients · x`.
///
/// Serialized as `{"intercept": f64, "coefficients": [f64, ...]}` in JSON or
/// the equivalent bincode layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearRegression {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(PriceError::ShapeMismatch {
                expected: self.coefficients.len(),
                got: row.len(),
            });
        }
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.intercept + dot)
    }
}

impl Regressor for LinearRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<f64>> {
        batch
            .iter()
            .map(|row| self.predict_row(row.as_slice()))
            .collect()
    }
}
