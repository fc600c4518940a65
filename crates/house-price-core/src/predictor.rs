// crates/house-price-core/src/predictor.rs
use crate::error::{PriceError, Result};
use crate::model::{LinearRegression, Regressor};
use crate::schema::{FeatureSchema, FeatureVector};
use serde::{Deserialize, Serialize};

/// Rupees in one lakh; model output is expressed in lakhs.
pub const RUPEES_PER_LAKH: f64 = 100_000.0;

/// Relative half-width of the displayed price range.
pub const RANGE_SPREAD: f64 = 0.10;

/// Shown when the bathroom count is implausible for the bedroom count.
pub const BATH_WARNING: &str =
    "Note: Having more than BHK+2 bathrooms is unusual and may affect prediction accuracy.";

/// Attributes of one property as entered by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyInput {
    pub location: String,
    pub total_sqft: f64,
    pub bath: f64,
    pub bhk: f64,
}

impl PropertyInput {
    pub fn new(location: impl Into<String>, total_sqft: f64, bath: f64, bhk: f64) -> Self {
        Self {
            location: location.into(),
            total_sqft,
            bath,
            bhk,
        }
    }

    /// Soft warnings about the input. They never block a prediction.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.bath > self.bhk + 2.0 {
            out.push(BATH_WARNING);
        }
        out
    }
}

/// A price estimate plus the figures derived from it for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Rounded model output, in lakhs.
    pub price_lakhs: f64,
    /// Rupees per square foot.
    pub price_per_sqft: f64,
    pub lower_lakhs: f64,
    pub upper_lakhs: f64,
    /// `false` when the location had no column and got no location weighting.
    pub location_recognized: bool,
}

/// The loaded artifacts: feature schema plus the trained model.
#[derive(Clone, Debug)]
pub struct Predictor<M: Regressor = LinearRegression> {
    schema: FeatureSchema,
    model: M,
}

impl<M: Regressor> Predictor<M> {
    /// Pairs a schema with a model, checking that their widths agree.
    pub fn new(schema: FeatureSchema, model: M) -> Result<Self> {
        if model.n_features() != schema.len() {
            return Err(PriceError::InvalidData(format!(
                "model expects {} features but data_columns lists {}",
                model.n_features(),
                schema.len()
            )));
        }
        Ok(Self { schema, model })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn columns(&self) -> &[String] {
        self.schema.columns()
    }

    pub fn locations(&self) -> &[String] {
        self.schema.locations()
    }

    pub fn features_for(&self, input: &PropertyInput) -> FeatureVector {
        self.schema
            .build_features(&input.location, input.total_sqft, input.bath, input.bhk)
    }

    /// Runs the model on a single-row batch and rounds to two decimals.
    pub fn predict_price(&self, input: &PropertyInput) -> Result<f64> {
        let row = self.features_for(input);
        let raw = self.model.predict_one(&row)?;
        tracing::debug!(
            location = %input.location,
            total_sqft = input.total_sqft,
            bath = input.bath,
            bhk = input.bhk,
            raw,
            "model prediction"
        );
        Ok(round2(raw))
    }

    /// Prediction plus per-square-foot price and the +/-10% band.
    pub fn estimate(&self, input: &PropertyInput) -> Result<Estimate> {
        let price = self.predict_price(input)?;
        let price_per_sqft = if input.total_sqft > 0.0 {
            price * RUPEES_PER_LAKH / input.total_sqft
        } else {
            0.0
        };
        Ok(Estimate {
            price_lakhs: price,
            price_per_sqft,
            lower_lakhs: price * (1.0 - RANGE_SPREAD),
            upper_lakhs: price * (1.0 + RANGE_SPREAD),
            location_recognized: self.schema.is_known_location(&input.location),
        })
    }
}

/// Rounds half away from zero to two decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
