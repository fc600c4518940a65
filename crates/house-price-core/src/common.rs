// crates/house-price-core/src/common.rs
use crate::model::Regressor;
use crate::predictor::Predictor;
use crate::schema::NUMERIC_FEATURES;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for loaded artifacts.
///
/// Returned by [`Predictor::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactStats {
    pub columns: usize,
    pub numeric_features: usize,
    pub locations: usize,
}

impl<M: Regressor> Predictor<M> {
    pub fn stats(&self) -> ArtifactStats {
        ArtifactStats {
            columns: self.columns().len(),
            numeric_features: NUMERIC_FEATURES,
            locations: self.locations().len(),
        }
    }
}
