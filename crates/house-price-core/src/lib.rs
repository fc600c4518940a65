// crates/house-price-core/src/lib.rs

//! House price estimation from a pre-trained linear regression model.
//!
//! Two artifacts produced by offline training drive everything:
//! a feature schema (`columns.json`) and a serialized model. The
//! [`Predictor`] combines them: it turns a location plus area, bathroom and
//! bedroom counts into a one-hot feature vector and asks the model for a
//! price in lakhs.
//!
//! ```no_run
//! use house_price_core::prelude::*;
//!
//! let predictor = Predictor::load()?;
//! let price = predictor.predict_price(&PropertyInput::new("Whitefield", 1200.0, 2.0, 2.0))?;
//! println!("Estimated price: {price:.2} Lakhs");
//! # Ok::<(), house_price_core::PriceError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod predictor;
pub mod schema;
pub mod text;

// Re-exports
pub use crate::common::ArtifactStats;
pub use crate::error::{PriceError, Result};
pub use crate::loader::ArtifactPaths;
pub use crate::model::{LinearRegression, Regressor};
pub use crate::predictor::{round2, Estimate, PropertyInput, Predictor, BATH_WARNING};
pub use crate::schema::{FeatureSchema, FeatureVector, NUMERIC_FEATURES};

pub mod prelude {
    pub use crate::{
        ArtifactPaths, ArtifactStats, Estimate, FeatureSchema, FeatureVector, LinearRegression,
        Predictor, PriceError, PropertyInput, Regressor, Result,
    };
}
