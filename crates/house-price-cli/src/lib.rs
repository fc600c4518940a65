//! house-price-cli
//! ===============
//!
//! Command-line launcher for the house price estimator.
//!
//! This crate primarily provides a binary (`house-price`). We include a small
//! library target so that docs render an overview page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! house-price --help
//! house-price check
//! house-price launch
//! house-price predict --location hebbal --sqft 1200 --bath 2 --bhk 3
//! ```
//!
//! For programmatic access to the predictor, use the [`house-price-core`]
//! crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
