//! Basic usage example for house-price-rs
//!
//! This example demonstrates how to:
//! - Load the artifacts (cached for the process)
//! - Inspect the feature schema
//! - Build a feature vector
//! - Estimate prices for known and unknown locations
//!
//! Run from the workspace root so `artifacts/` resolves.

use house_price_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== House Price Estimator Basic Usage ===\n");

    println!("Loading model artifacts...");
    let predictor = Predictor::load()?;
    println!("✓ Artifacts loaded successfully\n");

    // Example 1: Schema overview
    println!("--- Example 1: Feature schema ---");
    let stats = predictor.stats();
    println!("Columns: {}", stats.columns);
    println!("Numeric: {:?}", &predictor.columns()[..stats.numeric_features]);
    for (i, loc) in predictor.schema().sorted_locations().iter().take(5).enumerate() {
        println!("{}. {}", i + 1, loc);
    }
    println!("... and {} more\n", stats.locations.saturating_sub(5));

    // Example 2: The feature vector behind one request
    println!("--- Example 2: Feature vector ---");
    let input = PropertyInput::new("  Whitefield ", 1200.0, 2.0, 2.0);
    let row = predictor.features_for(&input);
    println!("area={} bath={} bhk={}", row.area(), row.bath(), row.bhk());
    match row.active_location() {
        Some(idx) => println!("location slot {} = '{}'", idx, predictor.columns()[idx]),
        None => println!("no location slot set"),
    }
    println!();

    // Example 3: Estimates
    println!("--- Example 3: Estimates ---");
    for location in ["whitefield", "Hebbal", "Koramangala", "somewhere new"] {
        let est = predictor.estimate(&PropertyInput::new(location, 1200.0, 2.0, 2.0))?;
        println!(
            "{:<15} ₹{:>8.2} Lakhs  (₹{:.0}/sq ft){}",
            location,
            est.price_lakhs,
            est.price_per_sqft,
            if est.location_recognized { "" } else { "  [unknown location]" }
        );
    }

    Ok(())
}
