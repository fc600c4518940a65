//! Error handling example for house-price-rs
//!
//! This example demonstrates proper error handling and edge cases

use house_price_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== House Price Estimator Error Handling Example ===\n");

    // Example 1: Missing artifacts
    println!("--- Example 1: Loading from a directory without artifacts ---");
    match Predictor::load_from_dir("/nonexistent/artifacts") {
        Ok(_) => println!("  Unexpectedly loaded artifacts"),
        Err(e) => println!("✗ Failed to load artifacts: {e}"),
    }
    println!();

    // Example 2: Handling load errors for the default artifacts
    println!("--- Example 2: Loading the default artifacts ---");
    let predictor = match Predictor::load() {
        Ok(p) => {
            println!("✓ Artifacts loaded successfully");
            p
        }
        Err(e) => {
            eprintln!("✗ Failed to load artifacts: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 3: Unknown and odd location strings are not rejected
    println!("--- Example 3: Location edge cases ---");
    for loc in ["", "   ", "HEBBAL", "total_sqft", "Atlantis"] {
        match predictor.schema().location_index(loc) {
            Some(idx) => println!("  {loc:?} -> column {idx}"),
            None => println!("  {loc:?} -> no location weighting"),
        }
    }
    println!();

    // Example 4: A model whose width does not match the schema
    println!("--- Example 4: Mismatched model ---");
    let schema = FeatureSchema::new(predictor.columns().to_vec())?;
    match Predictor::new(schema, LinearRegression::new(0.0, vec![1.0, 2.0])) {
        Ok(_) => println!("  Unexpectedly accepted"),
        Err(e) => println!("  Rejected: {e}"),
    }

    Ok(())
}
