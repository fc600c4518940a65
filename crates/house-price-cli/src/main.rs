//! house-price: launcher and inspection tool for the estimator
//!
//! Usage examples
//! --------------
//!
//! - Check that the artifacts and manifests are in place
//!   $ house-price check
//!
//! - Build and run the web form (Ctrl+C stops it)
//!   $ house-price launch --port 8501
//!
//! - One-off estimate
//!   $ house-price predict --location "Whitefield" --sqft 1200 --bath 2 --bhk 2
//!
//! - List locations, show artifact statistics
//!   $ house-price locations
//!   $ house-price stats
//!
//! - Convert the model to gzipped bincode
//!   $ house-price convert artifacts/model.json artifacts/model.bin.gz
//!
//! `--artifacts <dir>` (or `HOUSE_PRICE_ARTIFACTS_DIR`) points at a different
//! artifact directory; `--model <file>` overrides the model file alone.
mod args;
mod launch;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use house_price_core::{ArtifactPaths, Predictor, PropertyInput};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = CliArgs::parse();

    let mut paths = ArtifactPaths::in_dir(&args.artifacts);
    if let Some(model) = &args.model {
        paths = paths.with_model(model);
    }

    match args.command {
        Commands::Check(project) => {
            if !launch::check_requirements(&project.root, &paths) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Launch(launch_args) => {
            if !launch::launch(&launch_args, &paths).await? {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Predict {
            location,
            sqft,
            bath,
            bhk,
        } => {
            let predictor = Predictor::load_cached(&paths).context("Error loading model artifacts")?;
            let input = PropertyInput::new(location, sqft, bath, bhk);
            for warning in input.warnings() {
                eprintln!("{warning}");
            }
            let estimate = predictor
                .estimate(&input)
                .context("Error making prediction")?;
            if !estimate.location_recognized {
                eprintln!(
                    "Location '{}' is not in the model; no location adjustment applied.",
                    input.location.trim()
                );
            }
            println!("Estimated Price: ₹{:.2} Lakhs", estimate.price_lakhs);
            println!("Price per sq ft: ₹{:.0}", estimate.price_per_sqft);
            println!(
                "Expected Range:  ₹{:.2} - ₹{:.2} Lakhs",
                estimate.lower_lakhs, estimate.upper_lakhs
            );
        }

        Commands::Locations => {
            let predictor = Predictor::load_cached(&paths).context("Error loading model artifacts")?;
            for loc in predictor.schema().sorted_locations() {
                println!("{loc}");
            }
        }

        Commands::Stats => {
            let predictor = Predictor::load_cached(&paths).context("Error loading model artifacts")?;
            let stats = predictor.stats();
            println!("Artifact statistics:");
            println!("  Columns: {}", stats.columns);
            println!("  Numeric features: {}", stats.numeric_features);
            println!("  Locations: {}", stats.locations);
            println!("  Intercept: {}", predictor.model().intercept);
        }

        Commands::Convert { input, output } => {
            let model = house_price_core::loader::convert_model(&input, &output)
                .with_context(|| format!("failed to convert {}", input.display()))?;
            println!(
                "Wrote {} ({} coefficients)",
                output.display(),
                model.coefficients.len()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
