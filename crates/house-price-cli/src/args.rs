use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for house-price
#[derive(Debug, Parser)]
#[command(
    name = "house-price",
    version,
    about = "Launch and inspect the Bangalore house price estimator"
)]
pub struct CliArgs {
    /// Directory holding columns.json and the model artifact
    #[arg(
        short = 'a',
        long = "artifacts",
        global = true,
        env = "HOUSE_PRICE_ARTIFACTS_DIR",
        default_value = "artifacts"
    )]
    pub artifacts: PathBuf,

    /// Model artifact path (default: <artifacts>/model.json)
    #[arg(short = 'm', long = "model", global = true, env = "HOUSE_PRICE_MODEL_FILE")]
    pub model: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that every file needed to run the app is present
    Check(ProjectArgs),

    /// Check files, build the web server, and run it until Ctrl+C
    Launch(LaunchArgs),

    /// Estimate a price from the command line
    Predict {
        /// Location name (case-insensitive)
        #[arg(short = 'l', long)]
        location: String,

        /// Total area in square feet
        #[arg(short = 's', long)]
        sqft: f64,

        /// Number of bathrooms
        #[arg(short = 'b', long)]
        bath: f64,

        /// Number of bedrooms (BHK)
        #[arg(short = 'k', long)]
        bhk: f64,
    },

    /// List all known locations
    Locations,

    /// Show a summary of the loaded artifacts
    Stats,

    /// Rewrite a model artifact in another format (.json, .bin, optionally .gz)
    Convert {
        /// Source model file
        input: PathBuf,
        /// Destination; format is taken from the file name
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Workspace root containing Cargo.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct LaunchArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Port for the web server
    #[arg(short = 'p', long, default_value = "8501", env = "PORT")]
    pub port: u16,

    /// Skip `cargo build --release` and run the existing binary
    #[arg(long)]
    pub skip_build: bool,

    /// Cargo executable used for the build step
    #[arg(long, env = "CARGO", default_value = "cargo", hide = true)]
    pub cargo: String,

    /// Seconds to wait for /health before giving up on the readiness probe
    #[arg(long, default_value = "30")]
    pub ready_timeout: u64,
}
