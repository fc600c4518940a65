//! house-price-web: the estimator form and JSON API
//!
//! Serves a single page where a user picks a Bangalore location, enters the
//! area, bedroom and bathroom counts, and gets a price estimate from the
//! model artifacts loaded at startup.
//!
//! Routes
//! ------
//! - `GET  /`             the form
//! - `POST /predict`      form submission (urlencoded)
//! - `GET  /api/locations`
//! - `POST /api/predict`  `{"location", "total_sqft", "bath", "bhk"}`
//! - `GET  /health`
//!
//! See [`config::Config`] for the environment variables it reads.
use anyhow::Context;
use config::Config;

mod api;
mod config;
mod logging;
mod page;
mod validation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    logging::init(config.environment);
    tracing::trace!(?config, "initialized config");

    let state = api::context::AppState::load(&config.artifacts);
    api::setup_and_serve(&config, state).await
}
