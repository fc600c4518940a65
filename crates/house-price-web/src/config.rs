use anyhow::Context;
use house_price_core::loader::DEFAULT_ARTIFACTS_DIR;
use house_price_core::ArtifactPaths;
use std::str::FromStr;

/// Deployment environment; only changes how logs are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Develop,
    Production,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "dev" | "develop" => Ok(Environment::Develop),
            "prod" | "production" => Ok(Environment::Production),
            other => anyhow::bail!("unknown ENVIRONMENT: {other}"),
        }
    }
}

/// The configuration parameters for the server, pulled from environment
/// variables.
///
/// | variable | default |
/// |----------|---------|
/// | `HOST` | `0.0.0.0` |
/// | `PORT` | `8501` |
/// | `ENVIRONMENT` | `local` |
/// | `HOUSE_PRICE_ARTIFACTS_DIR` | `artifacts` |
/// | `HOUSE_PRICE_MODEL_FILE` | `<artifacts dir>/model.json` |
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub artifacts: ArtifactPaths,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match var("PORT") {
            Some(p) => p.parse::<u16>().with_context(|| format!("invalid PORT: {p}"))?,
            None => 8501,
        };
        let environment = match var("ENVIRONMENT") {
            Some(e) => e.parse()?,
            None => Environment::Local,
        };

        let dir = var("HOUSE_PRICE_ARTIFACTS_DIR").unwrap_or_else(|| DEFAULT_ARTIFACTS_DIR.into());
        let mut artifacts = ArtifactPaths::in_dir(dir);
        if let Some(model) = var("HOUSE_PRICE_MODEL_FILE") {
            artifacts = artifacts.with_model(model);
        }

        Ok(Config {
            host,
            port,
            environment,
            artifacts,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
