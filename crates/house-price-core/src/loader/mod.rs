// crates/house-price-core/src/loader/mod.rs

//! # Artifact Loader
//!
//! Handles the physical layer (file access, decompression) for the two
//! artifacts produced by offline training and assembles them into a
//! [`Predictor`]:
//!
//! - `columns.json`: `{"data_columns": ["total_sqft", "bath", "bhk", <locations>...]}`
//! - `model.json` (or `model.bin`, optionally `.gz`): a [`LinearRegression`].
//!
//! Loading either succeeds completely or fails with a [`PriceError`]; there
//! is no retry and no partially loaded predictor.

use crate::error::{PriceError, Result};
use crate::model::LinearRegression;
use crate::predictor::Predictor;
use crate::schema::FeatureSchema;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod common_io;
pub mod model_io;

pub use model_io::{convert_model, CompressionMode, ModelFormat};

// Single in-process cache so the artifacts are read at most once per process.
static PREDICTOR_CACHE: OnceCell<Predictor> = OnceCell::new();

pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
pub const COLUMNS_FILENAME: &str = "columns.json";
pub const MODEL_FILENAME: &str = "model.json";

/// Raw shape of the columns artifact. Only `data_columns` is recognized.
#[derive(Debug, Deserialize)]
struct ColumnsRaw {
    data_columns: Vec<String>,
}

/// Where the two artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub columns: PathBuf,
    pub model: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            columns: dir.join(COLUMNS_FILENAME),
            model: dir.join(MODEL_FILENAME),
        }
    }

    pub fn with_model(mut self, model: impl Into<PathBuf>) -> Self {
        self.model = model.into();
        self
    }

    /// Artifacts that do not exist on disk, in declaration order.
    pub fn missing(&self) -> Vec<&Path> {
        [self.columns.as_path(), self.model.as_path()]
            .into_iter()
            .filter(|p| !p.exists())
            .collect()
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_ARTIFACTS_DIR)
    }
}

/// Reads and validates the columns artifact.
pub fn read_schema(path: &Path) -> Result<FeatureSchema> {
    let reader = common_io::open_stream(path)?;
    let raw: ColumnsRaw = serde_json::from_reader(reader).map_err(PriceError::Json)?;
    FeatureSchema::new(raw.data_columns)
}

impl Predictor<LinearRegression> {
    /// Loads the default artifacts (`artifacts/columns.json`,
    /// `artifacts/model.json`), cached for the process lifetime.
    pub fn load() -> Result<&'static Self> {
        Self::load_cached(&ArtifactPaths::default())
    }

    /// Loads `paths` once per process.
    ///
    /// The first successful call fills the cache; later calls return the
    /// cached predictor without touching the filesystem, whatever paths they
    /// pass. Failures are not cached.
    pub fn load_cached(paths: &ArtifactPaths) -> Result<&'static Self> {
        PREDICTOR_CACHE.get_or_try_init(|| Self::load_from_paths(paths))
    }

    /// Uncached load.
    pub fn load_from_paths(paths: &ArtifactPaths) -> Result<Self> {
        let schema = read_schema(&paths.columns)?;
        let model = model_io::read_model(&paths.model)?;
        let predictor = Predictor::new(schema, model)?;
        tracing::info!(
            columns = %paths.columns.display(),
            model = %paths.model.display(),
            features = predictor.columns().len(),
            locations = predictor.locations().len(),
            "loaded model artifacts"
        );
        Ok(predictor)
    }

    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_paths(&ArtifactPaths::in_dir(dir))
    }

    /// Writes the model in the format implied by `path` (`.json` or bincode,
    /// `.gz` for gzip).
    pub fn save_model_as(&self, path: impl AsRef<Path>) -> Result<()> {
        model_io::write_model(path.as_ref(), self.model())
    }
}
