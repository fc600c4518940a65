use house_price_core::{ArtifactPaths, Predictor};
use std::sync::Arc;

/// Shared state for every handler.
///
/// The predictor lives in the process-wide cache, so handlers get a
/// `&'static` reference and never lock.
#[derive(Clone, Debug)]
pub struct AppState {
    model: Result<&'static Predictor, Arc<str>>,
}

impl AppState {
    /// Loads the artifacts once. A failure is kept as a message and disables
    /// prediction instead of stopping the server.
    pub fn load(paths: &ArtifactPaths) -> Self {
        match Predictor::load_cached(paths) {
            Ok(p) => Self::ready(p),
            Err(e) => {
                tracing::error!(error = %e, ?paths, "failed to load model artifacts");
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn ready(predictor: &'static Predictor) -> Self {
        Self {
            model: Ok(predictor),
        }
    }

    pub fn unavailable(reason: impl Into<Arc<str>>) -> Self {
        Self {
            model: Err(reason.into()),
        }
    }

    pub fn predictor(&self) -> Option<&'static Predictor> {
        self.model.as_ref().ok().copied()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.model.as_ref().err().map(|e| e.as_ref())
    }
}
