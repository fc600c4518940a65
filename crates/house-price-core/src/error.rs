// crates/house-price-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong while loading artifacts or producing a price.
#[derive(Debug, Error)]
pub enum PriceError {
    /// An artifact file does not exist or cannot be opened.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    /// The artifact parsed but violates the schema/model contract.
    #[error("Invalid artifact: {0}")]
    InvalidData(String),

    #[error("feature vector has {got} values but the model expects {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("model returned no prediction")]
    EmptyPrediction,
}

pub type Result<T> = std::result::Result<T, PriceError>;
