// crates/house-price-core/src/loader/model_io.rs
use super::common_io;
use crate::error::{PriceError, Result};
use crate::model::LinearRegression;

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// On-disk encoding of a model artifact, picked from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Json,
    Bincode,
}

impl ModelFormat {
    /// `*.json[.gz]` is JSON, anything else is bincode.
    pub fn from_path(path: &Path) -> Self {
        if common_io::logical_name(path).ends_with(".json") {
            ModelFormat::Json
        } else {
            ModelFormat::Bincode
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    pub fn from_path(path: &Path) -> Self {
        if common_io::is_gzip(path) {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

// -----------------------------------------------------------------------------
// READ
// -----------------------------------------------------------------------------

pub fn read_model(path: &Path) -> Result<LinearRegression> {
    let reader = common_io::open_stream(path)?;
    decode(reader, ModelFormat::from_path(path))
}

fn decode(reader: Box<dyn Read>, format: ModelFormat) -> Result<LinearRegression> {
    let model = match format {
        ModelFormat::Json => serde_json::from_reader(reader).map_err(PriceError::Json)?,
        ModelFormat::Bincode => bincode::deserialize_from(reader).map_err(PriceError::Bincode)?,
    };
    Ok(model)
}

// -----------------------------------------------------------------------------
// WRITE
// -----------------------------------------------------------------------------

/// Writes a model in the format and compression implied by `path`.
pub fn write_model(path: &Path, model: &LinearRegression) -> Result<()> {
    write_generic(
        path,
        model,
        ModelFormat::from_path(path),
        CompressionMode::from_path(path),
    )
}

/// Reads `input` and writes it back out as `output`, converting formats.
pub fn convert_model(input: &Path, output: &Path) -> Result<LinearRegression> {
    let model = read_model(input)?;
    write_model(output, &model)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        features = model.coefficients.len(),
        "converted model artifact"
    );
    Ok(model)
}

fn write_generic<T: serde::Serialize>(
    path: &Path,
    value: &T,
    format: ModelFormat,
    compression: CompressionMode,
) -> Result<()> {
    let file = File::create(path).map_err(PriceError::Io)?;
    write_to(BufWriter::new(file), value, format, compression)
}

/// Encodes `value` into `writer`. The gzip stream is finished explicitly so a
/// failed trailer write surfaces as an error.
fn write_to<W: Write, T: serde::Serialize>(
    mut writer: W,
    value: &T,
    format: ModelFormat,
    compression: CompressionMode,
) -> Result<()> {
    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                encode(&mut encoder, value, format)?;
                writer = encoder.finish().map_err(PriceError::Io)?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(PriceError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => encode(&mut writer, value, format)?,
    }
    writer.flush().map_err(PriceError::Io)?;
    Ok(())
}

fn encode<W: Write, T: serde::Serialize>(writer: W, value: &T, format: ModelFormat) -> Result<()> {
    match format {
        ModelFormat::Json => serde_json::to_writer(writer, value).map_err(PriceError::Json),
        ModelFormat::Bincode => bincode::serialize_into(writer, value).map_err(PriceError::Bincode),
    }
}
