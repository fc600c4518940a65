//! Input rules the form enforces before anything reaches the predictor.

use house_price_core::PropertyInput;
use serde::Deserialize;

/// Inclusive bounds and step for one whole-number form field.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Bounds {
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

pub const SQFT: Bounds = Bounds {
    label: "Total Area (Square Feet)",
    min: 300.0,
    max: 10_000.0,
    step: 50.0,
    default: 1_000.0,
};

pub const BHK: Bounds = Bounds {
    label: "BHK (Bedrooms)",
    min: 1.0,
    max: 20.0,
    step: 1.0,
    default: 2.0,
};

pub const BATH: Bounds = Bounds {
    label: "Bathrooms",
    min: 1.0,
    max: 15.0,
    step: 1.0,
    default: 2.0,
};

pub const MISSING_FIELDS: &str = "Please fill in all the details!";

/// Raw urlencoded form body. Every field is optional so a missing value
/// becomes a message instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictForm {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub total_sqft: String,
    #[serde(default)]
    pub bhk: String,
    #[serde(default)]
    pub bath: String,
}

impl PredictForm {
    /// Parses and validates the form into a predictor input.
    pub fn parse(&self) -> Result<PropertyInput, String> {
        let location = self.location.trim();
        if location.is_empty()
            || self.total_sqft.trim().is_empty()
            || self.bhk.trim().is_empty()
            || self.bath.trim().is_empty()
        {
            return Err(MISSING_FIELDS.to_string());
        }

        let total_sqft = parse_field(&self.total_sqft, &SQFT)?;
        let bhk = parse_field(&self.bhk, &BHK)?;
        let bath = parse_field(&self.bath, &BATH)?;

        Ok(PropertyInput::new(location, total_sqft, bath, bhk))
    }
}

fn parse_field(raw: &str, bounds: &Bounds) -> Result<f64, String> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a number, got \"{}\"", bounds.label, raw.trim()))?;
    check(v, bounds)?;
    Ok(v)
}

fn check(v: f64, bounds: &Bounds) -> Result<(), String> {
    if !v.is_finite() || !bounds.contains(v) {
        return Err(format!(
            "{} must be between {} and {}",
            bounds.label, bounds.min, bounds.max
        ));
    }
    if v.fract() != 0.0 {
        return Err(format!("{} must be a whole number, got {v}", bounds.label));
    }
    Ok(())
}

/// Bound checks for inputs that arrive already typed (JSON API).
pub fn check_input(input: &PropertyInput) -> Result<(), String> {
    if input.location.trim().is_empty() {
        return Err(MISSING_FIELDS.to_string());
    }
    check(input.total_sqft, &SQFT)?;
    check(input.bhk, &BHK)?;
    check(input.bath, &BATH)?;
    Ok(())
}
