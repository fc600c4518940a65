// crates/house-price-core/src/schema.rs
use crate::error::{PriceError, Result};
use crate::text::normalize_location;

/// Number of leading numeric columns: area, bathrooms, bedrooms.
pub const NUMERIC_FEATURES: usize = 3;

pub const AREA_SLOT: usize = 0;
pub const BATH_SLOT: usize = 1;
pub const BHK_SLOT: usize = 2;

/// Ordered feature columns the model was trained on.
///
/// The first [`NUMERIC_FEATURES`] names are always area, bathroom count and
/// bedroom count, in that order. Every name after them is a one-hot location
/// indicator; at most one of those is set for a given prediction.
#[derive(Clone, Debug)]
pub struct FeatureSchema {
    columns: Vec<String>,
    /// Normalized copies of `columns[NUMERIC_FEATURES..]`, same order.
    location_keys: Vec<String>,
}

impl FeatureSchema {
    /// Builds a schema from the ordered column list.
    ///
    /// Fails when fewer than the three numeric columns are present.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.len() < NUMERIC_FEATURES {
            return Err(PriceError::InvalidData(format!(
                "data_columns must start with {NUMERIC_FEATURES} numeric columns, found {} column(s)",
                columns.len()
            )));
        }
        let location_keys = columns[NUMERIC_FEATURES..]
            .iter()
            .map(|c| normalize_location(c))
            .collect();
        Ok(Self {
            columns,
            location_keys,
        })
    }

    /// Full column list, numeric columns first.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Location columns only (everything after the numeric block).
    pub fn locations(&self) -> &[String] {
        &self.columns[NUMERIC_FEATURES..]
    }

    /// Location names sorted alphabetically, as shown in the form.
    pub fn sorted_locations(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.locations().iter().map(String::as_str).collect();
        out.sort_unstable();
        out
    }

    /// Number of features the model expects.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Schema position of a location, matched after trimming and lowercasing.
    ///
    /// Only location columns are searched; a name equal to one of the
    /// numeric columns is not a location.
    pub fn location_index(&self, location: &str) -> Option<usize> {
        let key = normalize_location(location);
        if key.is_empty() {
            return None;
        }
        self.location_keys
            .iter()
            .position(|k| *k == key)
            .map(|i| i + NUMERIC_FEATURES)
    }

    pub fn is_known_location(&self, location: &str) -> bool {
        self.location_index(location).is_some()
    }

    /// Builds the model input for one property.
    ///
    /// Unknown locations leave the whole location block at zero; they are
    /// not rejected.
    pub fn build_features(&self, location: &str, total_sqft: f64, bath: f64, bhk: f64) -> FeatureVector {
        let mut values = vec![0.0; self.columns.len()];
        values[AREA_SLOT] = total_sqft;
        values[BATH_SLOT] = bath;
        values[BHK_SLOT] = bhk;
        if let Some(idx) = self.location_index(location) {
            values[idx] = 1.0;
        }
        FeatureVector(values)
    }
}

/// Dense model input, one value per schema column.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn area(&self) -> f64 {
        self.0[AREA_SLOT]
    }

    pub fn bath(&self) -> f64 {
        self.0[BATH_SLOT]
    }

    pub fn bhk(&self) -> f64 {
        self.0[BHK_SLOT]
    }

    /// The one-hot location block.
    pub fn location_block(&self) -> &[f64] {
        &self.0[NUMERIC_FEATURES..]
    }

    /// Schema index of the set location slot, if any.
    pub fn active_location(&self) -> Option<usize> {
        self.location_block()
            .iter()
            .position(|v| *v != 0.0)
            .map(|i| i + NUMERIC_FEATURES)
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(
            ["total_sqft", "bath", "bhk", "1st phase jp nagar", "whitefield", "hebbal"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_short_schema() {
        let err = FeatureSchema::new(vec!["total_sqft".into(), "bath".into()]).unwrap_err();
        assert!(matches!(err, PriceError::InvalidData(_)));
    }

    #[test]
    fn schema_without_locations_is_valid() {
        let s = FeatureSchema::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        assert!(s.locations().is_empty());
        let v = s.build_features("anything", 1.0, 2.0, 3.0);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn known_location_sets_exactly_one_slot() {
        let s = schema();
        let v = s.build_features("  WhiteField ", 1200.0, 2.0, 3.0);
        assert_eq!(v.len(), s.len());
        assert_eq!(v.active_location(), Some(4));
        assert_eq!(v.location_block().iter().filter(|x| **x == 1.0).count(), 1);
        assert_eq!(v.location_block().iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn unknown_location_leaves_block_zero() {
        let s = schema();
        let v = s.build_features("atlantis", 1200.0, 2.0, 3.0);
        assert!(v.location_block().iter().all(|x| *x == 0.0));
        assert_eq!(v.active_location(), None);
    }

    #[test]
    fn numeric_slots_are_fixed_regardless_of_location() {
        let s = schema();
        for loc in ["hebbal", "nowhere", ""] {
            let v = s.build_features(loc, 950.0, 1.0, 2.0);
            assert_eq!((v.area(), v.bath(), v.bhk()), (950.0, 1.0, 2.0));
        }
    }

    #[test]
    fn numeric_column_names_are_not_locations() {
        let s = schema();
        assert_eq!(s.location_index("bath"), None);
        let v = s.build_features("total_sqft", 800.0, 1.0, 1.0);
        assert_eq!(v.area(), 800.0);
        assert!(v.location_block().iter().all(|x| *x == 0.0));
    }

    #[test]
    fn schema_columns_are_matched_case_insensitively() {
        let s = FeatureSchema::new(
            ["sqft", "bath", "bhk", "Electronic City"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();
        assert_eq!(s.location_index("electronic city"), Some(3));
    }

    #[test]
    fn sorted_locations_are_alphabetical() {
        assert_eq!(
            schema().sorted_locations(),
            vec!["1st phase jp nagar", "hebbal", "whitefield"]
        );
    }
}
