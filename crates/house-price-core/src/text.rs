// crates/house-price-core/src/text.rs

/// Normalizes a location name for lookup: trims surrounding whitespace and
/// lowercases.
///
/// Both the user input and the schema's column names go through this, so
/// matching is case-insensitive on either side.
///
/// ```rust
/// use house_price_core::text::normalize_location;
///
/// assert_eq!(normalize_location("  Whitefield "), "whitefield");
/// assert_eq!(normalize_location("1st Phase JP Nagar"), "1st phase jp nagar");
/// ```
#[inline]
pub fn normalize_location(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Case-insensitive equality on normalized form.
#[inline]
pub fn location_equals(a: &str, b: &str) -> bool {
    normalize_location(a) == normalize_location(b)
}
