//! Validated geographic coordinate pair.

use std::fmt;

use crate::error::AppError;

/// A validated "latitude,longitude" pair parsed from user input.
///
/// The canonical key preserves the digit text the user submitted (with
/// surrounding whitespace trimmed), so the redirect target and the
/// storage key match the form value exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
    key: String,
}

impl Coordinates {
    /// Parses a coordinate string of the form `"lat,lon"`.
    ///
    /// Both halves must parse as finite floats, with latitude in
    /// [-90, 90] and longitude in [-180, 180].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCoordinates`] when the input does not
    /// split into exactly two comma-separated halves, when either half
    /// is not a finite number, or when a value is out of range.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        let mut parts = trimmed.split(',');
        let (Some(lat_text), Some(lon_text), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(AppError::InvalidCoordinates(format!(
                "expected \"lat,lon\", got \"{trimmed}\""
            )));
        };

        let lat_text = lat_text.trim();
        let lon_text = lon_text.trim();

        let latitude = parse_finite(lat_text, "latitude")?;
        let longitude = parse_finite(lon_text, "longitude")?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidCoordinates(format!(
                "latitude {lat_text} out of range [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidCoordinates(format!(
                "longitude {lon_text} out of range [-180, 180]"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
            key: format!("{lat_text},{lon_text}"),
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Canonical `"lat,lon"` key used for the upstream query, the
    /// redirect target, and the storage lookup.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

fn parse_finite(text: &str, field: &str) -> Result<f64, AppError> {
    let value: f64 = text
        .parse()
        .map_err(|_| AppError::InvalidCoordinates(format!("{field} \"{text}\" is not a number")))?;
    if !value.is_finite() {
        return Err(AppError::InvalidCoordinates(format!(
            "{field} \"{text}\" is not finite"
        )));
    }
    Ok(value)
}
