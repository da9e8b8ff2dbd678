//! Domain types and configuration shared across the addrsearch workspace.

mod app_config;
mod config;

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};

/// A normalized geocoding result: one address the provider matched for a
/// query, ready for display and navigation.
///
/// Immutable once constructed. Equality is structural, which is what list
/// diffing in a presentation layer wants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressModel {
    /// Opaque provider-assigned identifier, unique per result.
    pub id: String,
    /// Human-readable address line, non-empty.
    pub display_address: String,
    /// Degrees in [-90, 90].
    pub latitude: f64,
    /// Degrees in [-180, 180].
    pub longitude: f64,
}

impl AddressModel {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.latitude,
            lon: self.longitude,
        }
    }
}

/// A WGS84 point. Displays as `"lat,lon"`, the format both the directions
/// API and navigation URIs expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Returns `true` if both components are inside their valid degree ranges.
    #[must_use]
    pub fn in_range(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_degrees(f, self.lat)?;
        write!(f, ",")?;
        write_degrees(f, self.lon)
    }
}

// Whole-number degrees keep one decimal place ("37.0", not "37") so the
// rendered pair round-trips through `FromStr` and matches the wire format
// the navigation surfaces expect.
fn write_degrees(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 && value.is_finite() {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

/// Error parsing a `"lat,lon"` pair.
#[derive(Debug, Error)]
pub enum CoordinateParseError {
    #[error("expected \"lat,lon\", got \"{0}\"")]
    MissingComma(String),
    #[error("invalid coordinate component \"{component}\": {source}")]
    InvalidComponent {
        component: String,
        source: ParseFloatError,
    },
    #[error("coordinate {0} is out of range")]
    OutOfRange(Coordinate),
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| CoordinateParseError::MissingComma(s.to_owned()))?;
        let parse = |component: &str| {
            component.trim().parse::<f64>().map_err(|source| {
                CoordinateParseError::InvalidComponent {
                    component: component.to_owned(),
                    source,
                }
            })
        };
        let coord = Coordinate {
            lat: parse(lat)?,
            lon: parse(lon)?,
        };
        if !coord.in_range() {
            return Err(CoordinateParseError::OutOfRange(coord));
        }
        Ok(coord)
    }
}
