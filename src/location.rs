//! Named coordinates supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// A named point on the globe.
///
/// The name doubles as the identity key during route search, so names must be
/// unique within one planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// (lat, lon) pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Rejects non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<()> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lon_ok = self.lon.is_finite() && (-180.0..=180.0).contains(&self.lon);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(PlanError::InvalidCoordinates {
                name: self.name.clone(),
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}
