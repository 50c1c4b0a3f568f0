use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};

/// A geographic coordinate in WGS84 degrees, with elevation in meters.
///
/// Serialized as `{"latitude": .., "longitude": .., "elevation": ..}`;
/// elevation is always written and defaults to 0 when absent on read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self::with_elevation(latitude, longitude, 0.0)
    }

    pub fn with_elevation(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Decode a point record, reporting absent coordinates as `MissingField`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawPoint = serde_json::from_str(json)?;
        Point::try_from(raw)
    }
}

/// Point record as read from JSON, before required fields are checked.
/// Unknown keys are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPoint {
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<f64>,
}

impl TryFrom<RawPoint> for Point {
    type Error = ExportError;

    fn try_from(raw: RawPoint) -> Result<Self> {
        let latitude = raw.latitude.ok_or(ExportError::MissingField { field: "latitude" })?;
        let longitude = raw
            .longitude
            .ok_or(ExportError::MissingField { field: "longitude" })?;

        Ok(Point::with_elevation(
            latitude,
            longitude,
            raw.elevation.unwrap_or(0.0),
        ))
    }
}
