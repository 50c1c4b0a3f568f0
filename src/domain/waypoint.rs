use super::point::{Point, RawPoint};
use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};

/// A named location, e.g. a city with its coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWayPoint")]
pub struct WayPoint {
    name: String,
    point: Point,
}

impl WayPoint {
    /// Create a waypoint. The name must not be empty.
    pub fn new(name: impl Into<String>, point: Point) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ExportError::InvalidArgument(
                "waypoint name must not be empty".to_string(),
            ));
        }
        Ok(Self { name, point })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Decode a waypoint record. Keys may appear in any order.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawWayPoint = serde_json::from_str(json)?;
        WayPoint::try_from(raw)
    }
}

/// All keys of a waypoint record are collected here first, so the entity
/// is only built once the whole object has been read.
#[derive(Debug, Deserialize)]
struct RawWayPoint {
    name: Option<String>,
    point: Option<RawPoint>,
}

impl TryFrom<RawWayPoint> for WayPoint {
    type Error = ExportError;

    fn try_from(raw: RawWayPoint) -> Result<Self> {
        let name = raw.name.ok_or(ExportError::MissingField { field: "name" })?;
        let point = raw.point.ok_or(ExportError::MissingField { field: "point" })?;
        WayPoint::new(name, Point::try_from(point)?)
    }
}

/// The demonstration waypoint printed by `--sample`.
pub fn sample_waypoint() -> WayPoint {
    WayPoint {
        name: "Some name".to_string(),
        point: Point::new(123.0, 123.0),
    }
}
