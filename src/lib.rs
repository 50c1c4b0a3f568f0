//! waypoint-export - Group city waypoints from a CSV table by state and write them as JSON

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod input;
pub mod output;

pub use domain::{Point, WayPoint};
pub use error::{ExportError, Result};
pub use export::{ExportOptions, ExportSummary, export, export_with_options};
