pub mod point;
pub mod waypoint;

pub use point::Point;
pub use waypoint::{WayPoint, sample_waypoint};
