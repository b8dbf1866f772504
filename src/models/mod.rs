pub mod coordinates;
pub mod distance;
pub mod route;

pub use coordinates::{distance_between, Coordinates};
pub use distance::{DistanceKm, DistanceMeters};
pub use route::{LoopShape, RouteResult, RouteSummary, WaypointLoop};
