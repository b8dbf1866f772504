use crate::error::Result;
use crate::models::{Coordinates, RouteResult, WaypointLoop};
use async_trait::async_trait;

/// Turns an ordered list of waypoints into a walkable route.
///
/// Implementors only need `get_directions`; `request_route` is the
/// swallow-and-log entry point the route generator uses, so a failing
/// provider never aborts a batch.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// One attempt, no retry. Errors describe why no route came back.
    async fn get_directions(&self, waypoints: &[Coordinates]) -> Result<RouteResult>;

    async fn request_route(&self, waypoint_loop: &WaypointLoop) -> Option<RouteResult> {
        match self.get_directions(&waypoint_loop.coordinates).await {
            Ok(route) => Some(route),
            Err(e) => {
                tracing::warn!(
                    shape = %waypoint_loop.shape,
                    waypoints = waypoint_loop.coordinates.len(),
                    error = %e,
                    "Route request failed for {} loop: {}",
                    waypoint_loop.shape, e
                );
                None
            }
        }
    }
}
