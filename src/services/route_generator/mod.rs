pub mod geometry;
pub mod loop_shapes;

use crate::constants::WALKING_SPEED_KMH;
use crate::models::{Coordinates, DistanceKm, RouteResult};
use crate::services::directions::DirectionsProvider;
use std::sync::Arc;

use loop_shapes::{build_loop_variations, fallback_rectangle};

/// Turns a walk duration into candidate loop routes.
///
/// Stateless between calls: every request rebuilds its loops and asks the
/// provider again.
#[derive(Clone)]
pub struct RouteGenerator {
    provider: Arc<dyn DirectionsProvider>,
}

impl RouteGenerator {
    pub fn new(provider: Arc<dyn DirectionsProvider>) -> Self {
        RouteGenerator { provider }
    }

    /// Distance covered in `duration_minutes` at [`WALKING_SPEED_KMH`].
    pub fn target_distance(&self, duration_minutes: f64) -> DistanceKm {
        DistanceKm::from_walking_minutes(duration_minutes, WALKING_SPEED_KMH)
    }

    /// Generate loop routes for a walk of `duration_minutes`.
    ///
    /// Variations are requested one at a time in square, triangle, hexagon
    /// order and the result keeps that order. The fallback rectangle is tried
    /// once, only if all three failed. An empty result means no route could
    /// be generated; it is not an error.
    pub async fn generate_loop_routes(
        &self,
        start: Coordinates,
        duration_minutes: f64,
    ) -> Vec<RouteResult> {
        let target_distance = self.target_distance(duration_minutes);

        tracing::info!(
            lat = start.lat,
            lng = start.lng,
            duration_minutes = duration_minutes,
            target_distance_km = target_distance.as_km(),
            "Generating loop routes: {} min walk, target {}",
            duration_minutes, target_distance
        );

        let mut routes = Vec::new();
        for waypoint_loop in build_loop_variations(start.lat, start.lng, target_distance.as_km()) {
            if let Some(route) = self.provider.request_route(&waypoint_loop).await {
                tracing::debug!(
                    shape = %waypoint_loop.shape,
                    distance_km = %format!("{:.2}", route.distance_km()),
                    "{} loop: {:.2}km",
                    waypoint_loop.shape, route.distance_km()
                );
                routes.push(route);
            }
        }

        if routes.is_empty() {
            tracing::warn!(
                target_distance_km = target_distance.as_km(),
                "All loop variations failed, trying fallback rectangle"
            );
            let fallback = fallback_rectangle(start, target_distance.as_km());
            if let Some(route) = self.provider.request_route(&fallback).await {
                routes.push(route);
            }
        }

        if routes.is_empty() {
            tracing::warn!("No loop routes could be generated");
        } else {
            tracing::info!("Generated {} loop routes", routes.len());
        }

        routes
    }

    /// Same as [`RouteGenerator::generate_loop_routes`], for a walk of
    /// `distance_km` at [`WALKING_SPEED_KMH`].
    pub async fn generate_loop_routes_for_distance(
        &self,
        start: Coordinates,
        distance_km: f64,
    ) -> Vec<RouteResult> {
        let duration_minutes = DistanceKm(distance_km).walking_minutes(WALKING_SPEED_KMH);
        self.generate_loop_routes(start, duration_minutes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::MAX_DURATION_MINUTES;
    use crate::error::{AppError, Result};
    use async_trait::async_trait;
    use serial_test::serial;

    struct Unreachable;

    #[async_trait]
    impl DirectionsProvider for Unreachable {
        async fn get_directions(&self, _waypoints: &[Coordinates]) -> Result<RouteResult> {
            Err(AppError::RoutingApi("connection refused".to_string()))
        }
    }

    #[test]
    fn test_target_distance() {
        let generator = RouteGenerator::new(Arc::new(Unreachable));
        assert_eq!(generator.target_distance(30.0).as_km(), 2.5);
        assert_eq!(generator.target_distance(60.0).as_km(), 5.0);
        assert_eq!(generator.target_distance(180.0).as_km(), 15.0);
    }

    #[test]
    #[serial]
    fn test_walking_speed_env_has_no_effect() {
        unsafe { std::env::set_var("WALKING_SPEED_KMH", "4") };
        assert!(Config::from_env().is_ok());

        let generator = RouteGenerator::new(Arc::new(Unreachable));
        assert_eq!(generator.target_distance(30.0).as_km(), 2.5);
        assert_eq!(
            generator
                .target_distance(MAX_DURATION_MINUTES as f64)
                .as_km(),
            15.0
        );
        unsafe { std::env::remove_var("WALKING_SPEED_KMH") };
    }

    #[tokio::test]
    async fn test_unreachable_provider_yields_empty_list() {
        let generator = RouteGenerator::new(Arc::new(Unreachable));
        let start = Coordinates::new(40.0, -73.0).unwrap();
        assert!(generator.generate_loop_routes(start, 30.0).await.is_empty());
    }
}
