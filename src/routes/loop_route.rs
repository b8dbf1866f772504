use crate::error::{AppError, Result};
use crate::models::route::{LoopRouteRequest, LoopTarget, RouteResponse};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

const NO_ROUTES_MESSAGE: &str =
    "No routes could be generated for this location and duration. Please try again.";

/// POST /routes/loop
/// Generate walking loops that start and end at the same point
pub async fn create_loop_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoopRouteRequest>,
) -> Result<Json<RouteResponse>> {
    let generator = &state.route_generator;

    let target = request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        lat = request.start_point.lat,
        lng = request.start_point.lng,
        loop_target = ?target,
        "Loop route request: ({:.4}, {:.4}), {:?}",
        request.start_point.lat, request.start_point.lng, target
    );

    let (target_distance, routes) = match target {
        LoopTarget::Duration(minutes) => (
            generator.target_distance(minutes as f64),
            generator
                .generate_loop_routes(request.start_point, minutes as f64)
                .await,
        ),
        LoopTarget::Distance(distance) => (
            distance,
            generator
                .generate_loop_routes_for_distance(request.start_point, distance.as_km())
                .await,
        ),
    };

    let message = routes.is_empty().then(|| NO_ROUTES_MESSAGE.to_string());

    Ok(Json(RouteResponse {
        target_distance_km: target_distance.as_km(),
        routes,
        message,
    }))
}
