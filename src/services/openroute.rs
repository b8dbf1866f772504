use crate::constants::{
    AVOID_FEATURES, MAX_WAYPOINTS_PER_REQUEST, OPENROUTE_DEFAULT_BASE_URL, OPENROUTE_WALKING_PATH,
};
use crate::error::{AppError, Result};
use crate::models::{Coordinates, RouteResult};
use crate::services::directions::DirectionsProvider;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenRouteService walking directions client.
///
/// The API key goes verbatim into the `Authorization` header. An empty key
/// is sent as-is and rejected by the service, which the caller sees as an
/// ordinary failed request.
#[derive(Clone)]
pub struct OpenRouteClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouteClient {
    pub fn new(api_key: String) -> Self {
        OpenRouteClient {
            client: Client::new(),
            api_key,
            base_url: OPENROUTE_DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        OpenRouteClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    fn directions_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            OPENROUTE_WALKING_PATH
        )
    }
}

#[async_trait]
impl DirectionsProvider for OpenRouteClient {
    /// Get walking directions through the waypoints, in order.
    /// Returns the first route feature with its geometry and summary.
    async fn get_directions(&self, waypoints: &[Coordinates]) -> Result<RouteResult> {
        if waypoints.len() < 2 {
            return Err(AppError::InvalidRequest(
                "At least 2 waypoints required".to_string(),
            ));
        }

        if waypoints.len() > MAX_WAYPOINTS_PER_REQUEST {
            return Err(AppError::InvalidRequest(format!(
                "Maximum {} waypoints allowed",
                MAX_WAYPOINTS_PER_REQUEST
            )));
        }

        let url = self.directions_url();
        let body = DirectionsRequest::walking(waypoints);

        tracing::debug!(
            waypoints = waypoints.len(),
            "OpenRouteService request: {} waypoints",
            waypoints.len()
        );

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::RoutingApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = describe_error_body(&error_text);
            tracing::warn!(
                status = %status,
                waypoints = waypoints.len(),
                "OpenRouteService HTTP error {}: {}",
                status, message
            );
            return Err(AppError::RoutingApi(format!("HTTP {}: {}", status, message)));
        }

        let directions: DirectionsFeatureCollection = response
            .json()
            .await
            .map_err(|e| AppError::RoutingApi(format!("Failed to parse response: {}", e)))?;

        let Some(route) = directions.features.into_iter().next() else {
            tracing::warn!(
                waypoints = waypoints.len(),
                "OpenRouteService returned 0 routes for {} waypoints",
                waypoints.len()
            );
            return Err(AppError::RoutingApi("No routes found".to_string()));
        };

        tracing::debug!(
            distance_km = %format!("{:.2}", route.distance_km()),
            duration_min = route.duration_minutes(),
            path_points = route.geometry.coordinates.len(),
            "OpenRouteService response: {:.2}km, {}min, {} path points",
            route.distance_km(), route.duration_minutes(), route.geometry.coordinates.len()
        );

        Ok(route)
    }
}

// OpenRouteService wire types

#[derive(Debug, Serialize)]
struct DirectionsRequest {
    coordinates: Vec<[f64; 2]>,
    options: DirectionsOptions,
}

#[derive(Debug, Serialize)]
struct DirectionsOptions {
    avoid_features: &'static [&'static str],
}

impl DirectionsRequest {
    fn walking(waypoints: &[Coordinates]) -> Self {
        DirectionsRequest {
            coordinates: waypoints.iter().map(Coordinates::to_lng_lat).collect(),
            options: DirectionsOptions {
                avoid_features: AVOID_FEATURES,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsFeatureCollection {
    #[serde(default)]
    features: Vec<RouteResult>,
}

/// `{"error": {"code": 2010, "message": "..."}}` or `{"error": "..."}`
#[derive(Debug, Deserialize)]
struct OrsErrorPayload {
    error: OrsError,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OrsError {
    Detailed { code: u32, message: String },
    Plain(String),
}

fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<OrsErrorPayload>(body) {
        Ok(OrsErrorPayload {
            error: OrsError::Detailed { code, message },
        }) => format!("{} (code {})", message, code),
        Ok(OrsErrorPayload {
            error: OrsError::Plain(message),
        }) => message,
        Err(_) => body.to_string(),
    }
}
