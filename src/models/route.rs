use crate::constants::{MAX_DURATION_MINUTES, WALKING_SPEED_KMH};
use crate::models::distance::{DistanceKm, DistanceMeters};
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geometric pattern a waypoint loop was built from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoopShape {
    Square,
    Triangle,
    Hexagon,
    /// Fallback attempted only when every other shape failed
    Rectangle,
}

impl fmt::Display for LoopShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopShape::Square => write!(f, "square"),
            LoopShape::Triangle => write!(f, "triangle"),
            LoopShape::Hexagon => write!(f, "hexagon"),
            LoopShape::Rectangle => write!(f, "rectangle"),
        }
    }
}

/// Closed sequence of coordinates: starts and ends at the same point.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointLoop {
    pub shape: LoopShape,
    pub coordinates: Vec<Coordinates>,
}

impl WaypointLoop {
    /// Wraps `waypoints` with `start` on both ends.
    pub fn closed(shape: LoopShape, start: Coordinates, waypoints: Vec<Coordinates>) -> Self {
        let mut coordinates = Vec::with_capacity(waypoints.len() + 2);
        coordinates.push(start);
        coordinates.extend(waypoints);
        coordinates.push(start);
        WaypointLoop { shape, coordinates }
    }

    pub fn start(&self) -> Option<&Coordinates> {
        self.coordinates.first()
    }

    /// Intermediate points, without the start/end duplicates
    pub fn waypoints(&self) -> &[Coordinates] {
        match self.coordinates.len() {
            0..=2 => &[],
            n => &self.coordinates[1..n - 1],
        }
    }
}

/// A walkable route returned by the directions provider, kept in the
/// provider's GeoJSON feature layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteResult {
    pub geometry: RouteGeometry,
    pub properties: RouteProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteGeometry {
    /// [lng, lat] pairs
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteProperties {
    pub summary: RouteSummary,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RouteSummary {
    /// meters
    #[serde(default)]
    pub distance: f64,
    /// seconds
    #[serde(default)]
    pub duration: f64,
}

impl RouteResult {
    pub fn new(coordinates: Vec<[f64; 2]>, distance_meters: f64, duration_seconds: f64) -> Self {
        RouteResult {
            geometry: RouteGeometry { coordinates },
            properties: RouteProperties {
                summary: RouteSummary {
                    distance: distance_meters,
                    duration: duration_seconds,
                },
            },
        }
    }

    pub fn distance_km(&self) -> f64 {
        DistanceMeters(self.properties.summary.distance).to_km().as_km()
    }

    pub fn duration_minutes(&self) -> u32 {
        (self.properties.summary.duration / 60.0).round() as u32
    }

    /// Path as our Coordinates type, dropping non-finite positions
    pub fn path(&self) -> Vec<Coordinates> {
        self.geometry
            .coordinates
            .iter()
            .filter_map(|pair| Coordinates::from_lng_lat(*pair).ok())
            .collect()
    }

    /// "842m" or "2.5km"
    pub fn format_distance(&self) -> String {
        DistanceMeters(self.properties.summary.distance).to_string()
    }

    /// "34min"
    pub fn format_duration(&self) -> String {
        format!("{}min", self.duration_minutes())
    }
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct LoopRouteRequest {
    pub start_point: Coordinates,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

/// What the caller asked for, after validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopTarget {
    Duration(u32),
    Distance(DistanceKm),
}

impl LoopRouteRequest {
    /// Accepts exactly one of `duration_minutes` in `[1, 180]` or a
    /// positive `distance_km` no longer than a 180 minute walk.
    pub fn validate(&self) -> Result<LoopTarget, String> {
        match (self.duration_minutes, self.distance_km) {
            (Some(_), Some(_)) => {
                Err("Provide either duration_minutes or distance_km, not both".to_string())
            }
            (None, None) => Err("One of duration_minutes or distance_km is required".to_string()),
            (Some(minutes), None) => {
                if !(1..=MAX_DURATION_MINUTES).contains(&minutes) {
                    return Err(format!(
                        "duration_minutes must be between 1 and {}",
                        MAX_DURATION_MINUTES
                    ));
                }
                Ok(LoopTarget::Duration(minutes))
            }
            (None, Some(km)) => {
                let max_km =
                    DistanceKm::from_walking_minutes(MAX_DURATION_MINUTES as f64, WALKING_SPEED_KMH);
                if !km.is_finite() || km <= 0.0 || km > max_km.as_km() {
                    return Err(format!(
                        "distance_km must be greater than 0 and at most {}",
                        max_km.as_km()
                    ));
                }
                Ok(LoopTarget::Distance(DistanceKm(km)))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub target_distance_km: f64,
    pub routes: Vec<RouteResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
