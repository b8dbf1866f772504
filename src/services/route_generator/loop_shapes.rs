use super::geometry::{degree_offsets, offset_waypoints};
use crate::constants::{
    FALLBACK_SIDE_DIVISOR, HEXAGON_RADIUS_DIVISOR, SQUARE_RADIUS_DIVISOR,
    TRIANGLE_RADIUS_DIVISOR,
};
use crate::models::{Coordinates, LoopShape, WaypointLoop};

/// Shapes tried for every request, in attempt order
pub const LOOP_VARIATIONS: [LoopShape; 3] =
    [LoopShape::Square, LoopShape::Triangle, LoopShape::Hexagon];

impl LoopShape {
    /// Target distance divided by this gives the waypoint radius (or, for
    /// the rectangle, the side length).
    pub fn radius_divisor(&self) -> f64 {
        match self {
            LoopShape::Square => SQUARE_RADIUS_DIVISOR,
            LoopShape::Triangle => TRIANGLE_RADIUS_DIVISOR,
            LoopShape::Hexagon => HEXAGON_RADIUS_DIVISOR,
            LoopShape::Rectangle => FALLBACK_SIDE_DIVISOR,
        }
    }

    /// Intermediate waypoints between the start and the return to start
    pub fn waypoint_count(&self) -> usize {
        match self {
            LoopShape::Square => 4,
            LoopShape::Triangle => 3,
            LoopShape::Hexagon => 6,
            LoopShape::Rectangle => 3,
        }
    }

    pub fn radius_km(&self, target_distance_km: f64) -> f64 {
        target_distance_km / self.radius_divisor()
    }
}

/// Build the square, triangle and hexagon loops around the start.
///
/// Each loop takes the first N compass waypoints at its own radius, so the
/// shapes are independent of each other. The divisors are heuristics: the
/// provider's snapped path length depends on the street network, not on the
/// straight-line perimeter.
pub fn build_loop_variations(
    start_lat: f64,
    start_lng: f64,
    target_distance_km: f64,
) -> Vec<WaypointLoop> {
    let start = Coordinates {
        lat: start_lat,
        lng: start_lng,
    };

    LOOP_VARIATIONS
        .iter()
        .map(|shape| {
            let radius_km = shape.radius_km(target_distance_km);
            let waypoints =
                offset_waypoints(start_lat, start_lng, radius_km, shape.waypoint_count());
            WaypointLoop::closed(*shape, start, waypoints)
        })
        .collect()
}

/// Axis-aligned rectangle east and north of the start, each side a quarter
/// of the target distance.
pub fn fallback_rectangle(start: Coordinates, target_distance_km: f64) -> WaypointLoop {
    let side_km = LoopShape::Rectangle.radius_km(target_distance_km);
    let (lat_offset, lng_offset) = degree_offsets(start.lat, side_km);

    let corners = vec![
        Coordinates {
            lat: start.lat,
            lng: start.lng + lng_offset,
        },
        Coordinates {
            lat: start.lat + lat_offset,
            lng: start.lng + lng_offset,
        },
        Coordinates {
            lat: start.lat + lat_offset,
            lng: start.lng,
        },
    ];

    WaypointLoop::closed(LoopShape::Rectangle, start, corners)
}
