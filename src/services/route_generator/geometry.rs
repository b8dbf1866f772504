use crate::constants::{DIAGONAL_SCALE, KM_PER_DEGREE};
use crate::models::Coordinates;

/// Unit offsets (lat factor, lng factor) in the fixed order
/// N, E, S, W, NE, SE, SW, NW. Callers index into this order.
const COMPASS_DIRECTIONS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (0.0, 1.0),
    (-1.0, 0.0),
    (0.0, -1.0),
    (DIAGONAL_SCALE, DIAGONAL_SCALE),
    (-DIAGONAL_SCALE, DIAGONAL_SCALE),
    (-DIAGONAL_SCALE, -DIAGONAL_SCALE),
    (DIAGONAL_SCALE, -DIAGONAL_SCALE),
];

/// Number of compass directions `offset_waypoints` can produce.
pub const MAX_COMPASS_WAYPOINTS: usize = COMPASS_DIRECTIONS.len();

/// Convert a radius in km to (lat, lng) degree offsets at `center_lat`.
/// Flat-Earth approximation: fine for a few km, meaningless near the poles.
pub fn degree_offsets(center_lat: f64, radius_km: f64) -> (f64, f64) {
    let lat_offset = radius_km / KM_PER_DEGREE;
    let lng_offset = radius_km / (KM_PER_DEGREE * center_lat.to_radians().cos());
    (lat_offset, lng_offset)
}

/// Place up to eight waypoints around a center at `radius_km`, one per
/// compass direction, in N/E/S/W/NE/SE/SW/NW order. `count` above eight is
/// clamped.
pub fn offset_waypoints(
    center_lat: f64,
    center_lng: f64,
    radius_km: f64,
    count: usize,
) -> Vec<Coordinates> {
    let (lat_offset, lng_offset) = degree_offsets(center_lat, radius_km);

    COMPASS_DIRECTIONS
        .iter()
        .take(count.min(MAX_COMPASS_WAYPOINTS))
        .map(|(lat_factor, lng_factor)| Coordinates {
            lat: center_lat + lat_factor * lat_offset,
            lng: center_lng + lng_factor * lng_offset,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_zero_count_is_empty() {
        assert!(offset_waypoints(40.0, -73.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_count_is_clamped() {
        assert_eq!(offset_waypoints(40.0, -73.0, 1.0, 8).len(), 8);
        assert_eq!(offset_waypoints(40.0, -73.0, 1.0, 9).len(), 8);
        assert_eq!(offset_waypoints(40.0, -73.0, 1.0, usize::MAX).len(), 8);
    }

    #[test]
    fn test_compass_order() {
        let (lat, lng) = (40.0, -73.0);
        let points = offset_waypoints(lat, lng, 1.11, 8);
        let (dlat, dlng) = degree_offsets(lat, 1.11);

        // N, E, S, W
        assert!((points[0].lat - (lat + dlat)).abs() < EPS && points[0].lng == lng);
        assert!(points[1].lat == lat && (points[1].lng - (lng + dlng)).abs() < EPS);
        assert!((points[2].lat - (lat - dlat)).abs() < EPS && points[2].lng == lng);
        assert!(points[3].lat == lat && (points[3].lng - (lng - dlng)).abs() < EPS);

        // NE, SE, SW, NW with 0.7 scaling
        let signs = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
        for (point, (slat, slng)) in points[4..].iter().zip(signs) {
            assert!((point.lat - (lat + slat * 0.7 * dlat)).abs() < EPS);
            assert!((point.lng - (lng + slng * 0.7 * dlng)).abs() < EPS);
        }
    }

    #[test]
    fn test_prefix_is_stable() {
        let all = offset_waypoints(51.5, -0.12, 0.8, 8);
        let three = offset_waypoints(51.5, -0.12, 0.8, 3);
        assert_eq!(&all[..3], &three[..]);
        assert_eq!(three, offset_waypoints(51.5, -0.12, 0.8, 3));
    }

    #[test]
    fn test_degree_offsets() {
        let (dlat, dlng) = degree_offsets(0.0, 111.0);
        assert!((dlat - 1.0).abs() < EPS);
        assert!((dlng - 1.0).abs() < EPS);

        // Longitude degrees shrink with latitude
        let (dlat, dlng) = degree_offsets(60.0, 111.0);
        assert!((dlat - 1.0).abs() < EPS);
        assert!((dlng - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_north_point_is_roughly_radius_away() {
        let points = offset_waypoints(40.0, -73.0, 0.625, 1);
        let d = crate::models::distance_between(40.0, -73.0, points[0].lat, points[0].lng);
        assert!((d - 0.625).abs() < 0.01, "got {}km", d);
    }
}
