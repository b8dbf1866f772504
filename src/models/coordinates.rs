use crate::constants::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Only non-finite values are rejected. Out-of-range latitudes or
    /// longitudes are accepted and passed through to the provider as-is.
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !lat.is_finite() {
            return Err(format!("Invalid latitude: {} (must be finite)", lat));
        }
        if !lng.is_finite() {
            return Err(format!("Invalid longitude: {} (must be finite)", lng));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Build from a GeoJSON `[lng, lat]` pair
    pub fn from_lng_lat(pair: [f64; 2]) -> Result<Self, String> {
        Coordinates::new(pair[1], pair[0])
    }

    /// GeoJSON position order, as the directions provider expects it
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        distance_between(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Great-circle distance in kilometers between two points given in degrees.
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
