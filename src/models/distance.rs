use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance in kilometers
/// Prevents mixing up units and provides type safety
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DistanceKm(pub f64);

impl DistanceKm {
    /// Distance covered walking `minutes` at a constant `speed_kmh`.
    /// No bounds are applied: zero or negative durations give a
    /// zero or negative distance.
    pub fn from_walking_minutes(minutes: f64, speed_kmh: f64) -> Self {
        DistanceKm((minutes / 60.0) * speed_kmh)
    }

    /// Inverse of [`DistanceKm::from_walking_minutes`].
    pub fn walking_minutes(self, speed_kmh: f64) -> f64 {
        (self.0 / speed_kmh) * 60.0
    }

    /// Get the raw kilometers value
    pub fn as_km(self) -> f64 {
        self.0
    }
}

impl fmt::Display for DistanceKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}km", self.0)
    }
}

/// Distance in meters, as reported by the directions provider
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DistanceMeters(pub f64);

impl DistanceMeters {
    /// Convert to kilometers
    pub fn to_km(self) -> DistanceKm {
        DistanceKm(self.0 / 1000.0)
    }
}

/// Short human label: whole meters below 1 km, one decimal of km above.
impl fmt::Display for DistanceMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 1000.0 {
            write!(f, "{}m", self.0.round())
        } else {
            write!(f, "{:.1}km", self.0 / 1000.0)
        }
    }
}
