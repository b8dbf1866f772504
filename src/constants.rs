//! Stable application-wide constants.
//!
//! Values here are geometry coefficients, provider limits, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! Deployment settings (host, port, API key) live in
//! [`Config`](crate::config::Config).

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Walking model ---

/// Average walking speed used to turn a duration into a target distance.
pub const WALKING_SPEED_KMH: f64 = 5.0;
/// Longest walk accepted at the API boundary (3 hours).
pub const MAX_DURATION_MINUTES: u32 = 180;

// --- Geometry ---

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Rough length of one degree of latitude. Also used, divided by
/// cos(latitude), for one degree of longitude.
pub const KM_PER_DEGREE: f64 = 111.0;
/// Diagonal compass offsets are shrunk by this factor on both axes so that
/// NE/SE/SW/NW points land roughly on the same circle as N/E/S/W.
pub const DIAGONAL_SCALE: f64 = 0.7;

/// Radius divisors for each loop shape (target distance / divisor = radius).
/// Empirical: tuned so the provider's snapped path lands near the target,
/// not derived from the polygon perimeter.
pub const SQUARE_RADIUS_DIVISOR: f64 = 4.0;
pub const TRIANGLE_RADIUS_DIVISOR: f64 = 3.0;
pub const HEXAGON_RADIUS_DIVISOR: f64 = 6.0;
/// Side length of the fallback rectangle as a fraction of the target distance.
pub const FALLBACK_SIDE_DIVISOR: f64 = 4.0;

// --- OpenRouteService ---

/// Default OpenRouteService host. Overridden by `OPENROUTE_BASE_URL`.
pub const OPENROUTE_DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";
/// Walking directions endpoint returning a GeoJSON feature collection.
pub const OPENROUTE_WALKING_PATH: &str = "/v2/directions/foot-walking/geojson";
/// Way classes the provider is always asked to avoid.
pub const AVOID_FEATURES: &[&str] = &["highways"];
/// OpenRouteService refuses requests with more than 50 waypoints.
pub const MAX_WAYPOINTS_PER_REQUEST: usize = 50;
