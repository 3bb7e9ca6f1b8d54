use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// WGS84 coordinate pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, JsonSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse a `"lat,lng"` geometry string. Anything that is not exactly
    /// two parseable finite numbers yields `None` (the record is then
    /// unplaceable on the map but still valid everywhere else).
    pub fn parse(text: &str) -> Option<GeoPoint> {
        let mut parts = text.split(',');
        let lat: f64 = parts.next()?.trim().parse().ok()?;
        let lng: f64 = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        Some(GeoPoint { lat, lng })
    }
}
