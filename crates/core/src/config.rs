use assetmap_api::models::{GeoPoint, ViewportClass};
use serde::{Deserialize, Serialize};

/// Start-up camera: the city-wide overview before anything is selected.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 30.657,
    lng: 104.066,
};
pub const DEFAULT_ZOOM: u8 = 11;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub center: GeoPoint,
    pub zoom: u8,
    pub viewport: ViewportClass,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            viewport: ViewportClass::Desktop,
        }
    }
}
