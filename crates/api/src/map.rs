use crate::models::geo::GeoPoint;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Opaque marker identity issued by the surface. Handles from a
/// previous resync pass are invalid once removed.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(transparent)]
pub struct MarkerHandle(pub u64);

/// The three marker colors the dashboard ever renders.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Amber,
    Green,
}

impl MarkerColor {
    pub fn hex(self) -> &'static str {
        match self {
            MarkerColor::Red => "#f43f5e",
            MarkerColor::Amber => "#f59e0b",
            MarkerColor::Green => "#10b981",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub struct MarkerStyle {
    pub color: MarkerColor,
    /// Visually enlarged (hovered or selected asset).
    pub highlighted: bool,
}

/// Capability boundary to the mapping backend. The core never assumes
/// anything of a map beyond these five operations.
pub trait MapSurface {
    fn create_map(&mut self, center: GeoPoint, zoom: u8);

    fn place_marker(&mut self, at: GeoPoint, style: MarkerStyle) -> MarkerHandle;

    fn remove_marker(&mut self, handle: MarkerHandle);

    fn pan_to(&mut self, center: GeoPoint, zoom: u8, animate: bool);

    fn destroy_map(&mut self);
}
