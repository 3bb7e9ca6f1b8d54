use assetmap_api::map::{MapSurface, MarkerHandle, MarkerStyle};
use assetmap_api::models::{AssetId, GeoPoint, ViewportClass};
use indexmap::IndexMap;
use tracing::debug;

use crate::model::{AssetRecord, AssetStore};
use crate::session::SessionState;

/// Camera height when focusing a selected asset.
pub const FOCUS_ZOOM: u8 = 15;

// Panel compensation weights, in degrees. Desktop panels flank the map
// horizontally; the mobile detail sheet covers the bottom half.
const LIST_PANEL_LNG_WEIGHT: f64 = 0.007;
const DETAIL_PANEL_LNG_WEIGHT: f64 = -0.011;
const MOBILE_SHEET_LAT_OFFSET: f64 = -0.006;

/// Translates filter and selection state into marker and camera
/// commands against the map capability. The surface is fully
/// re-populated on every resync and fully torn down on close.
pub struct MapAdapter<S: MapSurface> {
    surface: S,
    markers: IndexMap<MarkerHandle, AssetId>,
}

impl<S: MapSurface> MapAdapter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            markers: IndexMap::new(),
        }
    }

    pub fn open(&mut self, center: GeoPoint, zoom: u8) {
        self.surface.create_map(center, zoom);
    }

    pub fn close(mut self) {
        let placed: Vec<MarkerHandle> = self.markers.drain(..).map(|(handle, _)| handle).collect();
        for handle in placed {
            self.surface.remove_marker(handle);
        }
        self.surface.destroy_map();
    }

    /// Resolve a surface click back to the asset whose marker it hit.
    /// Handles from before the latest resync resolve to `None`.
    pub fn asset_for_marker(&self, handle: MarkerHandle) -> Option<AssetId> {
        self.markers.get(&handle).copied()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Idempotent reconciliation of the surface with the current state:
    /// full marker replace (not a diff; catalogs are small), then a
    /// camera move if the selection resolves to a placeable asset.
    ///
    /// The selection resolves against the full store, not the visible
    /// set: the camera follows a selected asset even when the filter
    /// currently hides it.
    pub fn resync(
        &mut self,
        visible: &[&AssetRecord],
        session: &SessionState,
        store: &AssetStore,
        viewport: ViewportClass,
        list_shown: bool,
    ) {
        let stale: Vec<MarkerHandle> = self.markers.drain(..).map(|(handle, _)| handle).collect();
        for handle in stale {
            self.surface.remove_marker(handle);
        }

        for asset in visible {
            // Unplaceable assets stay in lists but never on the map.
            let Some(at) = asset.location() else { continue };
            let highlighted =
                session.hovered() == Some(asset.id) || session.selected() == Some(asset.id);
            let style = MarkerStyle {
                color: asset.marker_color(),
                highlighted,
            };
            let handle = self.surface.place_marker(at, style);
            self.markers.insert(handle, asset.id);
        }

        let focus = session
            .selected()
            .and_then(|id| store.get(id))
            .and_then(|asset| asset.location());
        if let Some(at) = focus {
            let target = offset_focus(at, viewport, list_shown);
            self.surface.pan_to(target, FOCUS_ZOOM, true);
        }

        debug!(
            markers = self.markers.len(),
            selected = ?session.selected(),
            "map resynced"
        );
    }
}

/// Shift the camera target so the focused marker stays visually clear
/// of the panels covering the map edges.
fn offset_focus(at: GeoPoint, viewport: ViewportClass, list_shown: bool) -> GeoPoint {
    match viewport {
        ViewportClass::Desktop => {
            let list_weight = if list_shown { LIST_PANEL_LNG_WEIGHT } else { 0.0 };
            let lng_offset = list_weight + DETAIL_PANEL_LNG_WEIGHT;
            GeoPoint::new(at.lat, at.lng - lng_offset)
        }
        ViewportClass::Mobile => GeoPoint::new(at.lat + MOBILE_SHEET_LAT_OFFSET, at.lng),
    }
}
