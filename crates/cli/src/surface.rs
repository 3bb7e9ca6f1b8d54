use assetmap_api::map::{MapSurface, MarkerColor, MarkerHandle, MarkerStyle};
use assetmap_api::models::GeoPoint;
use indexmap::IndexMap;
use nu_ansi_term::Color;

/// Terminal stand-in for the mapping backend: tracks the placed
/// markers and the camera and renders them as a one-line viewport
/// summary instead of tiles.
pub struct TermMap {
    markers: IndexMap<MarkerHandle, (GeoPoint, MarkerStyle)>,
    camera: Option<(GeoPoint, u8)>,
    next_handle: u64,
}

impl TermMap {
    pub fn new() -> Self {
        Self {
            markers: IndexMap::new(),
            camera: None,
            next_handle: 0,
        }
    }

    pub fn status_line(&self) -> String {
        let mut red = 0usize;
        let mut amber = 0usize;
        let mut green = 0usize;
        let mut highlighted = 0usize;
        for (_, style) in self.markers.values() {
            match style.color {
                MarkerColor::Red => red += 1,
                MarkerColor::Amber => amber += 1,
                MarkerColor::Green => green += 1,
            }
            if style.highlighted {
                highlighted += 1;
            }
        }

        let dots = format!(
            "{} {}  {} {}  {} {}",
            Color::Red.paint("●"),
            red,
            Color::Yellow.paint("●"),
            amber,
            Color::Green.paint("●"),
            green,
        );

        let camera = match self.camera {
            Some((center, zoom)) => {
                format!("camera {:.4},{:.4} z{}", center.lat, center.lng, zoom)
            }
            None => "no camera".to_string(),
        };

        format!(
            "map: {}  |  {} highlighted  |  {}",
            dots, highlighted, camera
        )
    }
}

impl Default for TermMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSurface for TermMap {
    fn create_map(&mut self, center: GeoPoint, zoom: u8) {
        self.camera = Some((center, zoom));
    }

    fn place_marker(&mut self, at: GeoPoint, style: MarkerStyle) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle);
        self.next_handle += 1;
        self.markers.insert(handle, (at, style));
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.markers.shift_remove(&handle);
    }

    fn pan_to(&mut self, center: GeoPoint, zoom: u8, _animate: bool) {
        self.camera = Some((center, zoom));
    }

    fn destroy_map(&mut self) {
        self.markers.clear();
        self.camera = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_markers_and_camera() {
        let mut map = TermMap::new();
        map.create_map(GeoPoint::new(30.0, 104.0), 11);

        let a = map.place_marker(
            GeoPoint::new(30.1, 104.1),
            MarkerStyle {
                color: MarkerColor::Red,
                highlighted: false,
            },
        );
        let b = map.place_marker(
            GeoPoint::new(30.2, 104.2),
            MarkerStyle {
                color: MarkerColor::Green,
                highlighted: true,
            },
        );
        assert_ne!(a, b);
        assert_eq!(map.markers.len(), 2);

        map.remove_marker(a);
        assert_eq!(map.markers.len(), 1);

        map.pan_to(GeoPoint::new(30.2, 104.2), 15, true);
        assert_eq!(map.camera.unwrap().1, 15);

        map.destroy_map();
        assert!(map.markers.is_empty());
        assert!(map.camera.is_none());
    }
}
