use assetmap_api::map::{MapSurface, MarkerHandle};
use assetmap_api::models::{AssetId, ViewportClass, Visibility};
use tracing::debug;

use crate::config::DashboardConfig;
use crate::model::{AssetRecord, AssetStore};
use crate::query::visible_assets;
use crate::session::SessionState;
use crate::sync::MapAdapter;
use crate::view;

/// Dashboard handle - the single owner of store, session state and map
/// adapter, and the only mutation surface for clients.
///
/// Every mutation is followed by one explicit resync, so the map and
/// the panel visibility can never drift from the session state.
pub struct Dashboard<S: MapSurface> {
    store: AssetStore,
    session: SessionState,
    adapter: MapAdapter<S>,
    viewport: ViewportClass,
}

impl<S: MapSurface> Dashboard<S> {
    /// Create the map at the configured start-up camera and render the
    /// initial (unfiltered, unselected) state.
    pub fn new(store: AssetStore, surface: S, config: DashboardConfig) -> Self {
        let mut adapter = MapAdapter::new(surface);
        adapter.open(config.center, config.zoom);

        let mut dashboard = Self {
            store,
            session: SessionState::new(),
            adapter,
            viewport: config.viewport,
        };
        dashboard.resync();
        dashboard
    }

    // ---- Mutations (each one resyncs) ----

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.session.set_search_term(term);
        self.resync();
    }

    pub fn select(&mut self, id: AssetId) {
        self.session.select(id);
        self.resync();
    }

    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
        self.resync();
    }

    pub fn set_hovered(&mut self, id: Option<AssetId>) {
        self.session.set_hovered(id);
        self.resync();
    }

    /// Route a surface click to a selection. Clicks on markers that no
    /// longer exist (stale handle after a resync) are ignored.
    pub fn marker_clicked(&mut self, handle: MarkerHandle) {
        match self.adapter.asset_for_marker(handle) {
            Some(id) => self.select(id),
            None => debug!(?handle, "click on stale marker ignored"),
        }
    }

    // ---- Read accessors ----

    pub fn visible(&self) -> Vec<&AssetRecord> {
        visible_assets(&self.store, self.session.search_term())
    }

    pub fn selected(&self) -> Option<AssetId> {
        self.session.selected()
    }

    pub fn selected_asset(&self) -> Option<&AssetRecord> {
        self.session.selected().and_then(|id| self.store.get(id))
    }

    pub fn hovered(&self) -> Option<AssetId> {
        self.session.hovered()
    }

    pub fn search_term(&self) -> &str {
        self.session.search_term()
    }

    pub fn visibility(&self) -> Visibility {
        view::visibility(
            self.session.search_term(),
            self.session.selected(),
            self.viewport,
        )
    }

    pub fn total_assets(&self) -> usize {
        self.store.len()
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn surface(&self) -> &S {
        self.adapter.surface()
    }

    /// Tear the map down. The session state dies with the handle.
    pub fn close(self) {
        self.adapter.close();
    }

    fn resync(&mut self) {
        let list_shown = self.visibility().show_list;
        let visible = visible_assets(&self.store, self.session.search_term());
        self.adapter
            .resync(&visible, &self.session, &self.store, self.viewport, list_shown);
    }
}
