use std::sync::{Arc, RwLock};

use assetmap_core::facade::Dashboard;

use crate::surface::TermMap;

/// Completion snapshot of the currently visible assets: id text plus
/// name, refreshed after every command.
pub type CatalogIndex = Arc<RwLock<Vec<(String, String)>>>;

pub struct ShellContext {
    pub dashboard: Dashboard<TermMap>,
    pub catalog_index: CatalogIndex,
}

impl ShellContext {
    pub fn new(dashboard: Dashboard<TermMap>) -> Self {
        let context = Self {
            dashboard,
            catalog_index: Arc::new(RwLock::new(Vec::new())),
        };
        context.refresh_index();
        context
    }

    /// Push the current visible set into the completion snapshot.
    pub fn refresh_index(&self) {
        let entries: Vec<(String, String)> = self
            .dashboard
            .visible()
            .iter()
            .map(|asset| (asset.id.to_string(), asset.name.clone()))
            .collect();
        *self.catalog_index.write().unwrap() = entries;
    }
}
