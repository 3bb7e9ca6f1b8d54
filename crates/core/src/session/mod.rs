use crate::model::AssetId;

/// Process-local view-session state: the search term plus the two
/// independent highlight targets. Created empty, discarded on
/// teardown, never persisted.
///
/// Fields are private so call sites go through the mutators and cannot
/// desynchronize the two ids.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    search_term: String,
    selected: Option<AssetId>,
    hovered: Option<AssetId>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected(&self) -> Option<AssetId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<AssetId> {
        self.hovered
    }

    /// Raw text as typed; trimming and keyword splitting happen in the
    /// filter engine.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Selection is intentionally not validated against the current
    /// visible set: selecting via a map marker must work even when a
    /// filter would exclude the asset.
    pub fn select(&mut self, id: AssetId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn set_hovered(&mut self, id: Option<AssetId>) {
        self.hovered = id;
    }
}
