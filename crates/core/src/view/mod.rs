use assetmap_api::models::{AssetId, ViewportClass, Visibility};

/// Panel visibility as a pure function of the three state inputs.
///
/// The detail panel follows the selection. The list needs an active
/// search, and on narrow viewports an active selection suppresses it
/// in favor of the detail panel.
pub fn visibility(
    search_term: &str,
    selected: Option<AssetId>,
    viewport: ViewportClass,
) -> Visibility {
    let searching = !search_term.trim().is_empty();
    let show_detail = selected.is_some();
    let show_list = searching && (viewport == ViewportClass::Desktop || selected.is_none());
    Visibility {
        show_list,
        show_detail,
    }
}
