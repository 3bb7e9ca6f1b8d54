use crate::model::{AssetRecord, AssetStore};

/// The lowercase text an asset is matched against: its descriptive
/// fields joined with single spaces, in a fixed order.
pub fn search_blob(asset: &AssetRecord) -> String {
    [
        asset.name.as_str(),
        asset.address.as_str(),
        asset.category.as_str(),
        asset.landmarks.as_str(),
        asset.road_context.as_str(),
        asset.leasing_contact.as_str(),
        asset.management_unit.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Derive the visible subset for a search term: an order-preserving
/// subsequence of the store.
///
/// The term is trimmed and split on whitespace runs; an asset matches
/// iff every keyword is a case-insensitive substring of its blob. An
/// empty or all-whitespace term is the identity.
pub fn visible_assets<'a>(store: &'a AssetStore, search_term: &str) -> Vec<&'a AssetRecord> {
    let term = search_term.trim().to_lowercase();
    if term.is_empty() {
        return store.iter().collect();
    }

    let keywords: Vec<&str> = term.split_whitespace().collect();

    store
        .iter()
        .filter(|asset| {
            let blob = search_blob(asset);
            keywords.iter().all(|keyword| blob.contains(keyword))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssetId, FeeValue, VacancyLevel};

    fn asset(id: u32, name: &str, address: &str, category: &str) -> AssetRecord {
        AssetRecord {
            id: AssetId(id),
            name: name.to_string(),
            category: category.to_string(),
            address: address.to_string(),
            geometry: String::new(),
            road_context: String::new(),
            landmarks: String::new(),
            operating_total_sqm: None,
            asset_total_sqm: None,
            operating_sqm: None,
            vacant_area_sqm: 0.0,
            vacancy_rate_percent: 0.0,
            vacancy_level: VacancyLevel::None,
            rent_per_sqm_month: String::new(),
            management_fee: FeeValue::Text(String::new()),
            leasing_contact: String::new(),
            operations_contact: String::new(),
            management_unit: String::new(),
        }
    }

    fn sample() -> AssetStore {
        AssetStore::new(vec![
            asset(1, "Riverside Plaza", "100 Jinjiang Road", "Commercial"),
            asset(2, "North Gate Depot", "8 Station Street", "Warehouse"),
            asset(3, "Jinjiang Tower", "55 River Avenue", "Office"),
        ])
        .unwrap()
    }

    fn ids(matches: &[&AssetRecord]) -> Vec<u32> {
        matches.iter().map(|a| a.id.0).collect()
    }

    #[test]
    fn empty_term_is_identity() {
        let store = sample();
        assert_eq!(ids(&visible_assets(&store, "")), vec![1, 2, 3]);
        assert_eq!(ids(&visible_assets(&store, "   \t ")), vec![1, 2, 3]);
    }

    #[test]
    fn keywords_combine_with_and() {
        let store = sample();
        assert_eq!(ids(&visible_assets(&store, "jinjiang")), vec![1, 3]);
        assert_eq!(ids(&visible_assets(&store, "jinjiang plaza")), vec![1]);
        assert_eq!(ids(&visible_assets(&store, "plaza jinjiang")), vec![1]);
        assert!(visible_assets(&store, "jinjiang depot").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let store = sample();
        assert_eq!(
            ids(&visible_assets(&store, "JINJIANG")),
            ids(&visible_assets(&store, "jinjiang"))
        );
    }

    #[test]
    fn consecutive_spaces_collapse() {
        let store = sample();
        assert_eq!(ids(&visible_assets(&store, "  jinjiang   plaza ")), vec![1]);
    }

    #[test]
    fn results_preserve_load_order() {
        let store = sample();
        // "r" hits all three; order must stay 1, 2, 3.
        assert_eq!(ids(&visible_assets(&store, "r")), vec![1, 2, 3]);
    }
}
