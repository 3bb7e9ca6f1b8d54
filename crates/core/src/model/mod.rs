mod store;

pub use store::AssetStore;

// Re-export boundary models from the API layer for internal use
pub use assetmap_api::models::{AssetId, FeeValue, GeoPoint, VacancyLevel};

use assetmap_api::map::MarkerColor;
use serde::Serialize;

/// One real-estate asset as loaded at start-up. Records are immutable
/// for the lifetime of the store.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub id: AssetId,
    pub name: String,
    pub category: String,
    pub address: String,
    /// Raw comma-separated coordinate text; kept as loaded so a
    /// malformed value degrades to "unplaceable" instead of failing.
    pub geometry: String,
    pub road_context: String,
    pub landmarks: String,
    pub operating_total_sqm: Option<f64>,
    pub asset_total_sqm: Option<f64>,
    pub operating_sqm: Option<f64>,
    pub vacant_area_sqm: f64,
    pub vacancy_rate_percent: f64,
    pub vacancy_level: VacancyLevel,
    pub rent_per_sqm_month: String,
    pub management_fee: FeeValue,
    pub leasing_contact: String,
    pub operations_contact: String,
    pub management_unit: String,
}

impl AssetRecord {
    pub fn location(&self) -> Option<GeoPoint> {
        GeoPoint::parse(&self.geometry)
    }

    pub fn is_placeable(&self) -> bool {
        self.location().is_some()
    }

    /// Leasable area, resolved by first-`Some` priority: operating
    /// total, asset total, operating.
    pub fn area_sqm(&self) -> Option<f64> {
        self.operating_total_sqm
            .or(self.asset_total_sqm)
            .or(self.operating_sqm)
    }

    pub fn marker_color(&self) -> MarkerColor {
        self.vacancy_level.marker_color()
    }

    pub fn leasing(&self) -> Option<Contact<'_>> {
        Contact::parse(&self.leasing_contact)
    }

    /// "No operations contact" is a valid data state, not an error.
    pub fn operations(&self) -> Option<Contact<'_>> {
        Contact::parse(&self.operations_contact)
    }
}

/// Contact entry as loaded: a person name with an optional trailing
/// phone digit run. `/` marks an intentionally absent contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact<'a> {
    raw: &'a str,
}

impl<'a> Contact<'a> {
    pub fn parse(raw: &'a str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return None;
        }
        Some(Self { raw: trimmed })
    }

    pub fn name(&self) -> &'a str {
        self.raw
            .trim_end_matches(|c: char| c.is_ascii_digit())
            .trim_end()
    }

    pub fn phone(&self) -> Option<&'a str> {
        let start = self.raw.find(|c: char| c.is_ascii_digit())?;
        let rest = &self.raw[start..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AssetRecord {
        AssetRecord {
            id: AssetId(1),
            name: "Riverside Plaza".to_string(),
            category: "Commercial".to_string(),
            address: "100 Jinjiang Road".to_string(),
            geometry: "30.66,104.07".to_string(),
            road_context: "Second Ring".to_string(),
            landmarks: "East Lake Park".to_string(),
            operating_total_sqm: None,
            asset_total_sqm: None,
            operating_sqm: None,
            vacant_area_sqm: 120.0,
            vacancy_rate_percent: 12.0,
            vacancy_level: VacancyLevel::Medium,
            rent_per_sqm_month: "45".to_string(),
            management_fee: FeeValue::Amount(6.0),
            leasing_contact: "Wang Lei 13800001111".to_string(),
            operations_contact: "/".to_string(),
            management_unit: "Rongcheng PM Co.".to_string(),
        }
    }

    #[test]
    fn area_resolves_by_priority() {
        let mut a = record();
        assert_eq!(a.area_sqm(), None);

        a.operating_sqm = Some(300.0);
        assert_eq!(a.area_sqm(), Some(300.0));

        a.asset_total_sqm = Some(800.0);
        assert_eq!(a.area_sqm(), Some(800.0));

        a.operating_total_sqm = Some(1000.0);
        assert_eq!(a.area_sqm(), Some(1000.0));
    }

    #[test]
    fn slash_contact_is_absent() {
        let a = record();
        assert!(a.operations().is_none());

        let leasing = a.leasing().unwrap();
        assert_eq!(leasing.name(), "Wang Lei");
        assert_eq!(leasing.phone(), Some("13800001111"));
    }

    #[test]
    fn contact_without_phone() {
        let c = Contact::parse("Zhang Min").unwrap();
        assert_eq!(c.name(), "Zhang Min");
        assert_eq!(c.phone(), None);
    }

    #[test]
    fn malformed_geometry_is_unplaceable() {
        let mut a = record();
        assert!(a.is_placeable());

        a.geometry = "30.6".to_string();
        assert!(!a.is_placeable());

        a.geometry = "abc,def".to_string();
        assert!(!a.is_placeable());
    }
}
