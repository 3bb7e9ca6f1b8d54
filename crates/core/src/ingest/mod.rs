//! Catalog ingest: deserializes the raw asset records supplied by the
//! data collaborator into the immutable [`AssetStore`].
//!
//! Malformed geometry is tolerated here on purpose: the record loads
//! and simply never places a marker. Structural problems (unreadable
//! input, unknown vacancy labels, duplicate ids) are load-time errors.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::model::{AssetId, AssetRecord, AssetStore, FeeValue, VacancyLevel};

/// On-disk shape of one record, before validation.
#[derive(Deserialize, Debug)]
struct RawAsset {
    id: u32,
    name: String,
    category: String,
    address: String,
    geometry: String,
    #[serde(default)]
    road_context: String,
    #[serde(default)]
    landmarks: String,
    #[serde(default)]
    operating_total_sqm: Option<f64>,
    #[serde(default)]
    asset_total_sqm: Option<f64>,
    #[serde(default)]
    operating_sqm: Option<f64>,
    #[serde(default)]
    vacant_area_sqm: f64,
    #[serde(default)]
    vacancy_rate_percent: f64,
    vacancy_level: VacancyLevel,
    #[serde(default)]
    rent_per_sqm_month: String,
    #[serde(default)]
    management_fee: FeeValue,
    #[serde(default)]
    leasing_contact: String,
    #[serde(default)]
    operations_contact: String,
    #[serde(default)]
    management_unit: String,
}

impl From<RawAsset> for AssetRecord {
    fn from(raw: RawAsset) -> Self {
        AssetRecord {
            id: AssetId(raw.id),
            name: raw.name,
            category: raw.category,
            address: raw.address,
            geometry: raw.geometry,
            road_context: raw.road_context,
            landmarks: raw.landmarks,
            operating_total_sqm: raw.operating_total_sqm,
            asset_total_sqm: raw.asset_total_sqm,
            operating_sqm: raw.operating_sqm,
            vacant_area_sqm: raw.vacant_area_sqm,
            vacancy_rate_percent: raw.vacancy_rate_percent,
            vacancy_level: raw.vacancy_level,
            rent_per_sqm_month: raw.rent_per_sqm_month,
            management_fee: raw.management_fee,
            leasing_contact: raw.leasing_contact,
            operations_contact: raw.operations_contact,
            management_unit: raw.management_unit,
        }
    }
}

pub fn load_from_reader(reader: impl Read) -> Result<AssetStore> {
    let raw: Vec<RawAsset> = serde_json::from_reader(reader)?;
    let records: Vec<AssetRecord> = raw.into_iter().map(AssetRecord::from).collect();
    let store = AssetStore::new(records)?;
    info!(assets = store.len(), "asset catalog loaded");
    Ok(store)
}

pub fn load_from_path(path: &Path) -> Result<AssetStore> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "name": "Riverside Plaza",
            "category": "Commercial",
            "address": "100 Jinjiang Road",
            "geometry": "30.66, 104.07",
            "landmarks": "East Lake Park",
            "operating_total_sqm": 1200.5,
            "vacancy_rate_percent": 35.0,
            "vacancy_level": "high",
            "management_fee": 6.5,
            "leasing_contact": "Wang Lei 13800001111",
            "operations_contact": "/"
        },
        {
            "id": 2,
            "name": "North Gate Depot",
            "category": "Warehouse",
            "address": "8 Station Street",
            "geometry": "not-a-point",
            "vacancy_level": "none",
            "management_fee": "25-40"
        }
    ]"#;

    #[test]
    fn loads_records_in_order() {
        let store = load_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(store.len(), 2);

        let first = store.get(AssetId(1)).unwrap();
        assert_eq!(first.name, "Riverside Plaza");
        assert_eq!(first.vacancy_level, VacancyLevel::High);
        assert_eq!(first.area_sqm(), Some(1200.5));
        assert!(first.is_placeable());
        assert_eq!(first.management_fee, FeeValue::Amount(6.5));

        let second = store.get(AssetId(2)).unwrap();
        assert!(!second.is_placeable());
        assert_eq!(second.management_fee, FeeValue::Text("25-40".to_string()));
    }

    #[test]
    fn unknown_vacancy_label_is_rejected() {
        let input = r#"[{"id": 1, "name": "x", "category": "", "address": "",
                         "geometry": "", "vacancy_level": "catastrophic"}]"#;
        assert!(load_from_reader(input.as_bytes()).is_err());
    }

    #[test]
    fn duplicate_id_is_a_data_error() {
        let input = r#"[
            {"id": 7, "name": "a", "category": "", "address": "", "geometry": "", "vacancy_level": "low"},
            {"id": 7, "name": "b", "category": "", "address": "", "geometry": "", "vacancy_level": "low"}
        ]"#;
        assert!(load_from_reader(input.as_bytes()).is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let store = load_from_path(file.path()).unwrap();
        assert_eq!(store.len(), 2);
    }
}
