use std::collections::HashMap;

use crate::error::{AssetMapError, Result};
use crate::model::{AssetId, AssetRecord};

/// Immutable ordered catalog of assets, loaded once at start-up.
/// Iteration order is load order; every downstream ordering (list,
/// filter results) derives from it.
#[derive(Debug, Clone)]
pub struct AssetStore {
    records: Vec<AssetRecord>,
    by_id: HashMap<AssetId, usize>,
}

impl AssetStore {
    pub fn new(records: Vec<AssetRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if by_id.insert(record.id, idx).is_some() {
                return Err(AssetMapError::Data(format!(
                    "duplicate asset id: {}",
                    record.id
                )));
            }
        }
        Ok(Self { records, by_id })
    }

    pub fn get(&self, id: AssetId) -> Option<&AssetRecord> {
        self.by_id.get(&id).map(|&idx| &self.records[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
