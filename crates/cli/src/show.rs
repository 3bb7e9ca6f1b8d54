use std::path::Path;

use assetmap_api::models::AssetId;
use assetmap_core::ingest;

use crate::shell::view;

pub fn run(data: &Path, id: u32, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = ingest::load_from_path(data)?;

    let asset = store
        .get(AssetId(id))
        .ok_or_else(|| format!("no asset with id {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(asset)?);
    } else {
        println!("{}", view::render_detail(asset));
    }
    Ok(())
}
