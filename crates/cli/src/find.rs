use std::path::Path;

use assetmap_core::ingest;
use assetmap_core::query::visible_assets;

use crate::shell::view;

pub fn run(data: &Path, keywords: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let store = ingest::load_from_path(data)?;

    let term = keywords.join(" ");
    let matches = visible_assets(&store, &term);
    if matches.is_empty() {
        println!("No matching assets.");
        return Ok(());
    }

    println!("{}", view::asset_table(&matches, None, true));
    println!("{} of {} assets match", matches.len(), store.len());
    Ok(())
}
