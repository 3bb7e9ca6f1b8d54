mod engine;

pub use engine::{search_blob, visible_assets};
