pub mod map;
pub mod models;

// Re-export commonly used types
pub use map::{MapSurface, MarkerColor, MarkerHandle, MarkerStyle};
pub use models::*;
