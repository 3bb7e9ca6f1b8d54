pub mod asset;
pub mod geo;
pub mod view;

pub use asset::*;
pub use geo::*;
pub use view::*;
