use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse layout class of the rendering surface. Narrow viewports give
/// the detail panel precedence over the list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

/// Which of the two side panels are shown for the current state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub struct Visibility {
    pub show_list: bool,
    pub show_detail: bool,
}
