use crate::map::MarkerColor;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable asset identifier, the only key shared across components.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(transparent)]
pub struct AssetId(pub u32);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categorical vacancy severity driving badge and marker colors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VacancyLevel {
    High,
    Medium,
    Low,
    None,
}

impl VacancyLevel {
    /// Fixed color mapping: High is the only level that reads as red.
    pub fn marker_color(self) -> MarkerColor {
        match self {
            VacancyLevel::High => MarkerColor::Red,
            VacancyLevel::Medium => MarkerColor::Amber,
            VacancyLevel::Low | VacancyLevel::None => MarkerColor::Green,
        }
    }
}

impl fmt::Display for VacancyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VacancyLevel::High => "high",
            VacancyLevel::Medium => "medium",
            VacancyLevel::Low => "low",
            VacancyLevel::None => "none",
        };
        write!(f, "{}", s)
    }
}

/// Display field that arrives either as a number or as free text
/// (ranges, "negotiable", the `/` none-marker).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum FeeValue {
    Amount(f64),
    Text(String),
}

impl FeeValue {
    /// True when the field carries nothing worth rendering.
    pub fn is_absent(&self) -> bool {
        match self {
            FeeValue::Amount(_) => false,
            FeeValue::Text(s) => {
                let t = s.trim();
                t.is_empty() || t == "/"
            }
        }
    }
}

impl Default for FeeValue {
    fn default() -> Self {
        FeeValue::Text(String::new())
    }
}

impl fmt::Display for FeeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeValue::Amount(n) => write!(f, "{}", n),
            FeeValue::Text(s) => write!(f, "{}", s),
        }
    }
}
