use serde::{Deserialize, Serialize};

/// A KPI with its usage against an allowance.
///
/// `percentage` is authored alongside `current`/`allowed` and is never
/// derived from them; the two may disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricRecord {
    pub title: String,
    pub percentage: f64,
    pub current: f64,
    pub allowed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MetricRecord {
    pub fn new(title: impl Into<String>, percentage: f64, current: f64, allowed: f64) -> Self {
        Self {
            title: title.into(),
            percentage,
            current,
            allowed,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}
