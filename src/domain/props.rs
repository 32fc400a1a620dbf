//! Prop bundles handed to the presentation widgets.

use serde::Serialize;

use super::{CategorySpec, ComparisonPeriod, CostRecord, DateRange, MetricRecord, ValueKind};

/// Display strings shared by every card. Passed through unchanged.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardHeader {
    pub title: String,
    pub change: String,
    pub value: String,
    pub value_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CallToAction {
    pub description: String,
    pub text: String,
    pub link: String,
}

/// Rows of a progress card, in authored order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressCardProps {
    pub data: Vec<MetricRecord>,
}

impl ProgressCardProps {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|record| record.title.as_str())
    }
}

/// Segments of the stacked cost bar, in authored order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryBarProps {
    pub data: Vec<CostRecord>,
}

impl CategoryBarProps {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of segment percentages. Expected, not guaranteed, to be <= 100.
    pub fn total_percentage(&self) -> f64 {
        self.data.iter().map(|record| record.percentage).sum()
    }
}

/// Everything a chart widget needs to query and draw one metric.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartCardProps {
    pub title: String,
    pub kind: ValueKind,
    pub range: DateRange,
    pub comparison_period: ComparisonPeriod,
}

impl ChartCardProps {
    pub fn new(spec: &CategorySpec, range: DateRange, comparison_period: ComparisonPeriod) -> Self {
        Self {
            title: spec.title.to_string(),
            kind: spec.kind,
            range,
            comparison_period,
        }
    }
}
