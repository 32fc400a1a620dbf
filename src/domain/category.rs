//! Tracked chart categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::OverviewError;

/// How a metric's values are displayed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Currency,
    Unit,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueKind::Currency => "currency",
            ValueKind::Unit => "unit",
        };
        f.write_str(label)
    }
}

impl FromStr for ValueKind {
    type Err = OverviewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "currency" => Ok(ValueKind::Currency),
            "unit" => Ok(ValueKind::Unit),
            _ => Err(OverviewError::InvalidTag {
                kind: "value kind",
                value: value.to_string(),
            }),
        }
    }
}

/// An overview metric that gets its own chart card.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CategorySpec {
    pub title: &'static str,
    pub kind: ValueKind,
}

impl CategorySpec {
    pub const fn new(title: &'static str, kind: ValueKind) -> Self {
        Self { title, kind }
    }
}
