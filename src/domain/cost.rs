use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::OverviewError;

/// Visual category of a cost segment. A style token, not a colour value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Primary,
    Secondary,
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColorTag::Primary => "primary",
            ColorTag::Secondary => "secondary",
        };
        f.write_str(label)
    }
}

impl FromStr for ColorTag {
    type Err = OverviewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ColorTag::Primary),
            "secondary" => Ok(ColorTag::Secondary),
            _ => Err(OverviewError::InvalidTag {
                kind: "color tag",
                value: value.to_string(),
            }),
        }
    }
}

/// One segment of the cost breakdown. `value` arrives pre-formatted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    pub title: String,
    pub percentage: f64,
    pub value: String,
    pub color_tag: ColorTag,
}

impl CostRecord {
    pub fn new(
        title: impl Into<String>,
        percentage: f64,
        value: impl Into<String>,
        color_tag: ColorTag,
    ) -> Self {
        Self {
            title: title.into(),
            percentage,
            value: value.into(),
            color_tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tag_rejects_raw_colour_classes() {
        assert_eq!("Secondary".parse::<ColorTag>().unwrap(), ColorTag::Secondary);
        assert!("bg-blue-600".parse::<ColorTag>().is_err());
    }

    #[test]
    fn cost_record_uses_camel_case_tag_field() {
        let record = CostRecord::new("Caching", 11.1, "$31.9", ColorTag::Secondary);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["colorTag"], "secondary");
        assert_eq!(json["value"], "$31.9");
    }
}
