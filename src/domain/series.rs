//! Rows of the external daily overview dataset.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::OverviewError;

/// Anything positioned on the calendar.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for NaiveDate {
    fn date(&self) -> NaiveDate {
        *self
    }
}

/// One day of the overview dataset: a date plus a value per metric title.
///
/// Only numeric fields become metrics; strings, booleans, nulls and nested
/// values next to the date are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewPoint {
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    #[serde(flatten, deserialize_with = "numeric_metrics::deserialize")]
    pub metrics: BTreeMap<String, f64>,
}

impl OverviewPoint {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, title: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(title.into(), value);
        self
    }

    pub fn metric(&self, title: &str) -> Option<f64> {
        self.metrics.get(title).copied()
    }
}

impl Dated for OverviewPoint {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A single dated value of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl Dated for SeriesPoint {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Parses the date formats found in exported datasets. Any time-of-day part
/// is dropped.
pub fn parse_date(raw: &str) -> Result<NaiveDate, OverviewError> {
    let value = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(stamp.date());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .map(|stamp| stamp.date_naive())
        .map_err(|_| OverviewError::InvalidDate(raw.to_string()))
}

mod flexible_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(de::Error::custom)
    }
}

mod numeric_metrics {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(fields
            .into_iter()
            .filter_map(|(title, value)| value.as_f64().map(|number| (title, number)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamped_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(parse_date("2024-03-31").unwrap(), expected);
        assert_eq!(parse_date("2024-03-31T18:45:00").unwrap(), expected);
        assert_eq!(parse_date("2024-03-31T18:45:00.250").unwrap(), expected);
        assert_eq!(parse_date("2024-03-31T10:00:00+02:00").unwrap(), expected);
        assert!(matches!(
            parse_date("31/03/2024"),
            Err(OverviewError::InvalidDate(_))
        ));
    }

    #[test]
    fn deserializes_metrics_next_to_date() {
        let json = r#"{"date":"2024-01-02","Rows read":1200,"Payments completed":33.5}"#;
        let point: OverviewPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(point.metric("Rows read"), Some(1200.0));
        assert_eq!(point.metric("Payments completed"), Some(33.5));
        assert_eq!(point.metric("Logins"), None);
    }

    #[test]
    fn non_numeric_fields_are_not_metrics() {
        let json = r#"{"date":"2024-01-02","region":"EU","Logins":null,"Queries":9,"tags":[1]}"#;
        let point: OverviewPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.metrics.len(), 1);
        assert_eq!(point.metric("Queries"), Some(9.0));
        assert_eq!(point.metric("region"), None);
        assert_eq!(point.metric("Logins"), None);
    }
}
