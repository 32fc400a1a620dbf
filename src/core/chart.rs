use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    domain::{ChartCardProps, ComparisonPeriod, DateRange, OverviewPoint, SeriesPoint, ValueKind},
    errors::OverviewError,
    utils::closest_match,
};

/// Totals of one chart card over the active and comparison windows.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSummary {
    pub title: String,
    pub kind: ValueKind,
    pub range: DateRange,
    pub comparison_range: Option<DateRange>,
    pub value: f64,
    pub previous_value: Option<f64>,
    /// Relative change against `previous_value`; `None` without a usable baseline.
    pub evolution: Option<f64>,
    pub points: usize,
}

/// Window the active range is compared against. `None` without a comparison,
/// or when the shifted window would leave the supported calendar.
pub fn comparison_range(range: DateRange, period: ComparisonPeriod) -> Option<DateRange> {
    let window = match period {
        ComparisonPeriod::PreviousPeriod => range.shift_days(-(range.span_days() + 1)),
        ComparisonPeriod::LastYear => range.shift_years(-1),
        ComparisonPeriod::NoComparison => return None,
    };
    if window.is_none() {
        tracing::warn!(%range, %period, "comparison window is out of range");
    }
    window
}

/// Values of metric `title` dated inside `range`, in dataset order.
///
/// Days on which the metric is absent are skipped. A title that appears on no
/// day at all is reported as unknown.
pub fn series_for(
    series: &[OverviewPoint],
    title: &str,
    range: DateRange,
) -> Result<Vec<SeriesPoint>, OverviewError> {
    if !series.is_empty() && !series.iter().any(|point| point.metrics.contains_key(title)) {
        let known: BTreeSet<&str> = series
            .iter()
            .flat_map(|point| point.metrics.keys().map(String::as_str))
            .collect();
        return Err(OverviewError::UnknownMetric {
            title: title.to_string(),
            suggestion: closest_match(title, known).map(str::to_string),
        });
    }

    Ok(series
        .iter()
        .filter(|point| range.contains(point.date))
        .filter_map(|point| {
            point.metric(title).map(|value| SeriesPoint {
                date: point.date,
                value,
            })
        })
        .collect())
}

pub fn summarize(
    series: &[OverviewPoint],
    card: &ChartCardProps,
) -> Result<ChartSummary, OverviewError> {
    let current = series_for(series, &card.title, card.range)?;
    let value = total(&current);

    let comparison = comparison_range(card.range, card.comparison_period);
    let previous_value = match comparison {
        Some(window) => Some(total(&series_for(series, &card.title, window)?)),
        None => None,
    };
    let evolution = previous_value
        .filter(|previous| previous.abs() > f64::EPSILON)
        .map(|previous| (value - previous) / previous);

    tracing::debug!(
        title = %card.title,
        points = current.len(),
        value,
        "summarized chart card"
    );

    Ok(ChartSummary {
        title: card.title.clone(),
        kind: card.kind,
        range: card.range,
        comparison_range: comparison,
        value,
        previous_value,
        evolution,
        points: current.len(),
    })
}

fn total(points: &[SeriesPoint]) -> f64 {
    points.iter().map(|point| point.value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn previous_period_ends_the_day_before() {
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31));
        let previous = comparison_range(range, ComparisonPeriod::PreviousPeriod).unwrap();
        assert_eq!(previous.to, date(2024, 2, 29));
        assert_eq!(previous.from, date(2024, 1, 30));
        assert_eq!(previous.span_days(), range.span_days());
    }

    #[test]
    fn no_comparison_has_no_window() {
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31));
        assert!(comparison_range(range, ComparisonPeriod::NoComparison).is_none());
    }

    #[test]
    fn comparison_outside_the_calendar_has_no_window() {
        let range = DateRange::new(date(-200_000, 1, 1), date(200_000, 1, 1));
        assert!(comparison_range(range, ComparisonPeriod::PreviousPeriod).is_none());
        let earliest = DateRange::new(NaiveDate::MIN, date(2024, 3, 31));
        assert!(comparison_range(earliest, ComparisonPeriod::LastYear).is_none());
    }

    #[test]
    fn summary_over_a_huge_range_skips_the_comparison() {
        let series = vec![OverviewPoint::new(date(2024, 3, 1)).with_metric("Logins", 4.0)];
        let card = ChartCardProps {
            title: "Logins".into(),
            kind: ValueKind::Unit,
            range: DateRange::new(date(-200_000, 1, 1), date(200_000, 1, 1)),
            comparison_period: ComparisonPeriod::PreviousPeriod,
        };
        let summary = summarize(&series, &card).unwrap();
        assert_eq!(summary.value, 4.0);
        assert_eq!(summary.comparison_range, None);
        assert_eq!(summary.previous_value, None);
        assert_eq!(summary.evolution, None);
    }

    #[test]
    fn empty_series_yields_no_points() {
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31));
        assert!(series_for(&[], "Logins", range).unwrap().is_empty());
    }
}
