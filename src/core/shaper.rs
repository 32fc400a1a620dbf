//! KPI data shaper.
//!
//! Every function here is a pure projection: records and the caller-owned
//! [`DateRange`] go in, new prop bundles come out. Nothing is cached and no
//! range is stored between calls.

use crate::{
    domain::{
        CategoryBarProps, CategorySpec, ChartCardProps, ComparisonPeriod, CostRecord, DateRange,
        Dated, MetricRecord, ProgressCardProps, ValueKind,
    },
    errors::OverviewError,
};

/// Length of the default trailing window, in days.
pub const DEFAULT_RANGE_DAYS: u32 = 30;

/// Longest trailing window a caller may configure, in days.
pub const MAX_RANGE_DAYS: u32 = 36_600;

static TRACKED_CATEGORIES: [CategorySpec; 6] = [
    CategorySpec::new("Rows read", ValueKind::Unit),
    CategorySpec::new("Rows written", ValueKind::Unit),
    CategorySpec::new("Queries", ValueKind::Unit),
    CategorySpec::new("Payments completed", ValueKind::Currency),
    CategorySpec::new("Sign ups", ValueKind::Unit),
    CategorySpec::new("Logins", ValueKind::Unit),
];

/// Trailing [`DEFAULT_RANGE_DAYS`] window ending at the latest date in `series`.
pub fn derive_default_range<T: Dated>(series: &[T]) -> Result<DateRange, OverviewError> {
    derive_range(series, DEFAULT_RANGE_DAYS)
}

/// Trailing `days` window ending at the latest date in `series`.
pub fn derive_range<T: Dated>(series: &[T], days: u32) -> Result<DateRange, OverviewError> {
    let max_date = series
        .iter()
        .map(|item| item.date())
        .max()
        .ok_or_else(|| {
            OverviewError::InvalidInput("cannot derive a date range from an empty series".into())
        })?;
    let range = DateRange::trailing(max_date, days).ok_or_else(|| {
        OverviewError::InvalidInput(format!(
            "a {days}-day window ending {max_date} starts before the earliest supported date"
        ))
    })?;
    tracing::debug!(%range, points = series.len(), "derived default range");
    Ok(range)
}

/// Replaces the active range with the user's choice. The choice is not
/// validated; clearing the picker (`None`) keeps the current range.
pub fn select_range(current: DateRange, user_input: Option<DateRange>) -> DateRange {
    match user_input {
        Some(range) => {
            if range.is_inverted() {
                tracing::debug!(%range, "selected range is inverted");
            }
            range
        }
        None => current,
    }
}

pub fn project_metric_cards(records: &[MetricRecord]) -> ProgressCardProps {
    ProgressCardProps {
        data: records.to_vec(),
    }
}

pub fn project_cost_breakdown(records: &[CostRecord]) -> CategoryBarProps {
    let props = CategoryBarProps {
        data: records.to_vec(),
    };
    let total = props.total_percentage();
    if total > 100.0 + 1e-9 {
        tracing::warn!(total, "cost breakdown percentages add up to more than 100");
    }
    props
}

/// The metrics that get a chart card, in display order.
pub fn list_tracked_categories() -> &'static [CategorySpec] {
    &TRACKED_CATEGORIES
}

pub fn chart_cards(
    categories: &[CategorySpec],
    range: DateRange,
    period: ComparisonPeriod,
) -> Vec<ChartCardProps> {
    categories
        .iter()
        .map(|spec| ChartCardProps::new(spec, range, period))
        .collect()
}
