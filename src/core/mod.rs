//! Pure shaping of overview records into widget props, plus per-chart
//! summaries over the daily series.

pub mod chart;
pub mod shaper;

pub use chart::{comparison_range, series_for, summarize, ChartSummary};
pub use shaper::{
    chart_cards, derive_default_range, derive_range, list_tracked_categories,
    project_cost_breakdown, project_metric_cards, select_range, DEFAULT_RANGE_DAYS,
    MAX_RANGE_DAYS,
};
