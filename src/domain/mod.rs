//! Domain models for the overview: records, tagged enums, ranges, and series.
//! No I/O, no CLI. Only data types and the invariants they carry.

pub mod category;
pub mod cost;
pub mod metric;
pub mod props;
pub mod range;
pub mod series;

pub use category::{CategorySpec, ValueKind};
pub use cost::{ColorTag, CostRecord};
pub use metric::MetricRecord;
pub use props::{CallToAction, CardHeader, CategoryBarProps, ChartCardProps, ProgressCardProps};
pub use range::{ComparisonPeriod, DateRange};
pub use series::{parse_date, Dated, OverviewPoint, SeriesPoint};
