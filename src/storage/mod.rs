pub mod json_series;

use crate::{domain::OverviewPoint, errors::OverviewError};

pub type Result<T> = std::result::Result<T, OverviewError>;

/// Abstraction over where the daily overview dataset comes from.
pub trait SeriesSource {
    fn load(&self) -> Result<Vec<OverviewPoint>>;

    /// Short label used in logs and the CLI banner.
    fn describe(&self) -> String;
}

pub use json_series::{bundled_series, load_series, write_json, BundledSeries, JsonSeriesFile};
