use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::domain::OverviewPoint;

use super::{Result, SeriesSource};

const TMP_SUFFIX: &str = "tmp";
const BUNDLED_SAMPLE: &str = include_str!("../../data/overview_sample.json");

/// Overview dataset stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonSeriesFile {
    path: PathBuf,
}

impl JsonSeriesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeriesSource for JsonSeriesFile {
    fn load(&self) -> Result<Vec<OverviewPoint>> {
        load_series(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Sample dataset compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSeries;

impl SeriesSource for BundledSeries {
    fn load(&self) -> Result<Vec<OverviewPoint>> {
        bundled_series()
    }

    fn describe(&self) -> String {
        "bundled sample".into()
    }
}

/// Reads a JSON array of overview rows, preserving file order.
pub fn load_series(path: &Path) -> Result<Vec<OverviewPoint>> {
    let data = fs::read_to_string(path)?;
    let series: Vec<OverviewPoint> = serde_json::from_str(&data)?;
    tracing::info!(path = %path.display(), points = series.len(), "loaded overview series");
    Ok(series)
}

pub fn bundled_series() -> Result<Vec<OverviewPoint>> {
    Ok(serde_json::from_str(BUNDLED_SAMPLE)?)
}

/// Writes `value` as pretty JSON, staging through a temporary file.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
