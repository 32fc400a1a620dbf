#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use overview_core::domain::OverviewPoint;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Daily points from `start` through `end` where every metric equals `value`.
pub fn flat_series(
    start: NaiveDate,
    end: NaiveDate,
    metrics: &[&str],
    value: f64,
) -> Vec<OverviewPoint> {
    let mut points = Vec::new();
    let mut day = start;
    while day <= end {
        let point = metrics
            .iter()
            .fold(OverviewPoint::new(day), |point, title| point.with_metric(*title, value));
        points.push(point);
        day += Duration::days(1);
    }
    points
}
