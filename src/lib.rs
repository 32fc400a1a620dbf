#![doc(test(attr(deny(warnings))))]

//! Overview Core shapes the data behind a workspace analytics overview:
//! KPI progress cards, the cost category bar, and per-metric chart cards
//! compared against a prior period.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod format;
pub mod storage;
pub mod utils;
pub mod workspace;

pub use errors::OverviewError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Overview Core tracing initialized.");
    });
}
