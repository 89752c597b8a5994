// Export our modules for use in the binary and tests
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod format;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use api::{DashboardError, RawStatsResponse, RegionStat, StatsClient, StatsSummary};
pub use domain::{build_view_model, ViewModel};
