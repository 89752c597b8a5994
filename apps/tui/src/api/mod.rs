pub mod client;
pub mod error;
pub mod models;

pub use client::{decode_stats, StatsClient, DEFAULT_ENDPOINT};
pub use error::{DashboardError, EmptyDataError, FetchError};
pub use models::{RawStatsResponse, RegionStat, StatsSummary};
