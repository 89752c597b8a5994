use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Country-wide totals reported alongside the per-region breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total: u64,
    pub deaths: u64,
    pub discharged: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_cases_indian: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_cases_foreign: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_but_location_unidentified: Option<u64>,
}

impl StatsSummary {
    pub const fn new(total: u64, deaths: u64, discharged: u64) -> Self {
        Self {
            total,
            deaths,
            discharged,
            confirmed_cases_indian: None,
            confirmed_cases_foreign: None,
            confirmed_but_location_unidentified: None,
        }
    }
}

/// One state or union territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStat {
    pub loc: String,
    pub total_confirmed: u64,
    pub deaths: u64,
    pub discharged: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_cases_indian: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_cases_foreign: Option<u64>,
}

impl RegionStat {
    pub fn new(loc: impl Into<String>, total_confirmed: u64, deaths: u64, discharged: u64) -> Self {
        Self {
            loc: loc.into(),
            total_confirmed,
            deaths,
            discharged,
            confirmed_cases_indian: None,
            confirmed_cases_foreign: None,
        }
    }

    /// Cases neither discharged nor fatal. The upstream feed does not guarantee
    /// `discharged + deaths <= total_confirmed`, so this saturates at zero.
    pub const fn active(&self) -> u64 {
        self.total_confirmed
            .saturating_sub(self.discharged)
            .saturating_sub(self.deaths)
    }
}

/// The `data` object of the upstream payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StatsData {
    pub summary: StatsSummary,
    pub regional: Vec<RegionStat>,
}

/// Top-level JSON envelope. Only `data` is required to build a dashboard.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub last_refreshed: Option<String>,
    #[serde(default)]
    pub last_origin_update: Option<String>,
}

/// A validated response from the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStatsResponse {
    pub summary: StatsSummary,
    pub regional: Vec<RegionStat>,
    pub last_refreshed: Option<DateTime<Utc>>,
    pub last_origin_update: Option<DateTime<Utc>>,
}

impl RawStatsResponse {
    pub const fn new(summary: StatsSummary, regional: Vec<RegionStat>) -> Self {
        Self {
            summary,
            regional,
            last_refreshed: None,
            last_origin_update: None,
        }
    }
}

pub(crate) fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|timestamp| timestamp.with_timezone(&Utc))
}
