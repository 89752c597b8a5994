use super::error::{DashboardError, EmptyDataError, FetchError};
use super::models::{parse_timestamp, RawStatsResponse, StatsData, StatsEnvelope};
use reqwest::Client;

/// Public India COVID-19 statistics feed.
pub const DEFAULT_ENDPOINT: &str = "https://api.rootnet.in/covid19-in/stats/latest";

/// Fetches the latest statistics from a single fixed endpoint.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    endpoint: String,
}

impl Default for StatsClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl StatsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one GET and validate the body. No retries, no timeout beyond the
    /// transport default.
    pub async fn fetch_stats(&self) -> Result<RawStatsResponse, DashboardError> {
        tracing::info!(url = %self.endpoint, "fetching latest stats");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "stats request failed");
                FetchError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "stats endpoint returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let stats = decode_stats(&body).inspect_err(|e| {
            tracing::warn!(error = %e, "stats body rejected");
        })?;

        tracing::debug!(regions = stats.regional.len(), "stats decoded");
        Ok(stats)
    }
}

/// Validate a response body against the expected `{ data: { summary, regional } }`
/// shape. JSON syntax errors are fetch failures; shape problems are empty data.
pub fn decode_stats(body: &str) -> Result<RawStatsResponse, DashboardError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let envelope: StatsEnvelope = serde_json::from_value(value)
        .map_err(|e| EmptyDataError::Malformed(e.to_string()))?;

    if envelope.success == Some(false) {
        tracing::warn!("stats response reported success = false, using its data anyway");
    }

    let Some(data) = envelope.data else {
        return Err(EmptyDataError::MissingData.into());
    };

    let data: StatsData =
        serde_json::from_value(data).map_err(|e| EmptyDataError::Malformed(e.to_string()))?;

    Ok(RawStatsResponse {
        summary: data.summary,
        regional: data.regional,
        last_refreshed: parse_timestamp(envelope.last_refreshed.as_deref()),
        last_origin_update: parse_timestamp(envelope.last_origin_update.as_deref()),
    })
}
