use thiserror::Error;

/// The request never produced a usable JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("invalid JSON body: {0}")]
    Decode(String),
}

/// The body was valid JSON but did not carry `data.summary` / `data.regional`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmptyDataError {
    #[error("response has no data")]
    MissingData,

    #[error("response data has an unexpected shape: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    EmptyData(#[from] EmptyDataError),
}

impl DashboardError {
    /// Text shown to the user in place of the dashboard.
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(error) => format!("Error: {error}"),
            Self::EmptyData(_) => "No data available".to_string(),
        }
    }

    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::EmptyData(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_keep_the_underlying_message() {
        let error = DashboardError::from(FetchError::Transport("connection refused".to_string()));
        let message = error.user_message();

        assert!(message.starts_with("Error: "));
        assert!(message.contains("connection refused"));
        assert!(!error.is_no_data());
    }

    #[test]
    fn empty_data_is_reported_as_no_data() {
        let error = DashboardError::from(EmptyDataError::MissingData);

        assert_eq!(error.user_message(), "No data available");
        assert!(error.is_no_data());
    }

    #[test]
    fn status_error_names_the_code() {
        let error = FetchError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "server responded with 503 Service Unavailable"
        );
    }
}
