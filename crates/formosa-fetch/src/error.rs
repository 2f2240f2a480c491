//! Fetch outcome taxonomy.

use thiserror::Error;

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching contract statistics.
///
/// Every failed fetch maps to exactly one variant. Nothing is retried or
/// logged internally; each call is independent.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The exchange answered with a non-200 status. The body is not read in
    /// this case.
    #[error("status code: {0}")]
    Status(reqwest::StatusCode),

    /// The exchange reported that the requested range holds no data.
    ///
    /// This is a sentinel: callers branch on it structurally (via
    /// [`FetchError::is_no_data`] or pattern matching) rather than by
    /// inspecting message text.
    #[error("no data available for requested range")]
    NoData,

    /// The exchange reported an error through its alert idiom. The payload is
    /// the upstream message verbatim.
    #[error("{0}")]
    Alert(String),

    /// The body was neither CSV nor a recognizable alert. The raw body text
    /// is kept for diagnosis.
    #[error("response body is not CSV and has no alert: {body}")]
    Parse {
        /// The raw response body, lossily decoded as UTF-8.
        body: String,
    },
}

impl FetchError {
    /// Returns true for the distinguished empty-result sentinel.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_sentinel() {
        let err = FetchError::NoData;

        assert!(err.is_no_data());
        assert!(!FetchError::Alert("no data found".into()).is_no_data());
    }

    #[test]
    fn test_alert_message_verbatim() {
        let err = FetchError::Alert("Date Range exceed one year!".into());

        assert_eq!(err.to_string(), "Date Range exceed one year!");
    }

    #[test]
    fn test_status_display() {
        let err = FetchError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(err.to_string(), "status code: 500 Internal Server Error");
    }

    #[test]
    fn test_parse_keeps_body() {
        let err = FetchError::Parse {
            body: "<html>garbage</html>".into(),
        };

        assert!(err.to_string().contains("<html>garbage</html>"));
    }
}
