use std::io;
use thiserror::Error;

/// Error types for the weather-fetch application
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when a required environment variable is missing or empty
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Error when a configuration value cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error when the HTTP request could not be built
    #[error("Failed to build request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    /// Error when the request could not be sent or no response arrived
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Error when API request fails
    #[error("API request failed: {0}")]
    ApiRequestFailed(String),

    /// Error when the response body could not be read
    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// Wrapper for JSON deserialization errors
    #[error("Failed to parse API response: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// Error when a forecast entry carries a malformed timestamp
    #[error("Invalid forecast timestamp {timestamp:?}: {source}")]
    TimeParse {
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The API returned no hourly entries to choose from
    #[error("Forecast contains no hourly entries")]
    EmptyForecast,

    /// Wrapper for I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Name of the pipeline stage the error came from.
    pub fn stage(&self) -> &'static str {
        match self {
            AppError::EnvVarNotSet(_) | AppError::InvalidConfig(_) => "config",
            AppError::RequestBuild(_) => "request-build",
            AppError::Network(_) => "network",
            AppError::ApiRequestFailed(_) => "api-status",
            AppError::BodyRead(_) => "body-read",
            AppError::JsonDecode(_) => "json-decode",
            AppError::TimeParse { .. } => "time-parse",
            AppError::EmptyForecast => "empty-forecast",
            AppError::Io(_) => "output",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_labels() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let time_err = chrono::DateTime::parse_from_rfc3339("nope").unwrap_err();

        assert_eq!(AppError::EnvVarNotSet("X".into()).stage(), "config");
        assert_eq!(AppError::JsonDecode(json_err).stage(), "json-decode");
        assert_eq!(
            AppError::TimeParse {
                timestamp: "nope".into(),
                source: time_err,
            }
            .stage(),
            "time-parse"
        );
        assert_eq!(AppError::EmptyForecast.stage(), "empty-forecast");
    }

    #[test]
    fn time_parse_message_names_the_timestamp() {
        let source = chrono::DateTime::parse_from_rfc3339("yesterday").unwrap_err();
        let err = AppError::TimeParse {
            timestamp: "yesterday".into(),
            source,
        };
        assert!(err.to_string().contains("\"yesterday\""));
    }
}
