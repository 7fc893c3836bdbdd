use thiserror::Error;

/// Maximum number of bytes of a provider response body attached to a
/// decode error for diagnostics.
const DECODE_SAMPLE_MAX_BYTES: usize = 1000;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    Fetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    /// The provider response could not be decoded into the expected
    /// envelope. Carries a bounded sample of the offending body so the
    /// failure can be diagnosed without re-running with verbose logging.
    #[error("Failed to decode provider response: {message} (URL: {url}); body sample: {sample}")]
    Decode {
        message: String,
        sample: String,
        url: String,
    },

    #[error("No team matching '{query}' found in the directory")]
    TeamNotFound { query: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date parsing error: {0}")]
    DateParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date parsing error with context
    pub fn date_parse_error(msg: impl Into<String>) -> Self {
        Self::DateParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a decode error, attaching at most [`DECODE_SAMPLE_MAX_BYTES`]
    /// of the offending body (truncated on a char boundary).
    pub fn decode_error(message: impl Into<String>, body: &str, url: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            sample: truncate_sample(body),
            url: url.into(),
        }
    }

    /// Create a team resolution miss
    pub fn team_not_found(query: impl Into<String>) -> Self {
        Self::TeamNotFound {
            query: query.into(),
        }
    }

    /// Check if the error terminates the query at the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Fetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiNotFound { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
        )
    }

    /// Check if the error is a resolver miss rather than a technical failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ApiNotFound { .. } | AppError::TeamNotFound { .. }
        )
    }
}

fn truncate_sample(body: &str) -> String {
    let mut end = DECODE_SAMPLE_MAX_BYTES.min(body.len());
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("https://api.example.com/scoreboard");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API request not found (404): https://api.example.com/scoreboard"
        );
    }

    #[test]
    fn test_api_server_error_helper() {
        let error =
            AppError::api_server_error(500, "Internal server error", "https://api.example.com");
        assert!(matches!(error, AppError::ApiServerError { .. }));
        assert_eq!(
            error.to_string(),
            "API server error (500): Internal server error (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_network_timeout_helper() {
        let error = AppError::network_timeout("https://api.example.com");
        assert!(matches!(error, AppError::NetworkTimeout { .. }));
        assert_eq!(
            error.to_string(),
            "Network timeout while fetching data from: https://api.example.com"
        );
    }

    #[test]
    fn test_decode_error_keeps_short_bodies_whole() {
        let error = AppError::decode_error("expected value", "not json", "https://api.example.com");
        match &error {
            AppError::Decode { sample, .. } => assert_eq!(sample, "not json"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_bounds_sample_to_1000_bytes() {
        let body = "x".repeat(5000);
        let error = AppError::decode_error("expected value", &body, "https://api.example.com");
        match &error {
            AppError::Decode { sample, .. } => assert_eq!(sample.len(), 1000),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_truncates_on_char_boundary() {
        // 999 ASCII bytes followed by a multi-byte char straddling the limit
        let mut body = "x".repeat(999);
        body.push('ä');
        body.push_str(&"y".repeat(100));
        let error = AppError::decode_error("expected value", &body, "https://api.example.com");
        match &error {
            AppError::Decode { sample, .. } => {
                assert!(sample.len() <= 1000);
                assert!(sample.is_char_boundary(sample.len()));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_team_not_found_helper() {
        let error = AppError::team_not_found("Atlantis FC");
        assert!(matches!(error, AppError::TeamNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "No team matching 'Atlantis FC' found in the directory"
        );
    }

    #[test]
    fn test_is_transport() {
        assert!(AppError::network_timeout("url").is_transport());
        assert!(AppError::network_connection("url", "refused").is_transport());
        assert!(AppError::api_server_error(500, "boom", "url").is_transport());
        assert!(AppError::api_not_found("url").is_transport());

        assert!(!AppError::team_not_found("x").is_transport());
        assert!(!AppError::decode_error("bad", "{}", "url").is_transport());
        assert!(!AppError::config_error("bad").is_transport());
    }

    #[test]
    fn test_is_not_found() {
        assert!(AppError::api_not_found("url").is_not_found());
        assert!(AppError::team_not_found("x").is_not_found());

        assert!(!AppError::api_server_error(500, "boom", "url").is_not_found());
        assert!(!AppError::network_timeout("url").is_not_found());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<toml::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }
}
