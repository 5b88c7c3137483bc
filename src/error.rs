// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Failures of a catalog or artwork request.
///
/// All variants collapse into the single "fetch failed" outcome for the home
/// screen: nothing is retried and nothing is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No API key was configured, so no request was sent.
    MissingApiKey,

    /// Transport-level failure (DNS, TLS, connection reset, ...).
    Network(String),

    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The response body did not match the expected payload.
    Decode(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::MissingApiKey => "error-fetch-missing-api-key",
            FetchError::Network(_) => "error-fetch-network",
            FetchError::Status(_) => "error-fetch-status",
            FetchError::Decode(_) => "error-fetch-decode",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MissingApiKey => write!(f, "No API key configured"),
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP status: {}", code),
            FetchError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Status(status.as_u16());
        }
        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn json_error_becomes_decode_failure() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn fetch_error_i18n_keys() {
        assert_eq!(
            FetchError::MissingApiKey.i18n_key(),
            "error-fetch-missing-api-key"
        );
        assert_eq!(FetchError::Status(500).i18n_key(), "error-fetch-status");
        assert_eq!(
            FetchError::Network(String::new()).i18n_key(),
            "error-fetch-network"
        );
    }
}
