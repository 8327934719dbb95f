use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// TTS adapter errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// The remote service answered with a non-success HTTP status.
    /// `detail` carries the response body when it decodes as text.
    #[error("TTS request failed with status {status}{}", .detail.as_ref().map_or_else(String::new, |d| format!(": {d}")))]
    RequestFailed { status: u16, detail: Option<String> },

    /// Network or connection error surfaced by the transport
    #[error("Connection error: {0}")]
    Connection(String),

    /// Provider not found in the registry
    #[error("Provider '{0}' not found")]
    ProviderNotFound(String),

    /// Invalid provider configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display_with_detail() {
        let err = TtsError::RequestFailed {
            status: 500,
            detail: Some("server error".to_string()),
        };
        assert_eq!(err.to_string(), "TTS request failed with status 500: server error");
    }

    #[test]
    fn request_failed_display_without_detail() {
        let err = TtsError::RequestFailed {
            status: 403,
            detail: None,
        };
        assert_eq!(err.to_string(), "TTS request failed with status 403");
    }
}
