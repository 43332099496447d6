//! Error Types

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong talking to the backend, IBGE or the browser
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    /// Backend answered with a `message` body
    #[error("point rejected: {0}")]
    Rejected(String),
    #[error("browser API unavailable: {0}")]
    Browser(String),
}

impl ApiError {
    pub fn from_js(value: JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Browser(text)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "request failed with status 500");
        assert_eq!(
            ApiError::Rejected("Invalid email".into()).to_string(),
            "point rejected: Invalid email"
        );
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
    }

    #[test]
    fn test_serde_errors_map_to_decode() {
        let serde_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ApiError::from(gloo_net::Error::SerdeError(serde_err));
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_gloo_errors_map_to_network() {
        let err = ApiError::from(gloo_net::Error::GlooError("offline".into()));
        assert_eq!(err, ApiError::Network("offline".into()));
    }
}
