//! API Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure of a call to the habits backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("no browser window available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Wrap a rejected JS promise or a failed web-sys call
    pub fn from_js(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        ApiError::Network(message)
    }

    /// Short text shown next to the retry button
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::NoWindow | ApiError::Network(_) => "Could not reach the server.",
            ApiError::Status { status, .. } if *status >= 500 => "The server had a problem.",
            ApiError::Status { .. } => "The server rejected the request.",
            ApiError::Decode(_) => "The server sent an unexpected response.",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ApiError::Status {
            status: 404,
            url: "http://localhost:3333/habits/x/toggle".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server answered 404 for http://localhost:3333/habits/x/toggle"
        );
        assert_eq!(ApiError::NoWindow.to_string(), "no browser window available");
    }

    #[test]
    fn test_user_message() {
        let server = ApiError::Status { status: 503, url: String::new() };
        let client = ApiError::Status { status: 400, url: String::new() };
        assert_eq!(server.user_message(), "The server had a problem.");
        assert_eq!(client.user_message(), "The server rejected the request.");
        assert_eq!(ApiError::Network("offline".into()).user_message(), "Could not reach the server.");
    }

    #[test]
    fn test_from_serde_json() {
        let err: ApiError = serde_json::from_str::<Vec<u32>>("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
