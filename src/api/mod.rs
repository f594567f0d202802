//! Sentiment Server API
//!
//! The `FeedbackApi` trait is the single effectful seam between the handler
//! cycles and the network. Implementations only move bytes; turning a raw
//! response into a typed result or an [`ApiError`] goes through
//! [`decode_response`] so every transport classifies failures the same way.

#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::{HttpFeedbackApi, UploadFile};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{AnalysisRequest, AnalysisResult, StatsResponse, UploadResult};

pub const ANALYZE_PATH: &str = "/analyze";
pub const UPLOAD_PATH: &str = "/upload";
pub const STATS_PATH: &str = "/stats";

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// Calls against the sentiment server.
///
/// Futures are not required to be `Send`: the browser implementation holds
/// JS handles and runs on a single-threaded event loop.
#[async_trait(?Send)]
pub trait FeedbackApi {
    /// File handle accepted by [`FeedbackApi::upload`]
    type File;

    /// `POST /analyze`
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError>;

    /// `POST /upload`; with no file the form is sent without a `file` part
    async fn upload(&self, file: Option<&Self::File>) -> Result<UploadResult, ApiError>;

    /// `GET /stats`
    async fn stats(&self) -> Result<StatsResponse, ApiError>;
}

/// Errors that can occur when talking to the sentiment server
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// A response arrived and the server refused the request
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never completed
    #[error("Request failed: {0}")]
    Transport(String),

    /// A response arrived but its body could not be read
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message to surface to the user for a server rejection
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Classify a raw response.
///
/// Non-2xx statuses with a JSON body are rejections carrying its `error`
/// string, or `Unknown error` when there is none. A non-2xx body that is not
/// JSON (a proxy error page, say) is unreadable, not a rejection. A 2xx body
/// that carries an `error` field is a rejection too. Anything else must
/// parse as `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let error_body = serde_json::from_str::<ErrorBody>(body);

    if !(200..300).contains(&status) {
        return match error_body {
            Ok(b) => Err(ApiError::Rejected {
                status,
                message: b.error.unwrap_or_else(|| "Unknown error".to_string()),
            }),
            Err(e) => Err(ApiError::Decode(format!("status {}: {}", status, e))),
        };
    }

    if let Ok(ErrorBody { error: Some(message) }) = error_body {
        return Err(ApiError::Rejected { status, message });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let stats: StatsResponse =
            decode_response(200, r#"{"sentiment_distribution":{"neutral":2}}"#).unwrap();
        assert_eq!(stats.sentiment_distribution.get("neutral"), Some(&2));
    }

    #[test]
    fn test_decode_rejection_carries_server_error() {
        let err = decode_response::<AnalysisResult>(400, r#"{"error":"empty text"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 400,
                message: "empty text".to_string()
            }
        );
        assert_eq!(err.server_message(), Some("empty text"));
    }

    #[test]
    fn test_decode_failure_status_without_json_body() {
        let err = decode_response::<UploadResult>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_decode_failure_status_without_error_field() {
        let err = decode_response::<UploadResult>(500, r#"{"detail":"boom"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 500,
                message: "Unknown error".to_string()
            }
        );
    }

    #[test]
    fn test_decode_error_field_on_success_status() {
        let err = decode_response::<AnalysisResult>(200, r#"{"error":"model offline"}"#).unwrap_err();
        assert_eq!(err.server_message(), Some("model offline"));
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_response::<StatsResponse>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.server_message(), None);
    }
}
