use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failures surfaced by [`super::ApiClient`]. The client never swallows one;
/// callers decide how loud to be.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is the raw body.
    #[error("{message}")]
    Request {
        status: StatusCode,
        message: String,
        kind: FailureKind,
    },
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// Shape of a failed response body, classified once by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Body was `{ "errors": ["..."] }`; messages are kept verbatim.
    ValidationErrors(Vec<String>),
    Generic,
}

#[derive(Deserialize)]
struct ValidationBody {
    errors: Vec<String>,
}

impl FailureKind {
    pub(crate) fn classify(body: &str) -> Self {
        match serde_json::from_str::<ValidationBody>(body) {
            Ok(parsed) => FailureKind::ValidationErrors(parsed.errors),
            Err(_) => FailureKind::Generic,
        }
    }
}

impl ApiError {
    pub(crate) fn request(status: StatusCode, body: String) -> Self {
        let kind = FailureKind::classify(&body);
        Self::Request {
            status,
            message: body,
            kind,
        }
    }

    /// Field-level messages when the server reported structured validation errors.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            ApiError::Request {
                kind: FailureKind::ValidationErrors(errors),
                ..
            } => Some(errors),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }
}
