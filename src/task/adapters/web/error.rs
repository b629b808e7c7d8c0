//! Translation of use case failures and extractor rejections into HTTP
//! error responses.

use crate::task::services::TaskUseCaseError;
use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message returned for failures the client cannot act on.
const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Please try again later or contact support.";

/// JSON error body shared by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code.
    pub status: u16,
    /// Human-readable message.
    pub error: String,
    /// Request path.
    pub path: String,
    /// Machine-readable error code, when one applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Additional detail lines, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// An HTTP error ready to be rendered.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
    challenge: bool,
}

impl ApiError {
    /// Creates an error with the given status and message.
    #[must_use]
    pub fn new(status: StatusCode, error: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                timestamp: Utc::now(),
                status: status.as_u16(),
                error: error.into(),
                path: path.into(),
                code: None,
                details: None,
            },
            challenge: false,
        }
    }

    /// Attaches a machine-readable code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.body.code = Some(code.into());
        self
    }

    /// Attaches detail lines.
    #[must_use]
    pub fn with_details(mut self, details: impl IntoIterator<Item = String>) -> Self {
        self.body.details = Some(details.into_iter().collect());
        self
    }

    /// 400 for a request the server could not decode.
    #[must_use]
    pub fn bad_request(error: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error, path)
    }

    /// 401 with a bearer challenge.
    #[must_use]
    pub fn unauthorized(path: impl Into<String>) -> Self {
        let mut error = Self::new(
            StatusCode::UNAUTHORIZED,
            "Full authentication is required to access this resource.",
            path,
        )
        .with_code("UNAUTHORIZED");
        error.challenge = true;
        error
    }

    /// 404 for a path no route matches.
    #[must_use]
    pub fn route_not_found(path: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "No endpoint matches this path.", path)
    }

    /// 405 for a known path used with the wrong method.
    #[must_use]
    pub fn method_not_allowed(method: &str, path: impl Into<String>) -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("Request method '{method}' is not supported for this path."),
            path,
        )
    }

    /// Maps a use case failure onto its HTTP status and code.
    ///
    /// Repository failures become a 500 with a generic message; the cause is
    /// logged here and never sent to the client.
    #[must_use]
    pub fn from_use_case(error: &TaskUseCaseError, path: &str) -> Self {
        let status = match error {
            TaskUseCaseError::DomainValidation(_)
            | TaskUseCaseError::PageNumberNegative
            | TaskUseCaseError::PageSizeNegative
            | TaskUseCaseError::PageSizeTooLarge => StatusCode::BAD_REQUEST,
            TaskUseCaseError::TaskNotFound(_) | TaskUseCaseError::TaskUpdateFailed(_) => {
                StatusCode::NOT_FOUND
            }
            TaskUseCaseError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status.is_server_error() {
            tracing::error!(%error, path, "unhandled task repository failure");
            INTERNAL_ERROR_MESSAGE.to_owned()
        } else {
            tracing::debug!(%error, code = error.code(), path, "task request rejected");
            error.to_string()
        };

        Self::new(status, message, path).with_code(error.code())
    }

    /// Returns the HTTP status of this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the JSON body of this error.
    #[must_use]
    pub const fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();
        if self.challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
