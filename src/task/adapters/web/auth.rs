//! Bearer-token gate in front of the task endpoints.

use super::ApiError;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::collections::HashSet;
use std::sync::Arc;

/// Set of bearer tokens accepted by the task API.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    tokens: Arc<HashSet<String>>,
    enforced: bool,
}

impl BearerAuth {
    /// Accepts requests carrying any of `tokens`.
    ///
    /// An empty token set rejects every request.
    #[must_use]
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: Arc::new(
                tokens
                    .into_iter()
                    .map(|token| token.trim().to_owned())
                    .filter(|token| !token.is_empty())
                    .collect(),
            ),
            enforced: true,
        }
    }

    /// Lets every request through.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            tokens: Arc::default(),
            enforced: false,
        }
    }

    /// Returns whether token checks are applied.
    #[must_use]
    pub const fn is_enforced(&self) -> bool {
        self.enforced
    }

    /// Returns whether the raw `Authorization` header value grants access.
    #[must_use]
    pub fn authorizes(&self, authorization: Option<&str>) -> bool {
        if !self.enforced {
            return true;
        }
        authorization
            .and_then(bearer_token)
            .is_some_and(|token| self.tokens.contains(token))
    }
}

fn bearer_token(authorization: &str) -> Option<&str> {
    let (scheme, token) = authorization.trim().split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
        .filter(|candidate| !candidate.is_empty())
}

/// Middleware rejecting requests without an accepted bearer token.
pub async fn require_bearer_token(
    State(auth): State<BearerAuth>,
    request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let has_header = authorization.is_some();
    if auth.authorizes(authorization) {
        return next.run(request).await;
    }

    let path = request.uri().path().to_owned();
    tracing::debug!(path = %path, has_header, "rejected unauthenticated request");
    ApiError::unauthorized(path).into_response()
}
