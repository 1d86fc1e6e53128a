//! Per-request caller identity.
//!
//! Nothing is authenticated or stored. The headers only label the request's
//! tracing span so logs can be filtered by who was asking.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use learngap_core::questionnaire::Audience;

pub const ROLE_HEADER: &str = "x-user-role";
pub const USER_ID_HEADER: &str = "x-user-id";

/// Who is calling, as far as the request headers say.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub role: Option<Audience>,
    pub user_id: Option<String>,
}

impl Session {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let role = header(ROLE_HEADER).and_then(|raw| match raw.parse::<Audience>() {
            Ok(role) => Some(role),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unrecognised role header");
                None
            }
        });

        Self {
            role,
            user_id: header(USER_ID_HEADER).map(str::to_string),
        }
    }

    pub fn role_label(&self) -> &str {
        self.role.map_or("anonymous", |r| r.as_str())
    }

    pub fn user_label(&self) -> &str {
        self.user_id.as_deref().unwrap_or("-")
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session::from_headers(&parts.headers))
    }
}
