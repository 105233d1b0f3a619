//! Request extractors: the signed-in user and the response format.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::{header, request::Parts, HeaderMap},
};
use serde::Deserialize;
use tracing::debug;

use gather_core::CurrentUser;

use crate::error::ApiError;
use crate::state::AppState;

/// The signed-in user. Rejects with a redirect to sign-in when the request
/// carries no valid session token.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub CurrentUser);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let rejection = || ApiError::AuthenticationRequired {
            sign_in_path: state.auth.sign_in_path.clone(),
        };

        let token = session_token(&parts.headers, &state.auth.cookie_name).ok_or_else(rejection)?;
        let user_id = state.tokens.resolve_user(token).map_err(|e| {
            debug!("Rejected session token: {}", e);
            rejection()
        })?;

        Ok(Authenticated(CurrentUser::new(user_id)))
    }
}

/// Bearer token first, then the session cookie.
fn session_token<'a>(headers: &'a HeaderMap, cookie_name: &str) -> Option<&'a str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value)
        .filter(|t| !t.is_empty())
}

/// How a successful mutation answers: redirect (HTML) or a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Html,
    Json,
}

#[derive(Deserialize)]
struct FormatQuery {
    format: Option<String>,
}

impl ResponseFormat {
    /// `?format=` wins; otherwise the first media type in `Accept`.
    pub fn negotiate(parts: &Parts) -> Self {
        let requested = Query::<FormatQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.format);
        match requested.as_deref() {
            Some("json") => return ResponseFormat::Json,
            Some("html") => return ResponseFormat::Html,
            _ => {}
        }

        let prefers_json = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|first| first.trim().starts_with("application/json"))
            .unwrap_or(false);

        if prefers_json {
            ResponseFormat::Json
        } else {
            ResponseFormat::Html
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for ResponseFormat {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::negotiate(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};

    fn parts(uri: &str, accept: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri(uri);
        if let Some(accept) = accept {
            builder = builder.header(header::ACCEPT, accept);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_format_query_parameter() {
        assert_eq!(ResponseFormat::negotiate(&parts("/groups?format=json", None)), ResponseFormat::Json);
        assert_eq!(
            ResponseFormat::negotiate(&parts("/groups?format=html", Some("application/json"))),
            ResponseFormat::Html
        );
    }

    #[test]
    fn test_format_accept_header() {
        assert_eq!(
            ResponseFormat::negotiate(&parts("/groups", Some("application/json, text/plain"))),
            ResponseFormat::Json
        );
        assert_eq!(
            ResponseFormat::negotiate(&parts("/groups", Some("text/html,application/json;q=0.9"))),
            ResponseFormat::Html
        );
        assert_eq!(ResponseFormat::negotiate(&parts("/groups", None)), ResponseFormat::Html);
    }

    #[test]
    fn test_session_token_sources() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_token(&headers, "gather_session"), None);

        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark; gather_session=abc"));
        assert_eq!(session_token(&headers, "gather_session"), Some("abc"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));
        assert_eq!(session_token(&headers, "gather_session"), Some("xyz"));
    }
}
