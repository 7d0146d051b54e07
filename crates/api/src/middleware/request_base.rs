//! Absolute addresses derived from the current request.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::header::HOST;
use axum::http::request::Parts;

use crate::state::AppState;

/// The base address (scheme + authority) and path of the current request.
///
/// Handlers pass this explicitly into the mapper; nothing about the request
/// is kept as ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBase {
    /// e.g. `http://localhost:3000`, never with a trailing slash.
    pub base_url: String,
    /// Request path as received, without the query string.
    pub path: String,
}

impl RequestBase {
    /// Absolute URI of a child resource: the request's own address with a
    /// trailing `/` ensured, followed by `id`.
    pub fn child_url(&self, id: &str) -> String {
        let mut url = format!("{}{}", self.base_url, self.path);
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str(id);
        url
    }
}

/// Resolve the base address: configured public URL first, then the `Host`
/// header, then the bind address.
fn resolve_base_url(parts: &Parts, state: &AppState) -> String {
    if let Some(base) = &state.config.public_base_url {
        return base.clone();
    }
    match parts.headers.get(HOST).and_then(|v| v.to_str().ok()) {
        Some(host) if !host.is_empty() => format!("http://{host}"),
        _ => format!("http://{}:{}", state.config.host, state.config.port),
    }
}

impl FromRequestParts<AppState> for RequestBase {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|uri| uri.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        Ok(RequestBase {
            base_url: resolve_base_url(parts, state),
            path,
        })
    }
}
