//! Path-prefix forwarding to the backend origin.
//!
//! DESIGN
//! ======
//! Rules are checked in order and the first match wins, so the more specific
//! `/api/ai_search` entry must precede `/api`. A prefix matches only on a
//! segment boundary: `/api` covers `/api` and `/api/token`, not `/apix`.
//!
//! The upstream `Host` header is replaced by the target origin's, and
//! hop-by-hop headers are dropped in both directions. Bodies are buffered.

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::HeaderMap;
use axum::http::header::{self, HeaderName};
use axum::response::Response;

use crate::error::GatewayError;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// One forwarded path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyRule {
    pub prefix: &'static str,
    /// Remove `prefix` from the path before forwarding.
    pub strip_prefix: bool,
}

impl ProxyRule {
    pub const fn new(prefix: &'static str, strip_prefix: bool) -> Self {
        Self { prefix, strip_prefix }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.strip_prefix(self.prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }

    /// Path to request upstream for an incoming `path` this rule matches.
    pub fn rewrite<'p>(&self, path: &'p str) -> &'p str {
        if !self.strip_prefix {
            return path;
        }
        match path.strip_prefix(self.prefix) {
            Some("") => "/",
            Some(rest) => rest,
            None => path,
        }
    }
}

/// Forwarded prefixes in match order.
///
/// `strip_api` controls whether `/api` is removed before forwarding; the
/// AI search prefix always keeps it.
pub fn default_rules(strip_api: bool) -> Vec<ProxyRule> {
    vec![
        ProxyRule::new("/api/ai_search", false),
        ProxyRule::new("/api", strip_api),
        ProxyRule::new("/search", false),
        ProxyRule::new("/cws", false),
        ProxyRule::new("/reading", false),
    ]
}

/// First rule matching `path`.
pub fn match_rule<'a>(rules: &'a [ProxyRule], path: &str) -> Option<&'a ProxyRule> {
    rules.iter().find(|rule| rule.matches(path))
}

/// Full upstream URL for a request.
pub fn upstream_url(backend_url: &str, rule: &ProxyRule, path: &str, query: Option<&str>) -> String {
    let target = rule.rewrite(path);
    match query {
        Some(q) if !q.is_empty() => format!("{backend_url}{target}?{q}"),
        _ => format!("{backend_url}{target}"),
    }
}

/// Remove headers that describe a single connection rather than the message.
pub fn strip_hop_headers(headers: &mut HeaderMap) {
    for name in hop_by_hop() {
        headers.remove(name);
    }
}

fn hop_by_hop() -> [HeaderName; 8] {
    [
        header::CONNECTION,
        header::HOST,
        header::CONTENT_LENGTH,
        header::TE,
        header::TRAILER,
        header::TRANSFER_ENCODING,
        header::UPGRADE,
        header::PROXY_AUTHORIZATION,
    ]
}

/// Relay `req` to the backend and translate the answer back.
///
/// # Errors
///
/// Returns [`GatewayError::Body`] if the incoming body cannot be read, or
/// [`GatewayError::Upstream`] if the backend cannot be reached.
pub async fn forward(
    http: &reqwest::Client,
    backend_url: &str,
    rule: &ProxyRule,
    req: Request,
) -> Result<Response, GatewayError> {
    let (parts, body) = req.into_parts();
    let url = upstream_url(backend_url, rule, parts.uri.path(), parts.uri.query());
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| GatewayError::Body(e.to_string()))?;

    let mut headers = parts.headers;
    strip_hop_headers(&mut headers);

    tracing::debug!(method = %parts.method, %url, "forwarding request");
    let upstream = http
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let mut resp_headers = upstream.headers().clone();
    strip_hop_headers(&mut resp_headers);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = resp_headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
