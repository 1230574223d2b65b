use axum::http::HeaderValue;

use super::*;

// =============================================================================
// ProxyRule matching
// =============================================================================

#[test]
fn prefix_matches_exact_and_nested_paths() {
    let rule = ProxyRule::new("/api", false);
    assert!(rule.matches("/api"));
    assert!(rule.matches("/api/"));
    assert!(rule.matches("/api/testToken"));
}

#[test]
fn prefix_requires_segment_boundary() {
    let rule = ProxyRule::new("/api", false);
    assert!(!rule.matches("/apix"));
    assert!(!rule.matches("/"));
    assert!(!rule.matches("/search/api"));
}

#[test]
fn ai_search_wins_over_api() {
    let rules = default_rules(true);
    let rule = match_rule(&rules, "/api/ai_search/query").unwrap();
    assert_eq!(rule.prefix, "/api/ai_search");
    assert!(!rule.strip_prefix);
}

#[test]
fn unmatched_paths_fall_through() {
    let rules = default_rules(false);
    assert!(match_rule(&rules, "/").is_none());
    assert!(match_rule(&rules, "/index.html").is_none());
    assert!(match_rule(&rules, "/pkg/client.wasm").is_none());
}

#[test]
fn default_rules_cover_backend_prefixes() {
    let rules = default_rules(false);
    for path in ["/api/token", "/search", "/cws", "/reading/42"] {
        assert!(match_rule(&rules, path).is_some(), "{path}");
    }
    assert!(rules.iter().all(|r| !r.strip_prefix));
}

// =============================================================================
// Rewriting
// =============================================================================

#[test]
fn rewrite_keeps_path_without_strip() {
    let rule = ProxyRule::new("/api", false);
    assert_eq!(rule.rewrite("/api/testToken"), "/api/testToken");
}

#[test]
fn rewrite_strips_prefix() {
    let rule = ProxyRule::new("/api", true);
    assert_eq!(rule.rewrite("/api/testToken"), "/testToken");
    assert_eq!(rule.rewrite("/api"), "/");
}

#[test]
fn upstream_url_joins_backend_path_and_query() {
    let rule = ProxyRule::new("/api", true);
    assert_eq!(
        upstream_url("http://localhost:8000", &rule, "/api/testToken", None),
        "http://localhost:8000/testToken"
    );
    assert_eq!(
        upstream_url("http://localhost:8000", &rule, "/api/search", Some("q=grace&page=2")),
        "http://localhost:8000/search?q=grace&page=2"
    );
    assert_eq!(upstream_url("http://b", &rule, "/api/x", Some("")), "http://b/x");
}

// =============================================================================
// Headers
// =============================================================================

#[test]
fn strip_hop_headers_keeps_end_to_end_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:5173"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    strip_hop_headers(&mut headers);

    assert!(headers.get(header::HOST).is_none());
    assert!(headers.get(header::CONNECTION).is_none());
    assert!(headers.get(header::TRANSFER_ENCODING).is_none());
    assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Bearer abc123");
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
}
