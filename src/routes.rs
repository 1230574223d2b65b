//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backend prefixes are forwarded by `proxy`; every other path is served
//! from the built client bundle, falling back to `index.html` so the
//! hash-routed app loads from any entry URL.

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::GatewayError;
use crate::proxy::{self, ProxyRule};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    // Nested prefixes such as `/api/ai_search` reach `forward` through their
    // parent's catch-all; `match_rule` still picks them first.
    let mut router = Router::new().route("/healthz", get(healthz));
    let rules = &state.config.rules;
    for rule in rules.iter().filter(|rule| !covered_by_other(rules, rule)) {
        router = router
            .route(rule.prefix, any(forward))
            .route(&format!("{}/{{*rest}}", rule.prefix), any(forward));
    }

    router
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn covered_by_other(rules: &[ProxyRule], rule: &ProxyRule) -> bool {
    rules.iter().any(|other| other.prefix != rule.prefix && other.matches(rule.prefix))
}

async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, GatewayError> {
    let Some(rule) = proxy::match_rule(&state.config.rules, req.uri().path()).copied() else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    proxy::forward(&state.http, &state.config.backend_url, &rule, req).await
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
