mod config;
mod error;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::GatewayConfig::from_env().expect("invalid gateway configuration");
    let port = config.port;
    tracing::info!(
        backend = %config.backend_url,
        static_dir = %config.static_dir.display(),
        rules = config.rules.len(),
        "gateway configured"
    );

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "mic-portal gateway listening");
    axum::serve(listener, app).await.expect("server failed");
}
