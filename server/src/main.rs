mod config;
mod routes;
mod state;
mod upstream;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let upstream = upstream::UpstreamClient::new(&config.backend).expect("backend HTTP client init failed");
    tracing::info!(backend = upstream.base_url(), "forwarding /api calls to backend");

    let state = state::AppState::new(upstream);
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "asistente listening");
    axum::serve(listener, app).await.expect("server failed");
}
