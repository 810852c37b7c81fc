mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let state = state::AppState::new(&config.api_url);

    let app = routes::app(state, &config.data_dir).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, api_url = %config.api_url, "shelf-sense listening");
    axum::serve(listener, app).await.expect("server failed");
}
