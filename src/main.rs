use std::sync::Arc;

use cybertip::llm::LlmClient;
use cybertip::{routes, state};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real env vars take precedence either way.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .expect("invalid PORT");
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".into());

    // The API is useless without a model, so missing LLM config is fatal.
    let llm = LlmClient::from_env().expect("LLM client configuration failed");
    tracing::info!(model = llm.model(), "LLM client initialized");

    let state = state::AppState::new(Arc::new(llm));
    let cors = routes::cors_layer(std::env::var("CORS_ALLOW_ORIGINS").ok().as_deref());

    let app = routes::app(state, cors);
    let listener = tokio::net::TcpListener::bind(format!("{bind_addr}:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%bind_addr, %port, "cybertip listening");
    axum::serve(listener, app).await.expect("server failed");
}
