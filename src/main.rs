mod config;
mod normalize;
mod routes;
mod services;
mod state;
mod webhook;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid relay configuration");
            std::process::exit(1);
        }
    };

    let webhook = webhook::ReqwestWebhook::new(config.webhook_url.clone(), config.timeouts)
        .expect("webhook client init failed")
        .with_max_body_bytes(config.max_reply_bytes);
    tracing::info!(
        url = webhook.url(),
        request_timeout_secs = config.timeouts.request_secs,
        strict_status = config.strict_status,
        max_reply_bytes = config.max_reply_bytes,
        "webhook client initialized"
    );

    let port = config.port;
    let state = state::AppState::new(config, Arc::new(webhook));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "chat relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
