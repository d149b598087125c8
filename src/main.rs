use std::sync::Arc;

use anyhow::Context;
use keygate::{config::Config, routes::app_router, state::AppState};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keygate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Config::from_env().context("loading configuration")?;
    tracing::info!(
        bind_addr = %cfg.bind_addr,
        ttl_minutes = cfg.token_ttl.num_minutes(),
        cors_origins = ?cfg.cors_origins,
        "starting keygate"
    );

    let state = Arc::new(AppState::new(&cfg));
    let app = app_router(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("binding {}", cfg.bind_addr))?;

    axum::serve(listener, app).await?;
    Ok(())
}
