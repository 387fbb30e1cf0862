use std::sync::Arc;

use anyhow::Context;
use nopickles_mvp::{
    config::Config,
    routes,
    services::{menu::MenuCatalog, provider::OpenAiProvider},
    state::AppState,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,nopickles_mvp=debug,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let provider = OpenAiProvider::new(
        config.openai.api_key.clone(),
        config.openai.base_url.clone(),
        config.openai.timeout,
    )
    .context("failed to build HTTP client")?;

    let state = Arc::new(AppState::new(Arc::new(MenuCatalog::nopickles()), Arc::new(provider)));
    let app = routes::create_router(&config.static_dir).with_state(state);

    let listener = config.bind().await?;

    tracing::info!("NoPickles MVP listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
