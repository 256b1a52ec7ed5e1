use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use banners::modules::banners::adapters::outbound::banner_store_in_memory::InMemoryBannerStore;
use banners::shared::infrastructure::image_sink::filesystem::FilesystemImageSink;
use banners::shell::config::Config;
use banners::shell::http::router;
use banners::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real deployments set the variables directly.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("banners=info,tower_http=info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env().context("failed to read configuration")?;

    let sink = FilesystemImageSink::new(&config.image_dir);
    sink.ensure_base_dir().await.with_context(|| {
        format!(
            "failed to create image directory {}",
            config.image_dir.display()
        )
    })?;

    let state = AppState::new(
        Arc::new(InMemoryBannerStore::new()),
        Arc::new(sink),
        config.max_upload_bytes,
    );

    let app = router(state, &config.image_dir).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    tracing::info!("Banners endpoint: http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
