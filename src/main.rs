use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use forum_favorites::{
    config::Config,
    infrastructure::{plugin_store::RedisPluginStore, redis},
    routes::create_routes,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let config = Arc::new(config);

    let redis_conn = redis::create_connection(&config.redis).await?;
    let store = Arc::new(RedisPluginStore::new(redis_conn));

    let state = AppState::new(config.clone(), store);

    // the feature flag is read once here; disabled means the favorites
    // routes are simply never registered
    if !config.favorites.enabled {
        tracing::warn!("favorites disabled, serving /health only");
    }

    let app = create_routes(config.favorites.enabled).with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("forum-favorites running on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
