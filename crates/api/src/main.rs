use anyhow::Context;

use digitalproducts_api::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    digitalproducts_observability::init();

    let config = ServerConfig::from_env()?;
    let app = digitalproducts_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(addr = %listener.local_addr()?, cp = %config.cp_trigger, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
