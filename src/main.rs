use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use product_catalog::{
    config::{self, load_config},
    create_router,
    infrastructure::{logger::Logger, repository::InMemoryRepository, seed},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config().context("加载配置失败")?;
    Logger::init(&config.logging.level);
    config::report_source(source.as_deref());

    let products = seed::products().context("解析 products.json 失败")?;
    let categories = seed::categories().context("解析 categories.json 失败")?;
    info!(
        "✅ 已加载 {} 个产品, {} 个分类",
        products.len(),
        categories.len()
    );

    let state = AppState::new(
        Arc::new(InMemoryRepository::new(products)),
        Arc::new(InMemoryRepository::new(categories)),
        &config.environment,
    );
    let app = create_router(state, &config);

    let address = config.listen_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("无法绑定到 {}", address))?;

    info!(
        "🚀 App is running at http://localhost:{} in {} mode",
        config.http.port, config.environment
    );
    info!("   Press CTRL-C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听 Ctrl-C: {}", e);
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
}
