use village_cms_api::{app, config::config, database::connect_pool, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config();

    let pool = connect_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState::from_pool(pool);
    let router = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.app.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("village cms api listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
