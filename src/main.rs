use std::net::SocketAddr;
use std::time::Duration;
use tokio::task;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_demo::{catalog::CatalogClient, config::Config, demo, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting NotFlix cinema demo");

    // Общее состояние приложения: афиша в памяти + конфиг
    let app_state = AppState::new(config.clone());
    info!("Catalog seeded with {} movies", app_state.store.len());

    // --- Start background tasks ---

    // Сценарий демо: загружает афишу через HTTP и проходит бронирование.
    if config.features.run_demo_flow {
        let client = CatalogClient::from_config(&config.catalog);
        task::spawn(async move {
            // Небольшая пауза, чтобы сервер успел подняться.
            tokio::time::sleep(Duration::from_millis(300)).await;
            if let Err(e) = demo::run(&client).await {
                error!("demo flow failed: {}", e);
            }
        });
    }

    // --- Start the web server ---

    let app = cinema_demo::router(app_state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.app.port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
