use contact_service::{api, storage};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_service=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Contact Message Service");

    // Open the database; the file is created on first run
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:contact-messages.db".to_string());

    tracing::info!("Using database: {}", database_url);

    let store = storage::MessageStore::connect(&database_url).await.unwrap();

    // Build application router
    let app = api::create_router(api::AppState::new(store));

    // Bind to address
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8085".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Listening on {}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/messages");
    tracing::info!("  GET  /api/v1/messages");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
