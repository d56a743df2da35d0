use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mergington_activities::config::Config;
use mergington_activities::routes::create_routes;
use mergington_activities::store::ActivityStore;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mergington_activities=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    let store = Arc::new(ActivityStore::seeded().expect("Seed catalog must be valid"));
    tracing::info!(
        activities = store.list_activities().await.len(),
        "Activity catalog loaded"
    );

    let app: Router = create_routes(store, &config.static_dir);

    let addr = config.bind_addr().expect("HOST/PORT must form a socket address");
    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
