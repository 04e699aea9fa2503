use sea_orm::Database;
use tracing::info;

use staynest_core::tracing::init_tracing;
use staynest_rentals::config::RentalsConfig;
use staynest_rentals::router::build_router;
use staynest_rentals::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = RentalsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.rentals_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("rentals service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
