use sea_orm::Database;
use tracing::info;

use staynest_auth::config::AuthConfig;
use staynest_auth::infra::mail::SmtpMailer;
use staynest_auth::router::build_router;
use staynest_auth::state::AppState;
use staynest_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let redis_cfg = deadpool_redis::Config::from_url(&config.redis_url);
    let redis = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create Redis pool");

    let mailer = SmtpMailer {
        host: config.smtp_host,
        username: config.smtp_username,
        password: config.smtp_password,
        from: config.mail_from,
    };

    let state = AppState {
        db,
        redis,
        mailer,
        otp_ttl_secs: config.otp_ttl_secs,
        otp_enforce_expiry: config.otp_enforce_expiry,
        reset_token_ttl_secs: config.reset_token_ttl_secs,
        reset_link_base: config.reset_link_base,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
