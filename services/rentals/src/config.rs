/// Rentals service configuration loaded from environment variables.
#[derive(Debug)]
pub struct RentalsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3113). Env var: `RENTALS_PORT`.
    pub rentals_port: u16,
}

impl RentalsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            rentals_port: std::env::var("RENTALS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3113),
        }
    }
}
