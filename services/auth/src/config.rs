/// Auth service configuration loaded from environment variables.
///
/// Credentials and endpoints live here, never in business logic; every
/// component receives what it needs explicitly at startup.
#[derive(Debug)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Redis connection URL.
    pub redis_url: String,
    /// SMTP relay host.
    pub smtp_host: String,
    /// SMTP username.
    pub smtp_username: String,
    /// SMTP password.
    pub smtp_password: String,
    /// From address for outbound mail (e.g. "Staynest <no-reply@staynest.dev>").
    pub mail_from: String,
    /// Base URL embedded in password-reset links (e.g. "https://staynest.dev/v1/reset-password").
    pub reset_link_base: String,
    /// One-time-code lifetime in seconds (default 300). Env var: `OTP_TTL_SECS`.
    /// Negative or malformed values fall back to the default.
    pub otp_ttl_secs: u64,
    /// Whether verification rejects expired codes (default true).
    /// Env var: `OTP_ENFORCE_EXPIRY` — set to "false" or "0" to disable.
    pub otp_enforce_expiry: bool,
    /// Reset-token lifetime in seconds (default 1800). Env var: `RESET_TOKEN_TTL_SECS`.
    pub reset_token_ttl_secs: u64,
    /// TCP port to listen on (default 3112). Env var: `AUTH_PORT`.
    pub auth_port: u16,
}

fn parse_secs(value: Option<String>, default: u64) -> u64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            redis_url: std::env::var("REDIS_URL").expect("REDIS_URL"),
            smtp_host: std::env::var("SMTP_HOST").expect("SMTP_HOST"),
            smtp_username: std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME"),
            smtp_password: std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD"),
            mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
            reset_link_base: std::env::var("RESET_LINK_BASE").expect("RESET_LINK_BASE"),
            otp_ttl_secs: parse_secs(std::env::var("OTP_TTL_SECS").ok(), 300),
            otp_enforce_expiry: std::env::var("OTP_ENFORCE_EXPIRY")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            reset_token_ttl_secs: parse_secs(std::env::var("RESET_TOKEN_TTL_SECS").ok(), 1800),
            auth_port: std::env::var("AUTH_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3112),
        }
    }
}
