use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_secret: String,
    pub jwt_secret: String,
    pub auth_issuer: String,
    pub default_hold_days: i64,
    pub sweep_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "memory://".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_secret: env::var("ADMIN_SECRET").expect("ADMIN_SECRET must be set"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            auth_issuer: env::var("AUTH_ISSUER").unwrap_or_else(|_| "https://api.venue-manager.local".to_string()),
            default_hold_days: env::var("HOLD_DAYS").unwrap_or_else(|_| "7".to_string()).parse().expect("HOLD_DAYS must be a number"),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS").unwrap_or_else(|_| "60".to_string()).parse().expect("SWEEP_INTERVAL_SECS must be a number"),
        }
    }
}
