use std::env;

use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub default_currency: String,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let default_currency = env::var("DEFAULT_CURRENCY").unwrap_or_else(|_| "INR".to_string());
        Ok(Self {
            database_url,
            default_currency,
        })
    }
}
