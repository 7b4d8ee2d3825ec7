use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so an empty environment is a valid config.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_path: env_or("DATABASE_PATH", "smarthire.db"),
            host: "0.0.0.0".to_string(),
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_to_default() {
        assert_eq!(
            env_or("SMARTHIRE_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
