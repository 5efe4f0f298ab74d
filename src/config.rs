use std::env;

use anyhow::{Context, Result, ensure};

use crate::jwt::MIN_SECRET_BYTES;

const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite database path (the document store's connection string)
    pub database_url: String,
    /// HS256 secret used to sign and verify access tokens
    pub access_token_secret: String,
    pub stripe_secret_key: String,
    /// Overridable so a local stand-in can replace the hosted gateway
    pub stripe_api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        Ok(Self {
            host,
            port,
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "bistro.db".to_string()),
            access_token_secret: token_secret(required("ACCESS_TOKEN_SECRET")?)?,
            stripe_secret_key: required("STRIPE_SECRET_KEY")?,
            stripe_api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_STRIPE_API_BASE.to_string()),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{} must be set", key))
}

/// Reject signing secrets too short for HS256, so a weak key fails at startup
/// rather than on every token request.
fn token_secret(secret: String) -> Result<String> {
    ensure!(
        secret.len() >= MIN_SECRET_BYTES,
        "ACCESS_TOKEN_SECRET must be at least {} bytes",
        MIN_SECRET_BYTES
    );
    Ok(secret)
}
