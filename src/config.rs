// src/config.rs
use std::net::SocketAddr;
use url::Url;

pub const DEFAULT_CALLBACK_URL: &str = "https://app.documenso.com/dashboard";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a number: {source}")]
    InvalidNumber {
        key: &'static str,
        source: std::num::ParseIntError,
    },
    #[error("{key} must be an absolute url: {source}")]
    InvalidUrl {
        key: &'static str,
        source: url::ParseError,
    },
    #[error("invalid server address {0}")]
    InvalidAddr(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base url of the service that owns `/api/auth/*`.
    pub auth_service_url: Url,
    /// Where the browser lands once the session exists.
    pub callback_url: Url,
    pub login_url: String,
    pub enable_hsts: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let auth_service_url = Url::parse(&var("AUTH_SERVICE_URL", "http://localhost:3000"))
            .map_err(|source| ConfigError::InvalidUrl {
                key: "AUTH_SERVICE_URL",
                source,
            })?;

        let callback_url = Url::parse(&var("SIGNUP_CALLBACK_URL", DEFAULT_CALLBACK_URL))
            .map_err(|source| ConfigError::InvalidUrl {
                key: "SIGNUP_CALLBACK_URL",
                source,
            })?;

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "3000")
                .parse()
                .map_err(|source| ConfigError::InvalidNumber { key: "PORT", source })?,
            auth_service_url,
            callback_url,
            login_url: var("LOGIN_URL", "/login"),
            enable_hsts: var("ENABLE_HSTS", "false") == "true",
        })
    }

    pub fn server_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddr(addr))
    }
}
