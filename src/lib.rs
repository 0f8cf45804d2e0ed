// src/lib.rs
pub mod auth;
pub mod config;
pub mod form;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod templates;

#[cfg(test)]
mod testing;

use crate::auth::{CredentialsSessionStarter, HttpSignupApi, SignupError};
use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub api: HttpSignupApi,
    pub sessions: CredentialsSessionStarter,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, SignupError> {
        // Both clients share one connection pool
        let http = reqwest::Client::builder()
            .user_agent(concat!("signup-portal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            api: HttpSignupApi::new(http.clone(), &config.auth_service_url)?,
            sessions: CredentialsSessionStarter::new(http, &config.auth_service_url)?,
            config,
        })
    }
}
