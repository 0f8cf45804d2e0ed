// src/auth/mod.rs
pub mod client;
pub mod session;

use crate::models::ErrorBody;

pub use client::{HttpSignupApi, SignupApi};
pub use session::{CredentialsSessionStarter, SessionStarter};

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    /// The auth service answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
    #[error("Could not reach the account service. Please try again.")]
    Transport(#[from] reqwest::Error),
    #[error("invalid service url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SignupError {
    /// Text shown to the user in toasts and the api-error panel.
    pub fn user_message(&self) -> String {
        match self {
            SignupError::InvalidUrl(_) => GENERIC_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Turn a failed response into `SignupError::Rejected`, using the `message`
/// field of the JSON body when present.
pub(crate) async fn rejection(resp: reqwest::Response) -> SignupError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(err) => {
            tracing::info!(%status, reason = %err.message, "auth service rejected request");
            SignupError::Rejected(err.message)
        }
        Err(_) => {
            tracing::warn!(%status, body = %body, "auth service returned an unreadable error body");
            SignupError::Rejected(GENERIC_FAILURE.to_string())
        }
    }
}
