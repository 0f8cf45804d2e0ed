// src/auth/session.rs
use axum::http::HeaderValue;
use std::future::Future;
use url::Url;

use super::{rejection, SignupError};
use crate::models::{SignInBody, SignInOutcome, SignInRequest};

pub const CREDENTIALS_CALLBACK_PATH: &str = "/api/auth/callback/credentials";

/// Establishes a session for freshly created credentials.
pub trait SessionStarter {
    fn start_session(
        &self,
        request: &SignInRequest,
    ) -> impl Future<Output = Result<SignInOutcome, SignupError>> + Send;
}

/// Signs in through the auth service's credentials callback.
#[derive(Clone)]
pub struct CredentialsSessionStarter {
    http: reqwest::Client,
    endpoint: Url,
}

impl CredentialsSessionStarter {
    pub fn new(http: reqwest::Client, service_url: &Url) -> Result<Self, SignupError> {
        Ok(Self {
            http,
            endpoint: service_url.join(CREDENTIALS_CALLBACK_PATH)?,
        })
    }
}

impl SessionStarter for CredentialsSessionStarter {
    async fn start_session(&self, request: &SignInRequest) -> Result<SignInOutcome, SignupError> {
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        let cookies: Vec<String> = resp
            .headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();

        // An empty or non-JSON body means "go to the callback url"
        let body = resp.text().await.unwrap_or_default();
        let redirect_url = match serde_json::from_str::<SignInBody>(&body)
            .unwrap_or_default()
            .url
        {
            Some(url) => redirect_target(&url).unwrap_or_else(|| {
                tracing::warn!(url = ?url, "ignoring unusable redirect from auth service");
                request.callback_url.clone()
            }),
            None => request.callback_url.clone(),
        };

        tracing::info!(email = %request.email, redirect = %redirect_url, "session started");

        Ok(SignInOutcome {
            redirect_url,
            cookies,
        })
    }
}

/// Normalize `url` into something that can go into a `Location` header.
/// Only absolute urls are accepted.
pub(crate) fn redirect_target(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    HeaderValue::try_from(url.as_str()).ok()?;
    Some(url.into())
}
