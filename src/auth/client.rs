// src/auth/client.rs
use std::future::Future;
use url::Url;

use super::{rejection, SignupError};
use crate::models::SignupPayload;

pub const SIGNUP_PATH: &str = "/api/auth/signup";

/// Creates accounts on the auth service.
pub trait SignupApi {
    fn sign_up(
        &self,
        payload: &SignupPayload,
    ) -> impl Future<Output = Result<(), SignupError>> + Send;
}

#[derive(Clone)]
pub struct HttpSignupApi {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpSignupApi {
    pub fn new(http: reqwest::Client, service_url: &Url) -> Result<Self, SignupError> {
        Ok(Self {
            http,
            endpoint: service_url.join(SIGNUP_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SignupApi for HttpSignupApi {
    async fn sign_up(&self, payload: &SignupPayload) -> Result<(), SignupError> {
        tracing::debug!(endpoint = %self.endpoint, email = %payload.email, "creating account");

        // .json() also sets Content-Type: application/json
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        tracing::info!(email = %payload.email, "account created");
        Ok(())
    }
}
