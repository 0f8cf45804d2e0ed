// src/models.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const PASSWORD_TOO_SHORT: &str = "Your password has to be at least 7 characters long.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

/// Values entered into the signup form.
///
/// The username input is not rendered, so every field defaults to an empty
/// string when missing from the submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct FormValues {
    #[serde(default)]
    pub username: String,
    // Rule messages must match PASSWORD_TOO_SHORT and INVALID_EMAIL; the
    // rule tests below assert it.
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 7, message = "Your password has to be at least 7 characters long."))]
    pub password: String,
}

/// Keys of the error bag. `ApiError` is not a real input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ApiError,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ApiError => "apiError",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "username" => Some(Field::Username),
            "email" => Some(Field::Email),
            "password" => Some(Field::Password),
            "apiError" => Some(Field::ApiError),
            _ => None,
        }
    }
}

// Request/Response types

/// Body sent to the signup endpoint. Only these three fields leave the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<&FormValues> for SignupPayload {
    fn from(values: &FormValues) -> Self {
        Self {
            username: values.username.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub callback_url: String,
}

impl SignInRequest {
    pub fn new(values: &FormValues, callback_url: &str) -> Self {
        Self {
            username: values.username.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
            callback_url: callback_url.to_string(),
        }
    }
}

/// Result of a successful credential sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOutcome {
    pub redirect_url: String,
    /// Raw `Set-Cookie` values issued by the auth service.
    pub cookies: Vec<String>,
}

/// Failure body returned by the auth service.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SignInBody {
    pub url: Option<String>,
}
