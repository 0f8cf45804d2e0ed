// src/handlers/signup.rs
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;
use url::Url;

use crate::auth::session::redirect_target;

use crate::form::{FormStatus, SignupForm, Toaster};
use crate::models::{FormValues, SignInOutcome};
use crate::templates;
use crate::AppState;

pub async fn signup_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(templates::signup::render(
        &SignupForm::default(),
        &Toaster::new(),
        &state.config.login_url,
    ))
}

pub async fn signup_submit(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(values): Form<FormValues>,
) -> Response {
    let mut form = SignupForm::new(values);
    let mut toaster = Toaster::new();

    let status = form
        .submit(
            &state.api,
            &state.sessions,
            &mut toaster,
            state.config.callback_url.as_str(),
        )
        .await
        .clone();

    let page = || Html(templates::signup::render(&form, &toaster, &state.config.login_url));

    match status {
        FormStatus::Redirected(outcome) => {
            redirect_with_session(jar, outcome, &state.config.callback_url)
        }
        FormStatus::ValidationError(_) => (StatusCode::UNPROCESSABLE_ENTITY, page()).into_response(),
        _ => (StatusCode::BAD_REQUEST, page()).into_response(),
    }
}

/// Re-run validation after an edit and return the error panels.
pub async fn validate_on_change(Form(values): Form<FormValues>) -> Html<String> {
    let mut form = SignupForm::default();
    form.on_change(values);
    Html(templates::signup::render_panels(form.errors()))
}

fn redirect_with_session(jar: CookieJar, outcome: SignInOutcome, fallback: &Url) -> Response {
    let jar = outcome
        .cookies
        .into_iter()
        .filter_map(|raw| match Cookie::parse(raw) {
            Ok(cookie) => Some(cookie),
            Err(e) => {
                tracing::warn!(error = %e, "dropping unparseable session cookie");
                None
            }
        })
        .fold(jar, |jar, cookie| jar.add(cookie));

    // Redirect::to panics on values that are not valid header values
    let location = redirect_target(&outcome.redirect_url).unwrap_or_else(|| {
        tracing::warn!(url = ?outcome.redirect_url, "redirect not usable, using callback url");
        fallback.to_string()
    });

    (jar, Redirect::to(&location)).into_response()
}
