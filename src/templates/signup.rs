// src/templates/signup.rs
use super::{html_escape, render_page};
use crate::form::{ErrorBag, SignupForm, Toaster};
use crate::models::Field;

pub const VALIDATE_PATH: &str = "/signup/validate";

const X_CIRCLE_ICON: &str = r#"<svg class="icon" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" d="M9.75 9.75l4.5 4.5m0-4.5l-4.5 4.5M21 12a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"#;

const SPARKLES_ICON: &str = r#"<svg fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" style="width:2rem;height:2rem;display:inline;margin-bottom:0.25rem"><path stroke-linecap="round" stroke-linejoin="round" d="M9.813 15.904L9 18.75l-.813-2.846a4.5 4.5 0 00-3.09-3.09L2.25 12l2.846-.813a4.5 4.5 0 003.09-3.09L9 5.25l.813 2.846a4.5 4.5 0 003.09 3.09L15.75 12l-2.846.813a4.5 4.5 0 00-3.09 3.09zM18.259 8.715L18 9.75l-.259-1.035a3.375 3.375 0 00-2.455-2.456L14.25 6l1.036-.259a3.375 3.375 0 002.455-2.456L18 2.25l.259 1.035a3.375 3.375 0 002.456 2.456L21.75 6l-1.035.259a3.375 3.375 0 00-2.456 2.456z"/></svg>"#;

// Re-validates on every keystroke and swaps the error panels in place.
const LIVE_VALIDATION_SCRIPT: &str = r#"<script>
(function () {
    const form = document.getElementById('signup-form');
    const panels = document.getElementById('form-errors');
    form.addEventListener('input', async function () {
        try {
            const resp = await fetch(form.dataset.validate, {
                method: 'POST',
                body: new URLSearchParams(new FormData(form)),
            });
            if (resp.ok) {
                panels.innerHTML = await resp.text();
            }
        } catch (_) {
            // offline: keep the panels as they are until the next edit
        }
    });
})();
</script>"#;

fn error_panel(messages: &[&str]) -> String {
    let lines: String = messages
        .iter()
        .map(|m| format!(r#"<h3><div>{}</div></h3>"#, html_escape(m)))
        .collect();

    format!(
        r#"<div class="error-panel">{}<div class="messages">{}</div></div>"#,
        X_CIRCLE_ICON, lines
    )
}

/// Panel for failures reported by the account service.
pub fn render_api_error(errors: &ErrorBag) -> Option<String> {
    errors.get(Field::ApiError).map(|m| error_panel(&[m]))
}

/// Panel for local field validation. Password first, then email.
pub fn render_form_validation(errors: &ErrorBag) -> Option<String> {
    let messages: Vec<&str> = [Field::Password, Field::Email]
        .into_iter()
        .filter_map(|f| errors.get(f))
        .collect();

    if messages.is_empty() {
        return None;
    }
    Some(error_panel(&messages))
}

pub fn render_panels(errors: &ErrorBag) -> String {
    let mut html = render_api_error(errors).unwrap_or_default();
    html.push_str(&render_form_validation(errors).unwrap_or_default());
    html
}

fn render_toasts(toaster: &Toaster) -> String {
    let toasts: String = toaster
        .visible()
        .map(|t| {
            format!(
                r#"<div class="toast {}" role="status">{}</div>"#,
                t.kind.css_class(),
                html_escape(&t.message)
            )
        })
        .collect();

    if toasts.is_empty() {
        return String::new();
    }
    format!(r#"<div class="toasts">{}</div>"#, toasts)
}

pub fn render(form: &SignupForm, toaster: &Toaster, login_url: &str) -> String {
    let content = format!(
        r#"
    <div class="auth-container">
        <div class="auth-card">
            <div>
                <h2>Create a shiny, new <br>Documenso Account {sparkles}</h2>
                <p class="subtitle">Create your account and start using<br>state-of-the-art document signing for free.</p>
            </div>
            <div id="form-errors">{panels}</div>
            <form id="signup-form" class="auth-form" method="POST" action="/signup" data-validate="{validate}">
                <input type="hidden" name="remember" value="true">
                <div>
                    <label for="email-address" class="sr-only">Email</label>
                    <input id="email-address" name="email" type="email" autocomplete="email" required placeholder="Email" value="{email}">
                </div>
                <div>
                    <label for="password" class="sr-only">Password</label>
                    <input id="password" name="password" type="password" autocomplete="current-password" required placeholder="Password">
                </div>
                <button type="submit" value="submit" class="btn-primary">Create Account</button>
                <p class="auth-footer">
                    Already have an account? <a href="{login}">Sign In</a>
                </p>
            </form>
        </div>
    </div>
    {toasts}
    {script}
    "#,
        sparkles = SPARKLES_ICON,
        panels = render_panels(form.errors()),
        validate = VALIDATE_PATH,
        email = html_escape(&form.values().email),
        login = html_escape(login_url),
        toasts = render_toasts(toaster),
        script = LIVE_VALIDATION_SCRIPT,
    );

    render_page("Sign Up", &content)
}
