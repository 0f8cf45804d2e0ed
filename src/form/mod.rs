// src/form/mod.rs
pub mod errors;
pub mod toast;

use validator::Validate;

use crate::auth::{SessionStarter, SignupApi, SignupError};
use crate::models::{Field, FormValues, SignInOutcome, SignInRequest, SignupPayload};

pub use errors::ErrorBag;
pub use toast::{Notifier, Toaster};

/// Where a submission currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    SigningIn,
    Redirected(SignInOutcome),
    ServerError(String),
    ValidationError(ErrorBag),
}

/// What caused a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Change,
    Submit,
}

/// State of one rendered signup form.
#[derive(Debug, Clone)]
pub struct SignupForm {
    values: FormValues,
    errors: ErrorBag,
    status: FormStatus,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new(FormValues::default())
    }
}

impl SignupForm {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            errors: ErrorBag::new(),
            status: FormStatus::Idle,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorBag {
        &self.errors
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn set_error(&mut self, field: Field, message: impl Into<String>) {
        self.errors.set(field, message);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Any edit wipes every error, `apiError` included, and validates again.
    ///
    /// Edits only run the password length rule, and only once something has
    /// been typed into the password. Email format and empty fields are
    /// checked on submit.
    pub fn on_change(&mut self, values: FormValues) -> &FormStatus {
        self.values = values;
        self.clear_errors();
        self.validate(Trigger::Change);
        &self.status
    }

    fn validate(&mut self, trigger: Trigger) -> bool {
        let mut bag = match self.values.validate() {
            Ok(()) => ErrorBag::new(),
            Err(e) => ErrorBag::from(&e),
        };

        if trigger == Trigger::Change {
            bag.remove(Field::Email);
            if self.values.password.is_empty() {
                bag.remove(Field::Password);
            }
        }

        if bag.is_empty() {
            self.status = FormStatus::Idle;
            return true;
        }
        self.errors = bag.clone();
        self.status = FormStatus::ValidationError(bag);
        false
    }

    /// Validate, create the account, then start a session that lands on
    /// `callback_url`.
    pub async fn submit<A, S, N>(
        &mut self,
        api: &A,
        sessions: &S,
        notifier: &mut N,
        callback_url: &str,
    ) -> &FormStatus
    where
        A: SignupApi + Sync,
        S: SessionStarter + Sync,
        N: Notifier + Send,
    {
        self.clear_errors();
        if !self.validate(Trigger::Submit) {
            tracing::debug!(email = %self.values.email, "signup blocked by validation");
            return &self.status;
        }

        self.status = FormStatus::Submitting;
        let toast_id = notifier.loading(toast::LOADING_MESSAGE);

        match self.create_and_sign_in(api, sessions, callback_url).await {
            Ok(outcome) => {
                notifier.success(toast_id, toast::SUCCESS_MESSAGE);
                self.status = FormStatus::Redirected(outcome);
            }
            Err(e) => {
                let message = e.user_message();
                tracing::warn!(email = %self.values.email, error = %e, "signup failed");
                notifier.error(toast_id, &message);
                notifier.dismiss_all();
                self.errors.set(Field::ApiError, message.clone());
                self.status = FormStatus::ServerError(message);
            }
        }

        &self.status
    }

    async fn create_and_sign_in<A, S>(
        &mut self,
        api: &A,
        sessions: &S,
        callback_url: &str,
    ) -> Result<SignInOutcome, SignupError>
    where
        A: SignupApi + Sync,
        S: SessionStarter + Sync,
    {
        api.sign_up(&SignupPayload::from(&self.values)).await?;

        self.status = FormStatus::SigningIn;
        sessions
            .start_session(&SignInRequest::new(&self.values, callback_url))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::toast::{ToastKind, LOADING_MESSAGE, SUCCESS_MESSAGE};
    use crate::config::DEFAULT_CALLBACK_URL as SIGNUP_CALLBACK_URL;
    use crate::models::{INVALID_EMAIL, PASSWORD_TOO_SHORT};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockApi {
        reject_with: Option<String>,
        calls: Mutex<Vec<SignupPayload>>,
    }

    impl SignupApi for MockApi {
        async fn sign_up(&self, payload: &SignupPayload) -> Result<(), SignupError> {
            self.calls.lock().unwrap().push(payload.clone());
            match &self.reject_with {
                Some(message) => Err(SignupError::Rejected(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    struct MockSessions {
        calls: Mutex<Vec<SignInRequest>>,
    }

    impl SessionStarter for MockSessions {
        async fn start_session(&self, request: &SignInRequest) -> Result<SignInOutcome, SignupError> {
            self.calls.lock().unwrap().push(request.clone());
            Ok(SignInOutcome {
                redirect_url: request.callback_url.clone(),
                cookies: Vec::new(),
            })
        }
    }

    fn values(email: &str, password: &str) -> FormValues {
        FormValues {
            username: String::new(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_short_password_never_reaches_the_network() {
        let api = MockApi::default();
        let sessions = MockSessions::default();
        let mut toaster = Toaster::new();
        let mut form = SignupForm::new(values("a@b.com", "short"));

        let status = form
            .submit(&api, &sessions, &mut toaster, SIGNUP_CALLBACK_URL)
            .await
            .clone();

        assert!(matches!(status, FormStatus::ValidationError(_)));
        assert!(api.calls.lock().unwrap().is_empty());
        assert!(sessions.calls.lock().unwrap().is_empty());
        assert!(toaster.toasts().is_empty());
        assert_eq!(form.errors().get(Field::Password), Some(PASSWORD_TOO_SHORT));
    }

    #[tokio::test]
    async fn test_server_rejection_lands_in_api_error() {
        let api = MockApi {
            reject_with: Some("Email taken".to_string()),
            ..Default::default()
        };
        let sessions = MockSessions::default();
        let mut toaster = Toaster::new();
        let mut form = SignupForm::new(values("a@b.com", "longenough"));

        let status = form
            .submit(&api, &sessions, &mut toaster, SIGNUP_CALLBACK_URL)
            .await
            .clone();

        assert_eq!(status, FormStatus::ServerError("Email taken".to_string()));
        assert_eq!(form.errors().get(Field::ApiError), Some("Email taken"));
        assert!(sessions.calls.lock().unwrap().is_empty());

        // the loading toast became the error text, then everything was dismissed
        assert_eq!(toaster.toasts().len(), 1);
        let toast = &toaster.toasts()[0];
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Email taken");
        assert_eq!(toaster.visible().count(), 0);
    }

    #[tokio::test]
    async fn test_success_signs_in_exactly_once() {
        let api = MockApi::default();
        let sessions = MockSessions::default();
        let mut toaster = Toaster::new();
        let mut form = SignupForm::new(FormValues {
            username: "link".to_string(),
            email: "a@b.com".to_string(),
            password: "longenough".to_string(),
        });

        let status = form
            .submit(&api, &sessions, &mut toaster, SIGNUP_CALLBACK_URL)
            .await
            .clone();

        let calls = sessions.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].email, "a@b.com");
        assert_eq!(calls[0].password, "longenough");
        assert_eq!(calls[0].callback_url, SIGNUP_CALLBACK_URL);

        assert_eq!(api.calls.lock().unwrap().len(), 1);
        assert!(matches!(status, FormStatus::Redirected(ref o) if o.redirect_url == SIGNUP_CALLBACK_URL));
        assert!(form.errors().is_empty());

        let toast = &toaster.toasts()[0];
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, SUCCESS_MESSAGE);
        assert!(toast.visible);
    }

    #[tokio::test]
    async fn test_change_after_failure_clears_errors() {
        let api = MockApi {
            reject_with: Some("Email taken".to_string()),
            ..Default::default()
        };
        let sessions = MockSessions::default();
        let mut toaster = Toaster::new();
        let mut form = SignupForm::new(values("a@b.com", "longenough"));
        form.submit(&api, &sessions, &mut toaster, SIGNUP_CALLBACK_URL).await;
        assert!(form.errors().has(Field::ApiError));

        let status = form.on_change(values("c@d.com", "longenough")).clone();
        assert_eq!(status, FormStatus::Idle);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_change_revalidates_immediately() {
        let mut form = SignupForm::default();
        form.on_change(values("a@b.com", "abc"));
        assert_eq!(form.errors().get(Field::Password), Some(PASSWORD_TOO_SHORT));

        form.on_change(values("a@b.com", "abcdefg"));
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_change_with_empty_password_shows_no_length_error() {
        let mut form = SignupForm::default();
        let status = form.on_change(values("a", "")).clone();

        assert_eq!(status, FormStatus::Idle);
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_submit_still_rejects_empty_password_and_bad_email() {
        let api = MockApi::default();
        let mut form = SignupForm::new(values("a", ""));
        form.submit(&api, &MockSessions::default(), &mut Toaster::new(), SIGNUP_CALLBACK_URL)
            .await;

        assert_eq!(form.errors().get(Field::Password), Some(PASSWORD_TOO_SHORT));
        assert_eq!(form.errors().get(Field::Email), Some(INVALID_EMAIL));
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_uses_connectivity_message() {
        struct Unreachable;

        impl SignupApi for Unreachable {
            async fn sign_up(&self, _payload: &SignupPayload) -> Result<(), SignupError> {
                let err = reqwest::Client::new()
                    .post("http://127.0.0.1:9/api/auth/signup")
                    .send()
                    .await
                    .unwrap_err();
                Err(SignupError::Transport(err))
            }
        }

        let mut toaster = Toaster::new();
        let mut form = SignupForm::new(values("a@b.com", "longenough"));
        form.submit(&Unreachable, &MockSessions::default(), &mut toaster, SIGNUP_CALLBACK_URL)
            .await;

        let expected = "Could not reach the account service. Please try again.";
        assert_eq!(form.status(), &FormStatus::ServerError(expected.to_string()));
        assert_eq!(form.errors().get(Field::ApiError), Some(expected));
        assert_eq!(toaster.toasts()[0].message, expected);
    }

    #[tokio::test]
    async fn test_loading_toast_shown_while_pending() {
        // A notifier that records what it saw at each step
        #[derive(Default)]
        struct Recorder(Vec<String>);

        impl Notifier for Recorder {
            fn loading(&mut self, message: &str) -> toast::ToastId {
                self.0.push(format!("loading:{}", message));
                Toaster::new().loading(message)
            }
            fn success(&mut self, _id: toast::ToastId, message: &str) {
                self.0.push(format!("success:{}", message));
            }
            fn error(&mut self, _id: toast::ToastId, message: &str) {
                self.0.push(format!("error:{}", message));
            }
            fn dismiss_all(&mut self) {
                self.0.push("dismiss".to_string());
            }
        }

        let api = MockApi {
            reject_with: Some("Email taken".to_string()),
            ..Default::default()
        };
        let mut recorder = Recorder::default();
        let mut form = SignupForm::new(values("a@b.com", "longenough"));
        form.submit(&api, &MockSessions::default(), &mut recorder, SIGNUP_CALLBACK_URL)
            .await;

        assert_eq!(
            recorder.0,
            vec![
                format!("loading:{}", LOADING_MESSAGE),
                "error:Email taken".to_string(),
                "dismiss".to_string(),
            ]
        );
    }
}
