//! Login and signup pages

use std::time::Duration;

use crate::{
    client::Backend,
    constants::{routes, SUCCESS_TOAST_MS},
    feedback::{Banner, Feedback, Presenter, Severity},
    models::{LoginForm, SignupForm},
    services::AuthService,
};

use super::FormOutcome;

fn alert(presenter: &mut dyn Presenter, text: impl Into<String>) {
    presenter.present(Feedback::Inline(Banner::sticky(Severity::Error, text)));
}

/// Login and signup form handlers
pub struct AuthPage;

impl AuthPage {
    /// Submit the login form; success goes to the home page
    pub async fn login(
        backend: &dyn Backend,
        presenter: &mut dyn Presenter,
        form: &LoginForm,
    ) -> FormOutcome {
        match AuthService::login(backend, form).await {
            Ok(envelope) if envelope.success => {
                presenter.navigate(routes::HOME);
                FormOutcome::Accepted
            }
            Ok(envelope) => {
                alert(presenter, envelope.message_or("Login failed"));
                FormOutcome::Rejected
            }
            Err(e) => {
                tracing::error!(error = %e, "Login request failed");
                alert(presenter, format!("An error occurred: {}", e));
                FormOutcome::Failed
            }
        }
    }

    /// Submit the signup form; success goes to the login page
    ///
    /// Field problems are listed together and block the request.
    pub async fn signup(
        backend: &dyn Backend,
        presenter: &mut dyn Presenter,
        form: &SignupForm,
    ) -> FormOutcome {
        let errors = AuthService::signup_errors(form);
        if !errors.is_empty() {
            let text = errors.values().copied().collect::<Vec<_>>().join("\n");
            alert(presenter, text);
            return FormOutcome::Blocked;
        }

        match AuthService::signup(backend, form).await {
            Ok(envelope) if envelope.success => {
                presenter.present(Feedback::toast(
                    "Success",
                    "Account created successfully!",
                    Duration::from_millis(SUCCESS_TOAST_MS),
                ));
                presenter.navigate(routes::LOGIN_PAGE);
                FormOutcome::Accepted
            }
            Ok(envelope) => {
                alert(presenter, envelope.message_or("Signup failed"));
                FormOutcome::Rejected
            }
            Err(e) => {
                tracing::error!(error = %e, "Signup request failed");
                alert(presenter, format!("An error occurred: {}", e));
                FormOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{HttpReply, MockBackend};
    use crate::feedback::Recorder;
    use serde_json::json;

    fn banner_text(recorder: &Recorder) -> String {
        match recorder.last() {
            Some(Feedback::Inline(banner)) => banner.text.clone(),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_success_navigates_home() {
        let mut backend = MockBackend::new();
        backend
            .expect_post_json()
            .returning(|_, _| Ok(HttpReply::new(200, json!({"success": true}))));
        let mut recorder = Recorder::default();
        let form = LoginForm {
            username: "ada".into(),
            password: "pw".into(),
        };

        assert!(AuthPage::login(&backend, &mut recorder, &form).await.is_accepted());
        assert_eq!(recorder.navigations, vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn test_login_failure_shows_server_message() {
        let mut backend = MockBackend::new();
        backend.expect_post_json().returning(|_, _| {
            Ok(HttpReply::new(401, json!({"success": false, "message": "Invalid credentials"})))
        });
        let mut recorder = Recorder::default();

        let outcome = AuthPage::login(&backend, &mut recorder, &LoginForm::default()).await;
        assert_eq!(outcome, FormOutcome::Rejected);
        assert_eq!(banner_text(&recorder), "Invalid credentials");
        assert!(recorder.navigations.is_empty());
    }

    #[tokio::test]
    async fn test_signup_lists_field_errors() {
        let mut backend = MockBackend::new();
        backend.expect_post_json().times(0);
        let mut recorder = Recorder::default();
        let form = SignupForm {
            username: "ok_name".into(),
            email: "bad".into(),
            password: "nope".into(),
            full_name: String::new(),
        };

        let outcome = AuthPage::signup(&backend, &mut recorder, &form).await;
        assert_eq!(outcome, FormOutcome::Blocked);
        assert_eq!(
            banner_text(&recorder),
            "Invalid email format\nPassword must be at least 6 characters"
        );
    }

    #[tokio::test]
    async fn test_signup_success_goes_to_login() {
        let mut backend = MockBackend::new();
        backend
            .expect_post_json()
            .withf(|path, _| path == "/api/signup")
            .returning(|_, _| Ok(HttpReply::new(201, json!({"success": true}))));
        let mut recorder = Recorder::default();
        let form = SignupForm {
            username: "grace_h".into(),
            email: "grace@example.com".into(),
            password: "Cobol1959".into(),
            full_name: "Grace Hopper".into(),
        };

        assert!(AuthPage::signup(&backend, &mut recorder, &form).await.is_accepted());
        assert_eq!(
            recorder.last(),
            Some(&Feedback::toast(
                "Success",
                "Account created successfully!",
                Duration::from_millis(1500)
            ))
        );
        assert_eq!(recorder.navigations, vec!["/login".to_string()]);
    }
}
