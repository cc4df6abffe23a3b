//! Authentication service

use std::collections::BTreeMap;

use crate::{
    client::Backend,
    constants::routes,
    error::{AppError, AppResult},
    models::{ApiEnvelope, LoginForm, SignupForm},
    utils::validation,
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Log in with username and password
    pub async fn login(backend: &dyn Backend, form: &LoginForm) -> AppResult<ApiEnvelope> {
        tracing::info!(username = %form.username, "Logging in");
        let reply = backend
            .post_json(routes::LOGIN, Some(serde_json::to_value(form)?))
            .await?;
        let mut envelope: ApiEnvelope = reply.json()?;
        envelope.success &= reply.is_ok();

        if !envelope.success {
            tracing::warn!(username = %form.username, status = reply.status, "Login rejected");
        }
        Ok(envelope)
    }

    /// Per-field problems with a signup form, keyed by field name
    pub fn signup_errors(form: &SignupForm) -> BTreeMap<&'static str, &'static str> {
        [
            ("username", validation::validate_username(&form.username)),
            ("email", validation::validate_email(&form.email)),
            ("password", validation::validate_password(&form.password)),
            ("full_name", validation::validate_full_name(&form.full_name)),
        ]
        .into_iter()
        .filter_map(|(field, result)| result.err().map(|msg| (field, msg)))
        .collect()
    }

    /// Register a new account
    ///
    /// The form is checked locally first; all field problems are reported together.
    pub async fn signup(backend: &dyn Backend, form: &SignupForm) -> AppResult<ApiEnvelope> {
        let errors = Self::signup_errors(form);
        if !errors.is_empty() {
            let summary = errors
                .iter()
                .map(|(field, msg)| format!("{}: {}", field, msg))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AppError::Validation(summary));
        }

        tracing::info!(username = %form.username, "Creating account");
        let reply = backend
            .post_json(routes::SIGNUP, Some(serde_json::to_value(form)?))
            .await?;
        let mut envelope: ApiEnvelope = reply.json()?;
        envelope.success &= reply.is_ok();
        Ok(envelope)
    }
}
