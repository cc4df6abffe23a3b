//! Problem service
//!
//! Client-side checks for the problem form and the create/update/delete calls.

use crate::{
    client::Backend,
    constants::{routes, TEST_CASES_FIELD},
    editor::{parse_payload, ImportError, TestCaseCollection},
    error::{AppError, AppResult},
    models::{ApiEnvelope, ProblemForm, TestCasePayload},
    utils::validation,
};

/// What the backend said about a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// 2xx status and `success: true`
    pub accepted: bool,
    pub message: Option<String>,
}

impl SubmitOutcome {
    fn from_envelope(status_ok: bool, envelope: ApiEnvelope) -> Self {
        Self {
            accepted: status_ok && envelope.success,
            message: envelope.message.filter(|m| !m.is_empty()),
        }
    }
}

/// Problem service for form checks and backend calls
pub struct ProblemService;

impl ProblemService {
    /// Check the metadata fields in form order, stopping at the first failure
    pub fn check_fields(form: &ProblemForm) -> AppResult<()> {
        validation::validate_title(&form.title)
            .and_then(|_| validation::validate_slug(&form.slug))
            .and_then(|_| validation::validate_description(&form.description))
            .and_then(|_| validation::validate_difficulty(&form.difficulty))
            .map_err(|msg| AppError::Validation(msg.to_string()))
    }

    /// Create page: at least one case, each with input and expected output
    pub fn check_collection(cases: &TestCaseCollection) -> AppResult<()> {
        if cases.is_empty() {
            return Err(AppError::Validation(
                "Please add at least one test case".to_string(),
            ));
        }

        for (index, tc) in cases.list().iter().enumerate() {
            if tc.input.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Test case {}: Input is required",
                    index + 1
                )));
            }
            if tc.expected_output.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Test case {}: Expected output is required",
                    index + 1
                )));
            }
        }

        Ok(())
    }

    /// Edit page: the buffer must be a non-empty JSON array
    ///
    /// Elements are normalized but not checked; the backend rejects empty fields.
    pub fn check_buffer(buffer: &str) -> AppResult<Vec<TestCasePayload>> {
        parse_payload(buffer).map_err(|err| {
            AppError::Validation(match err {
                ImportError::Empty => "Test cases JSON is required".to_string(),
                ImportError::Parse(msg) => format!("Invalid test cases JSON: {}", msg),
                _ => "Test cases must be a non-empty JSON array".to_string(),
            })
        })
    }

    /// Serialize the normalized test cases for the hidden form field
    pub fn encode_test_cases(payload: &[TestCasePayload]) -> AppResult<String> {
        serde_json::to_string(payload)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode test cases: {}", e)))
    }

    /// POST the form fields plus the serialized test cases
    pub async fn submit(
        backend: &dyn Backend,
        path: &str,
        form: &ProblemForm,
        test_cases_json: String,
    ) -> AppResult<SubmitOutcome> {
        let mut fields = form.form_fields();
        fields.push((TEST_CASES_FIELD.to_string(), test_cases_json));

        let reply = backend.post_form(path, fields).await?;
        let envelope: ApiEnvelope = reply.json()?;
        let outcome = SubmitOutcome::from_envelope(reply.is_ok(), envelope);

        if outcome.accepted {
            tracing::info!(path, "Problem form accepted");
        } else {
            tracing::error!(path, status = reply.status, message = ?outcome.message, "Problem form rejected");
        }

        Ok(outcome)
    }

    /// Delete a problem
    pub async fn delete(backend: &dyn Backend, problem_id: u64) -> AppResult<SubmitOutcome> {
        let path = format!("{}/{}", routes::DELETE_PROBLEM_PREFIX, problem_id);
        let reply = backend.post_json(&path, None).await?;
        let envelope: ApiEnvelope = reply.json()?;
        Ok(SubmitOutcome::from_envelope(reply.is_ok(), envelope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{HttpReply, MockBackend};
    use crate::models::{FieldValue, TestCaseField};

    fn valid_form() -> ProblemForm {
        ProblemForm {
            title: "Two Sum".into(),
            slug: "two-sum".into(),
            description: "Return indices of the two numbers adding up to target.".into(),
            difficulty: "Easy".into(),
            ..ProblemForm::default()
        }
    }

    fn validation_message(result: AppResult<()>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_fields_order() {
        let mut form = ProblemForm::default();
        assert_eq!(
            validation_message(ProblemService::check_fields(&form)),
            "Please enter a problem title"
        );

        // Slug failure wins over the later fields
        form.title = "Two Sum".into();
        form.slug = "Two-Sum".into();
        assert_eq!(
            validation_message(ProblemService::check_fields(&form)),
            "Slug can only contain lowercase letters, numbers, and hyphens"
        );

        form.slug = "two-sum".into();
        form.description = "short".into();
        assert_eq!(
            validation_message(ProblemService::check_fields(&form)),
            "Description must be at least 10 characters"
        );

        form.description = "A long enough description.".into();
        assert_eq!(
            validation_message(ProblemService::check_fields(&form)),
            "Please select a difficulty level"
        );

        assert!(ProblemService::check_fields(&valid_form()).is_ok());
    }

    #[test]
    fn test_check_collection() {
        let mut cases = TestCaseCollection::new();
        assert_eq!(
            validation_message(ProblemService::check_collection(&cases)),
            "Please add at least one test case"
        );

        let first = cases.add();
        cases.update(first, TestCaseField::Input, FieldValue::Text("1 2".into()));
        cases.update(first, TestCaseField::ExpectedOutput, FieldValue::Text("3".into()));
        let second = cases.add();
        cases.update(second, TestCaseField::Input, FieldValue::Text("4 5".into()));
        cases.update(second, TestCaseField::ExpectedOutput, FieldValue::Text("  ".into()));

        assert_eq!(
            validation_message(ProblemService::check_collection(&cases)),
            "Test case 2: Expected output is required"
        );

        cases.remove(second);
        assert!(ProblemService::check_collection(&cases).is_ok());
    }

    #[test]
    fn test_check_buffer_messages() {
        let msg = |raw: &str| match ProblemService::check_buffer(raw) {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("unexpected: {:?}", other),
        };
        assert_eq!(msg("  "), "Test cases JSON is required");
        assert!(msg("[{").starts_with("Invalid test cases JSON: "));
        assert_eq!(msg("{}"), "Test cases must be a non-empty JSON array");
        assert_eq!(msg("[]"), "Test cases must be a non-empty JSON array");

        // Elements are not re-checked on the edit page
        let payload = ProblemService::check_buffer(r#"[{"input": ""}]"#).unwrap();
        assert_eq!(payload.len(), 1);
        assert!(payload[0].is_hidden);
    }

    #[tokio::test]
    async fn test_submit_sends_hidden_field() {
        let mut backend = MockBackend::new();
        backend
            .expect_post_form()
            .withf(|path, fields| {
                path == "/problems/create"
                    && fields.contains(&("slug".to_string(), "two-sum".to_string()))
                    && fields.contains(&(TEST_CASES_FIELD.to_string(), "[]".to_string()))
            })
            .times(1)
            .returning(|_, _| {
                Ok(HttpReply::new(200, serde_json::json!({"success": true, "message": "ok"})))
            });

        let outcome = ProblemService::submit(&backend, "/problems/create", &valid_form(), "[]".into())
            .await
            .unwrap();
        assert!(outcome.accepted);
        assert_eq!(outcome.message.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_success_flag_requires_2xx() {
        let mut backend = MockBackend::new();
        backend
            .expect_post_form()
            .returning(|_, _| Ok(HttpReply::new(500, serde_json::json!({"success": true}))));

        let outcome = ProblemService::submit(&backend, "/problems/create", &valid_form(), "[]".into())
            .await
            .unwrap();
        assert!(!outcome.accepted);
    }

    #[tokio::test]
    async fn test_delete_path() {
        let mut backend = MockBackend::new();
        backend
            .expect_post_json()
            .withf(|path, body| path == "/problems/delete/12" && body.is_none())
            .returning(|_, _| {
                Ok(HttpReply::new(
                    200,
                    serde_json::json!({"success": true, "message": "Problem deleted successfully"}),
                ))
            });

        let outcome = ProblemService::delete(&backend, 12).await.unwrap();
        assert!(outcome.accepted);
    }
}
