//! Edit-problem page
//!
//! Test cases are edited as a single JSON document rather than as cards.

use std::time::{Duration, Instant};

use serde_json::Value;

use crate::{
    client::Backend,
    constants::{routes, FORMAT_BANNER_MS, IMPORT_BANNER_MS},
    editor::{format_buffer, load_server_cases, render_json_buffer, validate_buffer, ImportError, ValidationReport},
    error::AppResult,
    feedback::{Banner, Feedback, Presenter, Severity},
    models::{ProblemForm, TestCasePayload},
    services::ProblemService,
};

use super::{send_problem_form, FormKind, FormOutcome};

/// Default form action for a problem
pub fn edit_action(problem_id: u64) -> String {
    format!("{}/{}", routes::EDIT_PROBLEM_PREFIX, problem_id)
}

/// State behind the edit page
#[derive(Debug)]
pub struct EditPage {
    pub form: ProblemForm,
    action: String,
    buffer: String,
    banner: Option<Banner>,
}

impl EditPage {
    /// Open the page with the problem's current test cases
    ///
    /// `server_cases` is the JSON array embedded by the backend. Unreadable
    /// data is logged and the editor opens with `[]`.
    pub fn load(action: impl Into<String>, form: ProblemForm, server_cases: &str) -> Self {
        let raw = if server_cases.trim().is_empty() { "[]" } else { server_cases };
        let items = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                tracing::error!("Existing test cases are not a JSON array");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load existing test cases");
                Vec::new()
            }
        };
        let buffer = render_json_buffer(&load_server_cases(&items));

        Self {
            form,
            action: action.into(),
            buffer,
            banner: None,
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Re-indent the buffer in place
    pub fn format_json(&mut self) -> Result<(), ImportError> {
        match format_buffer(&self.buffer) {
            Ok(pretty) => {
                self.buffer = pretty;
                self.banner = Some(Banner::transient(
                    Severity::Success,
                    "JSON formatted successfully",
                    Duration::from_millis(FORMAT_BANNER_MS),
                ));
                Ok(())
            }
            Err(err) => {
                self.banner = Some(Banner::sticky(Severity::Error, err.editor_message()));
                Err(err)
            }
        }
    }

    /// Count usable elements without touching the buffer
    pub fn validate_json(&mut self) -> Result<ValidationReport, ImportError> {
        match validate_buffer(&self.buffer) {
            Ok(report) => {
                self.banner = Some(Banner::transient(
                    Severity::Success,
                    report.message(),
                    Duration::from_millis(IMPORT_BANNER_MS),
                ));
                Ok(report)
            }
            Err(err) => {
                self.banner = Some(Banner::sticky(Severity::Error, err.editor_message()));
                Err(err)
            }
        }
    }

    /// Editor status message, if still visible at `now`
    pub fn banner(&self, now: Instant) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.is_visible_at(now))
    }

    /// All client-side checks; returns the normalized cases to send
    pub fn validate(&self) -> AppResult<Vec<TestCasePayload>> {
        ProblemService::check_fields(&self.form)?;
        ProblemService::check_buffer(&self.buffer)
    }

    /// Validate, then post the update to the form action
    pub async fn submit(&self, backend: &dyn Backend, presenter: &mut dyn Presenter) -> FormOutcome {
        let payload = match self.validate() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "Edit form blocked by validation");
                presenter.present(Feedback::validation(err.to_string()));
                return FormOutcome::Blocked;
            }
        };

        let test_cases_json = match ProblemService::encode_test_cases(&payload) {
            Ok(json) => json,
            Err(err) => {
                presenter.present(Feedback::error("Error", format!("An error occurred: {}", err)));
                return FormOutcome::Failed;
            }
        };

        send_problem_form(
            backend,
            presenter,
            FormKind::Update,
            &self.action,
            &self.form,
            test_cases_json,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{HttpReply, MockBackend};
    use crate::constants::TEST_CASES_FIELD;
    use crate::feedback::Recorder;
    use serde_json::json;

    fn form() -> ProblemForm {
        ProblemForm {
            title: "Square".into(),
            slug: "square".into(),
            description: "Print the square of n.".into(),
            difficulty: "Medium".into(),
            ..ProblemForm::default()
        }
    }

    #[test]
    fn test_load_projects_server_rows() {
        let page = EditPage::load(
            edit_action(8),
            form(),
            r#"[{"id": 3, "input": "2", "expected_output": "4", "is_sample": 1, "is_hidden": 0}]"#,
        );
        assert_eq!(page.action(), "/problems/edit/8");
        let cases: Vec<TestCasePayload> = serde_json::from_str(page.buffer()).unwrap();
        assert_eq!(
            cases,
            vec![TestCasePayload {
                input: "2".into(),
                expected_output: "4".into(),
                is_sample: true,
                is_hidden: false,
            }]
        );
    }

    #[test]
    fn test_load_empty_or_broken_data() {
        assert_eq!(EditPage::load("/x", form(), "").buffer(), "[]");
        assert_eq!(EditPage::load("/x", form(), "[]").buffer(), "[]");
        assert_eq!(EditPage::load("/x", form(), "{not json").buffer(), "[]");
        assert_eq!(EditPage::load("/x", form(), r#"{"input": "1"}"#).buffer(), "[]");
    }

    #[test]
    fn test_format_json_banner() {
        let mut page = EditPage::load("/x", form(), "");
        page.set_buffer(r#"{"a":[1,2]}"#);
        page.format_json().unwrap();
        assert_eq!(page.buffer(), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
        let banner = page.banner(Instant::now()).unwrap();
        assert_eq!(banner.text, "JSON formatted successfully");
        assert_eq!(banner.ttl(), Some(Duration::from_millis(2000)));

        page.set_buffer("   ");
        assert_eq!(page.format_json(), Err(ImportError::Empty));
        assert_eq!(page.banner(Instant::now()).unwrap().text, "Empty JSON");
        assert_eq!(page.buffer(), "   ");
    }

    #[test]
    fn test_validate_json_does_not_modify_buffer() {
        let mut page = EditPage::load("/x", form(), "");
        let text = r#"[{"input": "1", "expected_output": "1"}, 5]"#;
        page.set_buffer(text);

        let report = page.validate_json().unwrap();
        assert_eq!(report.valid, 1);
        assert_eq!(page.buffer(), text);
        assert_eq!(
            page.banner(Instant::now()).unwrap().text,
            "Valid: 1 test case (1 invalid items skipped)"
        );

        page.set_buffer("[5]");
        assert!(page.validate_json().is_err());
        assert_eq!(
            page.banner(Instant::now()).unwrap().text,
            "No valid test cases. Issues: Item 0: Not an object"
        );
    }

    #[tokio::test]
    async fn test_submit_normalizes_payload() {
        let mut page = EditPage::load(edit_action(8), form(), "");
        page.set_buffer(r#"[{"input": "2", "is_sample": "yes"}]"#);

        let mut backend = MockBackend::new();
        backend
            .expect_post_form()
            .withf(|path, fields| {
                let cases = fields
                    .iter()
                    .find(|(k, _)| k == TEST_CASES_FIELD)
                    .map(|(_, v)| serde_json::from_str::<serde_json::Value>(v).unwrap());
                path == "/problems/edit/8"
                    && cases
                        == Some(json!([
                            {"input": "2", "expected_output": "", "is_sample": false, "is_hidden": true}
                        ]))
            })
            .times(1)
            .returning(|_, _| Ok(HttpReply::new(200, json!({"success": true}))));
        let mut recorder = Recorder::default();

        assert!(page.submit(&backend, &mut recorder).await.is_accepted());
    }

    #[tokio::test]
    async fn test_empty_buffer_blocks_submit() {
        let mut page = EditPage::load(edit_action(8), form(), "");
        page.set_buffer("  ");
        let mut backend = MockBackend::new();
        backend.expect_post_form().times(0);
        let mut recorder = Recorder::default();

        assert_eq!(page.submit(&backend, &mut recorder).await, FormOutcome::Blocked);
        assert_eq!(
            recorder.last(),
            Some(&Feedback::validation("Test cases JSON is required"))
        );
    }

    #[tokio::test]
    async fn test_untouched_problem_without_cases_blocks_submit() {
        let page = EditPage::load(edit_action(8), form(), "");
        let mut backend = MockBackend::new();
        backend.expect_post_form().times(0);
        let mut recorder = Recorder::default();

        assert_eq!(page.submit(&backend, &mut recorder).await, FormOutcome::Blocked);
        assert_eq!(
            recorder.last(),
            Some(&Feedback::validation("Test cases must be a non-empty JSON array"))
        );
    }
}
