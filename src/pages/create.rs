//! Create-problem page

use std::time::{Duration, Instant};

use crate::{
    client::Backend,
    constants::{routes, IMPORT_BANNER_MS},
    editor::{import_into, render_cards, ImportError, ImportSummary, TestCaseCard, TestCaseCollection},
    error::AppResult,
    feedback::{Banner, Feedback, Presenter, Severity},
    models::{FieldValue, ProblemForm, TestCaseField, TestCaseId},
    services::ProblemService,
};

use super::{send_problem_form, FormKind, FormOutcome};

/// State behind the create page: metadata form, card editor and JSON import panel
#[derive(Debug)]
pub struct CreatePage {
    pub form: ProblemForm,
    cases: TestCaseCollection,
    import_text: String,
    import_open: bool,
    import_banner: Option<Banner>,
}

impl Default for CreatePage {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePage {
    /// Fresh page with a single blank test case
    pub fn new() -> Self {
        let mut cases = TestCaseCollection::new();
        cases.add();

        Self {
            form: ProblemForm::default(),
            cases,
            import_text: String::new(),
            import_open: false,
            import_banner: None,
        }
    }

    pub fn test_cases(&self) -> &TestCaseCollection {
        &self.cases
    }

    pub fn add_test_case(&mut self) -> TestCaseId {
        self.cases.add()
    }

    pub fn remove_test_case(&mut self, id: TestCaseId) -> bool {
        self.cases.remove(id)
    }

    pub fn update_test_case(&mut self, id: TestCaseId, field: TestCaseField, value: FieldValue) -> bool {
        self.cases.update(id, field, value)
    }

    /// Cards for the current collection
    pub fn cards(&self) -> Vec<TestCaseCard> {
        render_cards(&self.cases)
    }

    /// Open or close the import panel, returning the new state
    pub fn toggle_import_panel(&mut self) -> bool {
        self.import_open = !self.import_open;
        self.import_open
    }

    pub fn is_import_open(&self) -> bool {
        self.import_open
    }

    pub fn import_text(&self) -> &str {
        &self.import_text
    }

    pub fn set_import_text(&mut self, text: impl Into<String>) {
        self.import_text = text.into();
    }

    /// Merge the pasted JSON into the card list
    ///
    /// On success the text is cleared, the panel collapses and a banner shows
    /// for a few seconds. On failure the text stays for correction.
    pub fn import_from_json(&mut self) -> Result<ImportSummary, ImportError> {
        match import_into(&mut self.cases, &self.import_text) {
            Ok(summary) => {
                self.import_banner = Some(Banner::transient(
                    Severity::Success,
                    summary.message(),
                    Duration::from_millis(IMPORT_BANNER_MS),
                ));
                self.import_text.clear();
                self.import_open = false;
                Ok(summary)
            }
            Err(err) => {
                self.import_banner = Some(Banner::sticky(Severity::Error, err.to_string()));
                Err(err)
            }
        }
    }

    /// Import status message, if still visible at `now`
    pub fn import_banner(&self, now: Instant) -> Option<&Banner> {
        self.import_banner.as_ref().filter(|b| b.is_visible_at(now))
    }

    /// All client-side checks, first failure wins
    pub fn validate(&self) -> AppResult<()> {
        ProblemService::check_fields(&self.form)?;
        ProblemService::check_collection(&self.cases)
    }

    /// Validate, then post the problem and its cards
    pub async fn submit(&self, backend: &dyn Backend, presenter: &mut dyn Presenter) -> FormOutcome {
        if let Err(err) = self.validate() {
            tracing::warn!(error = %err, "Create form blocked by validation");
            presenter.present(Feedback::validation(err.to_string()));
            return FormOutcome::Blocked;
        }

        let test_cases_json = match ProblemService::encode_test_cases(&self.cases.to_payload()) {
            Ok(json) => json,
            Err(err) => {
                presenter.present(Feedback::error("Error", format!("An error occurred: {}", err)));
                return FormOutcome::Failed;
            }
        };

        send_problem_form(
            backend,
            presenter,
            FormKind::Create,
            routes::CREATE_PROBLEM,
            &self.form,
            test_cases_json,
        )
        .await
    }
}
