//! Page controllers
//!
//! Each page owns its state, talks to the backend through the services, and
//! reports to the user only through a [`Presenter`].

pub mod auth;
pub mod create;
pub mod detail;
pub mod edit;
pub mod problems;

pub use auth::AuthPage;
pub use create::CreatePage;
pub use detail::{ProblemDetailPage, ResultView, RunView, StarterCode, SubmitView};
pub use edit::EditPage;
pub use problems::{ListProblemsQuery, ProblemsPage};

use std::time::Duration;

use crate::{
    client::Backend,
    constants::{routes, SUCCESS_TOAST_MS},
    feedback::{Feedback, Presenter},
    models::ProblemForm,
    services::ProblemService,
};

/// How a user action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Stopped before any request was made
    Blocked,
    /// Backend accepted the request
    Accepted,
    /// Backend answered with a failure
    Rejected,
    /// Request or response handling failed
    Failed,
}

impl FormOutcome {
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

/// Which problem form is being submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Update,
}

impl FormKind {
    fn progress_title(self) -> &'static str {
        match self {
            Self::Create => "Creating Problem",
            Self::Update => "Updating Problem",
        }
    }

    fn success_text(self) -> &'static str {
        match self {
            Self::Create => "Problem created successfully!",
            Self::Update => "Problem updated successfully!",
        }
    }

    fn failure_text(self) -> &'static str {
        match self {
            Self::Create => "Failed to create problem. Please check your inputs.",
            Self::Update => "Failed to update problem. Please check your inputs.",
        }
    }
}

/// Shared tail of the create and edit submit flows, after validation passed
pub(crate) async fn send_problem_form(
    backend: &dyn Backend,
    presenter: &mut dyn Presenter,
    kind: FormKind,
    path: &str,
    form: &ProblemForm,
    test_cases_json: String,
) -> FormOutcome {
    presenter.present(Feedback::blocking(kind.progress_title()));

    match ProblemService::submit(backend, path, form, test_cases_json).await {
        Ok(outcome) if outcome.accepted => {
            let text = outcome.message.as_deref().unwrap_or(kind.success_text());
            presenter.present(Feedback::toast(
                "Success!",
                text,
                Duration::from_millis(SUCCESS_TOAST_MS),
            ));
            presenter.navigate(routes::PROBLEMS);
            FormOutcome::Accepted
        }
        Ok(outcome) => {
            let text = outcome.message.as_deref().unwrap_or(kind.failure_text());
            presenter.present(Feedback::error("Validation Error", text));
            FormOutcome::Rejected
        }
        Err(e) => {
            tracing::error!(path, code = e.error_code(), error = %e, "Problem form submission failed");
            presenter.present(Feedback::error("Error", format!("An error occurred: {}", e)));
            FormOutcome::Failed
        }
    }
}
