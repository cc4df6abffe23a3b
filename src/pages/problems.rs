//! Problem listing page: filter query and delete action

use reqwest::Url;

use crate::{
    client::Backend,
    constants::{routes, MAX_SEARCH_LENGTH},
    error::{AppError, AppResult},
    feedback::{Dismiss, Feedback, Presenter, Severity},
    models::Difficulty,
    services::ProblemService,
};

use super::FormOutcome;

/// Filters for `GET /problems`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProblemsQuery {
    pub difficulty: Option<Difficulty>,
    pub search: Option<String>,
    pub tags: Vec<String>,
    pub page: u32,
}

impl Default for ListProblemsQuery {
    fn default() -> Self {
        Self {
            difficulty: None,
            search: None,
            tags: Vec::new(),
            page: 1,
        }
    }
}

impl ListProblemsQuery {
    /// Clamp the page and trim the search term the way the listing does
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self.search = self
            .search
            .map(|s| s.trim().chars().take(MAX_SEARCH_LENGTH).collect::<String>())
            .filter(|s| !s.is_empty());
        self.tags.retain(|t| !t.trim().is_empty());
        self
    }

    /// Query parameters; `tag` repeats once per tag
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let query = self.clone().normalized();
        let mut pairs = Vec::new();
        if let Some(difficulty) = query.difficulty {
            pairs.push(("difficulty", difficulty.as_str().to_string()));
        }
        if let Some(search) = query.search {
            pairs.push(("search", search));
        }
        pairs.extend(query.tags.into_iter().map(|tag| ("tag", tag)));
        pairs.push(("page", query.page.to_string()));
        pairs
    }

    /// Listing URL under `base_url`
    pub fn to_url(&self, base_url: &str) -> AppResult<Url> {
        let listing = format!("{}{}", base_url.trim_end_matches('/'), routes::PROBLEMS);
        Url::parse_with_params(&listing, self.query_pairs())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid listing URL: {}", e)))
    }
}

/// Actions on the problem listing
pub struct ProblemsPage;

impl ProblemsPage {
    /// Question shown before a delete is sent
    pub fn confirmation() -> Feedback {
        Feedback::Modal {
            severity: Severity::Warning,
            title: "Are you sure?".to_string(),
            text: "You won't be able to revert this!".to_string(),
            dismiss: Dismiss::Button("Yes, delete it!".to_string()),
        }
    }

    /// Delete a problem once the user has confirmed
    ///
    /// Without confirmation nothing is sent.
    pub async fn delete(
        backend: &dyn Backend,
        presenter: &mut dyn Presenter,
        problem_id: u64,
        confirmed: bool,
    ) -> FormOutcome {
        if !confirmed {
            tracing::debug!(problem_id, "Delete cancelled");
            return FormOutcome::Blocked;
        }

        match ProblemService::delete(backend, problem_id).await {
            Ok(outcome) if outcome.accepted => {
                presenter.present(Feedback::Modal {
                    severity: Severity::Success,
                    title: "Deleted!".to_string(),
                    text: outcome.message.unwrap_or_default(),
                    dismiss: Dismiss::Button("OK".to_string()),
                });
                presenter.navigate(routes::PROBLEMS);
                FormOutcome::Accepted
            }
            Ok(outcome) => {
                presenter.present(Feedback::error("Error!", outcome.message.unwrap_or_default()));
                FormOutcome::Rejected
            }
            Err(e) => {
                tracing::error!(problem_id, error = %e, "Delete request failed");
                presenter.present(Feedback::error("Error!", "Failed to delete problem."));
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

    #[test]
    fn test_normalized_clamps_and_truncates() {
        let query = ListProblemsQuery {
            search: Some(format!("  {}  ", "x".repeat(150))),
            page: 0,
            ..Default::default()
        }
        .normalized();
        assert_eq!(query.page, 1);
        assert_eq!(query.search.unwrap().chars().count(), 100);

        let query = ListProblemsQuery {
            search: Some("   ".into()),
            ..Default::default()
        }
        .normalized();
        assert!(query.search.is_none());
    }

    #[test]
    fn test_to_url_repeats_tags() {
        let query = ListProblemsQuery {
            difficulty: Some(Difficulty::Hard),
            search: Some("two sum".into()),
            tags: vec!["array".into(), "hash table".into()],
            page: 2,
        };
        let url = query.to_url("http://localhost:5000/").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/problems?difficulty=Hard&search=two+sum&tag=array&tag=hash+table&page=2"
        );
    }

    #[tokio::test]
    async fn test_unconfirmed_delete_sends_nothing() {
        let mut backend = MockBackend::new();
        backend.expect_post_json().times(0);
        let mut recorder = Recorder::default();

        let outcome = ProblemsPage::delete(&backend, &mut recorder, 5, false).await;
        assert_eq!(outcome, FormOutcome::Blocked);
        assert!(recorder.shown.is_empty());
    }

    #[tokio::test]
    async fn test_delete_feedback() {
        let mut backend = MockBackend::new();
        backend.expect_post_json().times(1).returning(|_, _| {
            Ok(HttpReply::new(403, json!({"success": false, "message": "Not allowed"})))
        });
        let mut recorder = Recorder::default();
        let outcome = ProblemsPage::delete(&backend, &mut recorder, 5, true).await;
        assert_eq!(outcome, FormOutcome::Rejected);
        assert_eq!(recorder.last(), Some(&Feedback::error("Error!", "Not allowed")));

        let mut backend = MockBackend::new();
        backend
            .expect_post_json()
            .returning(|_, _| Err(AppError::Http("connection reset".into())));
        let mut recorder = Recorder::default();
        ProblemsPage::delete(&backend, &mut recorder, 5, true).await;
        assert_eq!(
            recorder.last(),
            Some(&Feedback::error("Error!", "Failed to delete problem."))
        );
    }
}
