//! View models for the test-case editors
//!
//! Rendering is a full rebuild from the current state every time; nothing is
//! diffed or cached between calls.

use crate::models::{TestCaseId, TestCasePayload};

use super::TestCaseCollection;

/// One editable card on the create page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseCard {
    /// 1-based position, recomputed on every render
    pub number: usize,
    /// Target for update/remove callbacks
    pub id: TestCaseId,
    pub input: String,
    pub expected_output: String,
    pub is_sample: bool,
    pub is_hidden: bool,
}

impl TestCaseCard {
    pub fn heading(&self) -> String {
        format!("Test Case {}", self.number)
    }
}

/// Project the collection into cards, in collection order
pub fn render_cards(cases: &TestCaseCollection) -> Vec<TestCaseCard> {
    cases
        .list()
        .iter()
        .enumerate()
        .map(|(index, tc)| TestCaseCard {
            number: index + 1,
            id: tc.id,
            input: tc.input.clone(),
            expected_output: tc.expected_output.clone(),
            is_sample: tc.is_sample,
            is_hidden: tc.is_hidden,
        })
        .collect()
}

/// Pretty-print test cases for the edit-page JSON editor
pub fn render_json_buffer(cases: &[TestCasePayload]) -> String {
    // A Vec of plain structs always serializes
    serde_json::to_string_pretty(cases).unwrap_or_else(|_| "[]".to_string())
}
