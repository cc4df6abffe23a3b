//! Test case model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page-local identifier of a test case
///
/// Minted from a nanosecond timestamp. Only unique within the collection
/// that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TestCaseId(pub u64);

impl fmt::Display for TestCaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Test case being authored on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub id: TestCaseId,
    pub input: String,
    pub expected_output: String,
    /// Shown publicly in the problem statement
    pub is_sample: bool,
    /// Used only for grading
    pub is_hidden: bool,
}

impl TestCase {
    /// Create an empty test case with both flags cleared
    pub fn blank(id: TestCaseId) -> Self {
        Self {
            id,
            input: String::new(),
            expected_output: String::new(),
            is_sample: false,
            is_hidden: false,
        }
    }

    /// Get a preview of the input (truncated)
    pub fn input_preview(&self, max_len: usize) -> String {
        preview(&self.input, max_len)
    }

    /// Get a preview of the expected output (truncated)
    pub fn output_preview(&self, max_len: usize) -> String {
        preview(&self.expected_output, max_len)
    }

    /// Strip the page-local id for submission
    pub fn to_payload(&self) -> TestCasePayload {
        TestCasePayload {
            input: self.input.clone(),
            expected_output: self.expected_output.clone(),
            is_sample: self.is_sample,
            is_hidden: self.is_hidden,
        }
    }
}

fn preview(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Editable field of a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCaseField {
    Input,
    ExpectedOutput,
    IsSample,
    IsHidden,
}

/// New value for a [`TestCaseField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl TestCase {
    /// Overwrite one field. Returns false when the value kind does not fit the field.
    pub fn set_field(&mut self, field: TestCaseField, value: FieldValue) -> bool {
        match (field, value) {
            (TestCaseField::Input, FieldValue::Text(text)) => self.input = text,
            (TestCaseField::ExpectedOutput, FieldValue::Text(text)) => self.expected_output = text,
            (TestCaseField::IsSample, FieldValue::Flag(flag)) => self.is_sample = flag,
            (TestCaseField::IsHidden, FieldValue::Flag(flag)) => self.is_hidden = flag,
            _ => return false,
        }
        true
    }
}

/// Normalized test case as transported in `test_cases_json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCasePayload {
    pub input: String,
    pub expected_output: String,
    pub is_sample: bool,
    pub is_hidden: bool,
}
