//! Test-case authoring pipeline
//!
//! Shared by the create and edit pages:
//! - [`collection`]: ordered in-memory test cases (create page)
//! - [`render`]: pure projections into view models and JSON text
//! - [`import`]: JSON parsing, validation and merging

pub mod collection;
pub mod import;
pub mod render;

pub use collection::TestCaseCollection;
pub use import::{
    format_buffer, import_into, load_server_cases, parse_payload, validate_buffer, ImportSummary,
    ValidationReport,
};
pub use render::{render_cards, render_json_buffer, TestCaseCard};

/// Failures of the JSON import and validate flows
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Please paste JSON array")]
    Empty,

    #[error("Invalid JSON: {0}")]
    Parse(String),

    #[error("JSON must be an array")]
    NotArray,

    #[error("Array is empty")]
    EmptyArray,

    #[error("No valid test cases found")]
    NoValidCases { issues: Vec<String> },
}

impl ImportError {
    /// Wording used next to the edit-page JSON editor
    pub fn editor_message(&self) -> String {
        match self {
            Self::Empty => "Empty JSON".to_string(),
            Self::NotArray => "Must be a JSON array".to_string(),
            Self::NoValidCases { issues } if !issues.is_empty() => {
                format!("No valid test cases. Issues: {}", issues.join(", "))
            }
            Self::NoValidCases { .. } => "No valid test cases".to_string(),
            other => other.to_string(),
        }
    }
}
