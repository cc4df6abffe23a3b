//! Test-case JSON importer
//!
//! Parses free-form JSON pasted by the author and either merges it into a
//! [`TestCaseCollection`] (create page) or checks it without mutating anything
//! (edit page buffer).
//!
//! An element is usable when it is an object whose `input` and
//! `expected_output` keys are present and not `null`. Both pages apply this
//! same rule.

use serde_json::{Map, Value};

use super::{ImportError, TestCaseCollection};
use crate::models::{TestCaseId, TestCasePayload};

/// Result of a successful bulk import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Ids of the appended test cases, in import order
    pub ids: Vec<TestCaseId>,
    /// Elements dropped because they were not usable
    pub skipped: usize,
}

impl ImportSummary {
    pub fn imported(&self) -> usize {
        self.ids.len()
    }

    pub fn message(&self) -> String {
        format!("Imported {}", count_label(self.imported()))
    }
}

/// Read-only check of an edit-page buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: usize,
    /// One entry per unusable element, e.g. `Item 2: Missing "input"`
    pub issues: Vec<String>,
}

impl ValidationReport {
    pub fn message(&self) -> String {
        let mut msg = format!("Valid: {}", count_label(self.valid));
        if !self.issues.is_empty() {
            msg.push_str(&format!(" ({} invalid items skipped)", self.issues.len()));
        }
        msg
    }
}

fn count_label(n: usize) -> String {
    if n == 1 {
        "1 test case".to_string()
    } else {
        format!("{} test cases", n)
    }
}

/// Why a single element was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementIssue {
    NotAnObject,
    MissingInput,
    MissingExpectedOutput,
}

impl ElementIssue {
    fn describe(self, index: usize) -> String {
        match self {
            Self::NotAnObject => format!("Item {}: Not an object", index),
            Self::MissingInput => format!("Item {}: Missing \"input\"", index),
            Self::MissingExpectedOutput => format!("Item {}: Missing \"expected_output\"", index),
        }
    }
}

/// Parse `raw` and require a non-empty JSON array
fn parse_array(raw: &str) -> Result<Vec<Value>, ImportError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ImportError::Empty);
    }

    match serde_json::from_str::<Value>(text) {
        Err(e) => Err(ImportError::Parse(e.to_string())),
        Ok(Value::Array(items)) if items.is_empty() => Err(ImportError::EmptyArray),
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(ImportError::NotArray),
    }
}

fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn inspect(item: &Value) -> Result<(&Map<String, Value>, &Value, &Value), ElementIssue> {
    let obj = item.as_object().ok_or(ElementIssue::NotAnObject)?;
    let input = present(obj, "input").ok_or(ElementIssue::MissingInput)?;
    let expected = present(obj, "expected_output").ok_or(ElementIssue::MissingExpectedOutput)?;
    Ok((obj, input, expected))
}

/// Text content of a field; non-string values keep their compact JSON form
fn as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// JSON truthiness (`null`, `false`, `0`, `""` are false)
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Hidden unless explicitly `false`
fn hidden_unless_false(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::Bool(false)))
}

/// Merge the usable elements of `raw` into `cases`
///
/// Existing entries are kept; new ones are appended in array order. When no
/// element is usable nothing is appended.
pub fn import_into(
    cases: &mut TestCaseCollection,
    raw: &str,
) -> Result<ImportSummary, ImportError> {
    let items = parse_array(raw)?;

    let mut accepted = Vec::with_capacity(items.len());
    let mut issues = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match inspect(item) {
            Ok((obj, input, expected)) => accepted.push((
                as_text(Some(input)),
                as_text(Some(expected)),
                truthy(obj.get("is_sample")),
                hidden_unless_false(obj.get("is_hidden")),
            )),
            Err(issue) => issues.push(issue.describe(index)),
        }
    }

    if accepted.is_empty() {
        tracing::warn!(elements = items.len(), "Import rejected: no valid test cases");
        return Err(ImportError::NoValidCases { issues });
    }

    let ids = accepted
        .into_iter()
        .map(|(input, expected, is_sample, is_hidden)| {
            cases.push_filled(input, expected, is_sample, is_hidden)
        })
        .collect::<Vec<_>>();

    tracing::info!(imported = ids.len(), skipped = issues.len(), "Imported test cases");

    Ok(ImportSummary {
        ids,
        skipped: issues.len(),
    })
}

/// Check an edit-page buffer without changing it
pub fn validate_buffer(raw: &str) -> Result<ValidationReport, ImportError> {
    let items = parse_array(raw)?;

    let mut valid = 0;
    let mut issues = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match inspect(item) {
            Ok(_) => valid += 1,
            Err(issue) => issues.push(issue.describe(index)),
        }
    }

    if valid == 0 {
        return Err(ImportError::NoValidCases { issues });
    }

    Ok(ValidationReport { valid, issues })
}

/// Re-indent any valid JSON document with two spaces
pub fn format_buffer(raw: &str) -> Result<String, ImportError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ImportError::Empty);
    }

    let value: Value = serde_json::from_str(text).map_err(|e| ImportError::Parse(e.to_string()))?;
    serde_json::to_string_pretty(&value).map_err(|e| ImportError::Parse(e.to_string()))
}

/// Normalize an edit-page buffer for submission
///
/// Elements are not re-checked: absent or `null` text becomes `""`,
/// `is_sample` must be literally `true` and `is_hidden` defaults to true.
pub fn parse_payload(raw: &str) -> Result<Vec<TestCasePayload>, ImportError> {
    let items = parse_array(raw)?;

    Ok(items
        .iter()
        .map(|item| {
            let obj = item.as_object();
            let field = |key: &str| obj.and_then(|o| o.get(key));
            TestCasePayload {
                input: as_text(field("input")),
                expected_output: as_text(field("expected_output")),
                is_sample: matches!(field("is_sample"), Some(Value::Bool(true))),
                is_hidden: hidden_unless_false(field("is_hidden")),
            }
        })
        .collect())
}

/// Project server-supplied test cases for the edit-page buffer
///
/// Missing text becomes `""` and both flags take the value's truthiness.
pub fn load_server_cases(items: &[Value]) -> Vec<TestCasePayload> {
    items
        .iter()
        .map(|item| {
            let obj = item.as_object();
            let field = |key: &str| obj.and_then(|o| o.get(key));
            TestCasePayload {
                input: as_text(field("input")),
                expected_output: as_text(field("expected_output")),
                is_sample: truthy(field("is_sample")),
                is_hidden: truthy(field("is_hidden")),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::render_json_buffer;
    use crate::models::{FieldValue, TestCaseField};

    fn collection_with(inputs: &[&str]) -> TestCaseCollection {
        let mut cases = TestCaseCollection::new();
        for input in inputs {
            let id = cases.add();
            cases.update(id, TestCaseField::Input, FieldValue::Text(input.to_string()));
        }
        cases
    }

    #[test]
    fn test_import_single_case_uses_flag_defaults() {
        let mut cases = TestCaseCollection::new();
        let summary =
            import_into(&mut cases, r#"[{"input":"a","expected_output":"b"}]"#).unwrap();

        assert_eq!(summary.imported(), 1);
        assert_eq!(summary.message(), "Imported 1 test case");
        let tc = &cases.list()[0];
        assert_eq!(tc.input, "a");
        assert_eq!(tc.expected_output, "b");
        assert!(!tc.is_sample);
        assert!(tc.is_hidden);
    }

    #[test]
    fn test_import_appends_after_existing() {
        let mut cases = collection_with(&["first", "second"]);
        let raw = r#"[
            {"input": "1", "expected_output": "1"},
            {"input": "2", "expected_output": "4", "is_sample": true, "is_hidden": false},
            {"input": "3", "expected_output": "9"}
        ]"#;
        let summary = import_into(&mut cases, raw).unwrap();

        assert_eq!(summary.imported(), 3);
        assert_eq!(summary.message(), "Imported 3 test cases");
        let inputs: Vec<_> = cases.list().iter().map(|tc| tc.input.as_str()).collect();
        assert_eq!(inputs, vec!["first", "second", "1", "2", "3"]);
        assert!(cases.list()[3].is_sample);
        assert!(!cases.list()[3].is_hidden);
    }

    #[test]
    fn test_import_rejects_non_array_without_mutation() {
        let mut cases = collection_with(&["keep"]);
        assert_eq!(import_into(&mut cases, "{}"), Err(ImportError::NotArray));
        assert_eq!(import_into(&mut cases, "[]"), Err(ImportError::EmptyArray));
        assert_eq!(import_into(&mut cases, "   "), Err(ImportError::Empty));
        assert!(matches!(import_into(&mut cases, "[{"), Err(ImportError::Parse(_))));
        assert_eq!(cases.len(), 1);
    }

    #[test]
    fn test_import_all_invalid_is_not_committed() {
        let mut cases = TestCaseCollection::new();
        let err = import_into(&mut cases, r#"[{"input":"a"}, 5, {"expected_output":"b"}]"#)
            .unwrap_err();

        assert_eq!(
            err,
            ImportError::NoValidCases {
                issues: vec![
                    "Item 0: Missing \"expected_output\"".to_string(),
                    "Item 1: Not an object".to_string(),
                    "Item 2: Missing \"input\"".to_string(),
                ]
            }
        );
        assert!(cases.is_empty());
    }

    #[test]
    fn test_import_partial_batch_commits_valid_entries() {
        let mut cases = TestCaseCollection::new();
        let raw = r#"[{"input":"a","expected_output":"b"}, {"input":"x"}, null]"#;
        let summary = import_into(&mut cases, raw).unwrap();
        assert_eq!(summary.imported(), 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(cases.len(), 1);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut cases = TestCaseCollection::new();
        let raw = r#"[{"input": null, "expected_output": "b"}]"#;
        assert!(matches!(
            import_into(&mut cases, raw),
            Err(ImportError::NoValidCases { .. })
        ));

        let err = validate_buffer(raw).unwrap_err();
        assert_eq!(
            err,
            ImportError::NoValidCases {
                issues: vec!["Item 0: Missing \"input\"".to_string()]
            }
        );
    }

    #[test]
    fn test_non_string_values_become_json_text() {
        let mut cases = TestCaseCollection::new();
        let raw = r#"[{"input": [2, 7, 11], "expected_output": 9, "is_sample": 1}]"#;
        import_into(&mut cases, raw).unwrap();
        let tc = &cases.list()[0];
        assert_eq!(tc.input, "[2,7,11]");
        assert_eq!(tc.expected_output, "9");
        assert!(tc.is_sample);
    }

    #[test]
    fn test_validate_buffer_reports_skipped_items() {
        let raw = r#"[{"input":"a","expected_output":"b"}, "oops", {"input":"c","expected_output":"d"}]"#;
        let report = validate_buffer(raw).unwrap();
        assert_eq!(report.valid, 2);
        assert_eq!(report.issues, vec!["Item 1: Not an object".to_string()]);
        assert_eq!(report.message(), "Valid: 2 test cases (1 invalid items skipped)");
    }

    #[test]
    fn test_format_buffer_keeps_key_order() {
        let formatted = format_buffer(r#"{"input":"a","expected_output":"b"}"#).unwrap();
        assert_eq!(formatted, "{\n  \"input\": \"a\",\n  \"expected_output\": \"b\"\n}");
        assert_eq!(format_buffer(""), Err(ImportError::Empty));
        assert!(matches!(format_buffer("nope"), Err(ImportError::Parse(_))));
    }

    #[test]
    fn test_parse_payload_defaults() {
        let raw = r#"[
            {"input": "a"},
            {"input": "b", "expected_output": "c", "is_sample": 1, "is_hidden": 0},
            {"input": "d", "expected_output": "e", "is_sample": true, "is_hidden": false}
        ]"#;
        let payload = parse_payload(raw).unwrap();
        assert_eq!(payload[0].expected_output, "");
        assert!(payload[0].is_hidden);
        assert!(!payload[1].is_sample);
        assert!(payload[1].is_hidden);
        assert!(payload[2].is_sample);
        assert!(!payload[2].is_hidden);

        assert_eq!(parse_payload("[]"), Err(ImportError::EmptyArray));
    }

    #[test]
    fn test_load_server_cases_uses_truthiness() {
        let items = vec![
            serde_json::json!({"input": "1", "expected_output": "2", "is_sample": 1, "is_hidden": 0}),
            serde_json::json!({"input": null}),
        ];
        let loaded = load_server_cases(&items);
        assert!(loaded[0].is_sample);
        assert!(!loaded[0].is_hidden);
        assert_eq!(loaded[1], TestCasePayload {
            input: String::new(),
            expected_output: String::new(),
            is_sample: false,
            is_hidden: false,
        });
    }

    #[test]
    fn test_payload_round_trip() {
        let mut cases = TestCaseCollection::new();
        let first = cases.add();
        cases.update(first, TestCaseField::Input, FieldValue::Text("1 2\n\"q\"".into()));
        cases.update(first, TestCaseField::ExpectedOutput, FieldValue::Text("3".into()));
        cases.update(first, TestCaseField::IsSample, FieldValue::Flag(true));
        let second = cases.add();
        cases.update(second, TestCaseField::Input, FieldValue::Text("[1, 2]".into()));
        cases.update(second, TestCaseField::ExpectedOutput, FieldValue::Text("a\tb\n".into()));
        cases.update(second, TestCaseField::IsHidden, FieldValue::Flag(false));
        let payload = cases.to_payload();

        let buffer = render_json_buffer(&payload);
        assert_eq!(parse_payload(&buffer).unwrap(), payload);

        let mut reimported = TestCaseCollection::new();
        let raw = serde_json::to_string(&payload).unwrap();
        assert_eq!(import_into(&mut reimported, &raw).unwrap().imported(), 2);
        assert_eq!(reimported.to_payload(), payload);
    }
}
