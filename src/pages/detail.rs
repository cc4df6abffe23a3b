//! Problem detail page: code editor, run and submit

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    client::Backend,
    constants::{languages, routes, DEFAULT_FUNCTION_NAME},
    error::AppResult,
    models::{CodeRequest, FailedCaseDetail, RunResponse, SubmitResponse},
    services::JudgeService,
};

/// Starter code embedded in the problem page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarterCode {
    /// Code keyed by language identifier
    PerLanguage(BTreeMap<String, String>),
    /// One snippet, used only for the initial language
    Single(String),
    None,
}

impl StarterCode {
    /// Parse the page's starter-code attribute
    pub fn from_data(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::None;
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) if !map.is_empty() => Self::PerLanguage(
                map.into_iter()
                    .filter_map(|(lang, code)| match code {
                        Value::String(code) => Some((lang, code)),
                        _ => None,
                    })
                    .collect(),
            ),
            Ok(Value::String(code)) if !code.is_empty() => Self::Single(code),
            Ok(_) => Self::None,
            Err(e) => {
                tracing::error!(error = %e, "Error parsing starter code");
                Self::None
            }
        }
    }

    fn for_language(&self, language: &str) -> Option<&str> {
        match self {
            Self::PerLanguage(map) => map.get(language).map(String::as_str).filter(|c| !c.is_empty()),
            _ => None,
        }
    }
}

/// Built-in template for a language, empty for unknown ones
pub fn fallback_template(language: &str, function_name: &str) -> String {
    match language {
        languages::PYTHON => format!(
            "class Solution:\n    def {}(self, input_str):\n        # Your code here\n        pass",
            function_name
        ),
        languages::JAVA => format!(
            "class Solution {{\n    public void {}(String input) {{\n        // Your code here\n    }}\n}}",
            function_name
        ),
        languages::CPP => format!(
            "class Solution {{\npublic:\n    void {}(string input) {{\n        // Your code here\n    }}\n}};",
            function_name
        ),
        languages::JAVASCRIPT => format!(
            "class Solution {{\n    {}(input) {{\n        // Your code here\n    }}\n}}",
            function_name
        ),
        _ => String::new(),
    }
}

/// One public case in a run result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCaseCard {
    pub case: u32,
    pub status: String,
    pub passed: bool,
    /// Present only for failing cases
    pub detail: Option<CaseDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDetail {
    pub input: String,
    pub expected: String,
    pub actual: String,
}

/// Result panel after a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunView {
    pub accepted: bool,
    pub verdict: String,
    pub cards: Vec<RunCaseCard>,
}

impl From<RunResponse> for RunView {
    fn from(resp: RunResponse) -> Self {
        let accepted = resp.is_accepted();
        let cards = resp
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|r| {
                let passed = r.passed();
                let detail = (!passed).then(|| CaseDetail {
                    input: non_empty(r.input.as_deref()).unwrap_or("N/A").to_string(),
                    expected: non_empty(r.expected.as_deref()).unwrap_or("N/A").to_string(),
                    actual: non_empty(r.actual.as_deref())
                        .or(non_empty(r.error.as_deref()))
                        .unwrap_or("Error")
                        .to_string(),
                });
                RunCaseCard {
                    case: r.case,
                    status: r.status,
                    passed,
                    detail,
                }
            })
            .collect();

        Self {
            accepted,
            verdict: resp.final_status,
            cards,
        }
    }
}

/// Result panel after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitView {
    pub accepted: bool,
    pub verdict: String,
    pub summary: String,
    pub time: Option<String>,
    pub memory: Option<String>,
    pub submission_link: Option<String>,
    /// Lines describing the first failing case
    pub failure_lines: Vec<String>,
}

impl From<SubmitResponse> for SubmitView {
    fn from(resp: SubmitResponse) -> Self {
        let accepted = resp.is_accepted();
        let counts = format!("{}/{}", resp.test_cases_passed, resp.total_test_cases);
        let summary = if accepted {
            format!("All test cases passed! ({})", counts)
        } else {
            format!("Test cases passed: {}", counts)
        };

        let failure_lines = match (&resp.failed_case_detail, accepted) {
            (Some(detail), false) => failure_lines(detail),
            _ => Vec::new(),
        };

        Self {
            accepted,
            summary,
            time: resp
                .execution_time
                .filter(|t| *t != 0.0)
                .map(|t| format!("Time: {:.2}ms", t)),
            memory: resp
                .memory_used
                .filter(|m| *m != 0.0)
                .map(|kb| format!("Memory: {:.2}MB", kb / 1024.0)),
            submission_link: resp
                .submission_id
                .filter(|id| *id != 0)
                .map(|id| format!("{}/{}", routes::SUBMISSION_PREFIX, id)),
            failure_lines,
            verdict: resp.final_status,
        }
    }
}

fn failure_lines(detail: &FailedCaseDetail) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(input) = &detail.input {
        lines.push(format!("Input: {}", non_empty(Some(input.as_str())).unwrap_or("N/A")));
    }
    if let Some(expected) = &detail.expected_output {
        lines.push(format!("Expected: {}", expected));
        lines.push(format!(
            "Actual: {}",
            non_empty(detail.actual_output.as_deref()).unwrap_or("N/A")
        ));
    }
    if let Some(error) = &detail.error {
        lines.push(format!("Error: {}", error));
    }
    if let Some(used) = detail.time_used {
        lines.push(format!("Time Used: {:.2}ms / {}ms", used, limit_label(detail.time_limit)));
    }
    if let Some(used) = detail.memory_used {
        lines.push(format!(
            "Memory Used: {:.2}MB / {}MB",
            used,
            limit_label(detail.memory_limit)
        ));
    }
    lines
}

fn limit_label(limit: Option<f64>) -> String {
    limit.map_or_else(|| "N/A".to_string(), |l| l.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// What the result panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Run(RunView),
    Submit(SubmitView),
    /// Request or response handling failed
    Error(String),
}

/// Editor state of a single problem
#[derive(Debug, Clone)]
pub struct ProblemDetailPage {
    problem_id: u64,
    function_name: String,
    starter: StarterCode,
    language: String,
    code: String,
}

impl ProblemDetailPage {
    /// Open the editor on Python with the starter code or its template
    pub fn new(problem_id: u64, function_name: Option<&str>, starter_data: &str) -> Self {
        let function_name = function_name
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FUNCTION_NAME)
            .to_string();
        let starter = StarterCode::from_data(starter_data);

        let code = match &starter {
            StarterCode::Single(code) => code.clone(),
            other => other
                .for_language(languages::PYTHON)
                .map(str::to_string)
                .unwrap_or_else(|| fallback_template(languages::PYTHON, &function_name)),
        };

        Self {
            problem_id,
            function_name,
            starter,
            language: languages::PYTHON.to_string(),
            code,
        }
    }

    pub fn problem_id(&self) -> u64 {
        self.problem_id
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Switch language, replacing the editor contents with that language's starter
    pub fn select_language(&mut self, language: &str) {
        self.code = self
            .starter
            .for_language(language)
            .map(str::to_string)
            .unwrap_or_else(|| fallback_template(language, &self.function_name));
        self.language = language.to_string();
    }

    fn request(&self) -> AppResult<CodeRequest> {
        let language = if self.language.is_empty() { languages::PYTHON } else { self.language.as_str() };
        JudgeService::prepare(&self.code, language, self.problem_id)
    }

    /// Run against the public cases
    pub async fn run(&self, backend: &dyn Backend) -> ResultView {
        let result = match self.request() {
            Ok(request) => JudgeService::run(backend, &request).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(resp) => ResultView::Run(resp.into()),
            Err(e) => ResultView::Error(format!("Error: {}", e)),
        }
    }

    /// Submit for full judging
    pub async fn submit(&self, backend: &dyn Backend) -> ResultView {
        let result = match self.request() {
            Ok(request) => JudgeService::submit(backend, &request).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(resp) => ResultView::Submit(resp.into()),
            Err(e) => ResultView::Error(format!("Error: {}", e)),
        }
    }
}
