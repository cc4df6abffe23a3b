//! Judge API models (`/api/run`, `/api/submit`)

use serde::{Deserialize, Serialize};

use crate::constants::{CASE_PASSED, VERDICT_ACCEPTED};

/// Body of a run or submit call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRequest {
    pub code: String,
    pub problem_id: u64,
    pub language: String,
}

/// Response of `/api/run`
#[derive(Debug, Clone, Deserialize)]
pub struct RunResponse {
    pub final_status: String,
    #[serde(default)]
    pub results: Option<Vec<CaseResult>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RunResponse {
    pub fn is_accepted(&self) -> bool {
        self.final_status == VERDICT_ACCEPTED
    }
}

/// Outcome of a single public test case
#[derive(Debug, Clone, Deserialize)]
pub struct CaseResult {
    pub case: u32,
    pub status: String,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub expected: Option<String>,
    #[serde(default)]
    pub actual: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        self.status == CASE_PASSED
    }
}

/// Response of `/api/submit`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub final_status: String,
    #[serde(default)]
    pub test_cases_passed: u32,
    #[serde(default)]
    pub total_test_cases: u32,
    /// Milliseconds
    #[serde(default)]
    pub execution_time: Option<f64>,
    /// Kilobytes
    #[serde(default)]
    pub memory_used: Option<f64>,
    #[serde(default)]
    pub submission_id: Option<u64>,
    #[serde(default)]
    pub failed_case_detail: Option<FailedCaseDetail>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitResponse {
    pub fn is_accepted(&self) -> bool {
        self.final_status == VERDICT_ACCEPTED
    }
}

/// Details of the first failing hidden case
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FailedCaseDetail {
    pub input: Option<String>,
    pub expected_output: Option<String>,
    pub actual_output: Option<String>,
    pub error: Option<String>,
    /// Milliseconds
    pub time_used: Option<f64>,
    pub time_limit: Option<f64>,
    /// Megabytes
    pub memory_used: Option<f64>,
    pub memory_limit: Option<f64>,
}
