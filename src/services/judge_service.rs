//! Judge service
//!
//! Runs code against the public cases or submits it against all of them.

use serde::de::DeserializeOwned;

use crate::{
    client::{Backend, HttpReply},
    constants::routes,
    error::{AppError, AppResult},
    models::{CodeRequest, RunResponse, SubmitResponse},
    utils::{validate_language, validate_source_code, validation::validate_problem_id},
};

/// Judge service for run and submit calls
pub struct JudgeService;

impl JudgeService {
    /// Check the editor contents and build the request body
    pub fn prepare(code: &str, language: &str, problem_id: u64) -> AppResult<CodeRequest> {
        validate_source_code(code).map_err(|msg| AppError::Validation(msg.to_string()))?;
        let language = validate_language(language).map_err(AppError::Validation)?;
        validate_problem_id(problem_id).map_err(|msg| AppError::Validation(msg.to_string()))?;

        Ok(CodeRequest {
            code: code.to_string(),
            problem_id,
            language,
        })
    }

    /// Run against the public cases
    pub async fn run(backend: &dyn Backend, request: &CodeRequest) -> AppResult<RunResponse> {
        tracing::info!(problem_id = request.problem_id, language = %request.language, "Running code");
        let reply = backend
            .post_json(routes::RUN, Some(serde_json::to_value(request)?))
            .await?;
        Self::decode(reply)
    }

    /// Submit against every case
    pub async fn submit(backend: &dyn Backend, request: &CodeRequest) -> AppResult<SubmitResponse> {
        tracing::info!(problem_id = request.problem_id, language = %request.language, "Submitting code");
        let reply = backend
            .post_json(routes::SUBMIT, Some(serde_json::to_value(request)?))
            .await?;
        let response: SubmitResponse = Self::decode(reply)?;

        tracing::info!(
            verdict = %response.final_status,
            passed = response.test_cases_passed,
            total = response.total_test_cases,
            "Submission judged"
        );
        Ok(response)
    }

    /// Judge error bodies carry `message` but no `final_status`
    fn decode<T: DeserializeOwned>(reply: HttpReply) -> AppResult<T> {
        match reply.json::<T>() {
            Ok(response) => Ok(response),
            Err(err) => match reply.body.get("message").and_then(|m| m.as_str()) {
                Some(message) if !reply.is_ok() => Err(AppError::Http(message.to_string())),
                _ => Err(err),
            },
        }
    }
}
