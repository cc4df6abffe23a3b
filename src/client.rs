//! HTTP access to the LiteCode backend
//!
//! Pages and services only see the [`Backend`] trait; [`ApiClient`] is the
//! reqwest implementation used by the binary.

use async_trait::async_trait;
use reqwest::multipart::Form;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::constants::{REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};
use crate::error::{AppError, AppResult};

/// Status code and decoded JSON body of a backend reply
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Value,
}

impl HttpReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 2xx status
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body into a typed response
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> AppResult<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

/// Requests the pages issue
///
/// A body that is not JSON is reported as [`AppError::MalformedResponse`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    /// POST multipart form fields (repeated keys allowed)
    async fn post_form(&self, path: &str, fields: Vec<(String, String)>) -> AppResult<HttpReply>;

    /// POST a JSON body, or no body with a JSON content type
    async fn post_json(&self, path: &str, body: Option<Value>) -> AppResult<HttpReply>;
}

/// reqwest-backed [`Backend`]
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("litecode/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Absolute URL for a backend path; absolute inputs pass through
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    async fn into_reply(response: reqwest::Response) -> AppResult<HttpReply> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).map_err(|e| {
            AppError::MalformedResponse(format!("status {} with non-JSON body: {}", status, e))
        })?;
        Ok(HttpReply::new(status, body))
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn post_form(&self, path: &str, fields: Vec<(String, String)>) -> AppResult<HttpReply> {
        tracing::info!(path, field_count = fields.len(), "Submitting form");
        let form = fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let response = self
            .http
            .post(self.url(path))
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .multipart(form)
            .send()
            .await?;

        tracing::debug!(status = response.status().as_u16(), "Form submitted");
        Self::into_reply(response).await
    }

    async fn post_json(&self, path: &str, body: Option<Value>) -> AppResult<HttpReply> {
        tracing::info!(path, "Posting JSON");
        let request = self.http.post(self.url(path));
        let request = match body {
            Some(body) => request.json(&body),
            None => request.header(reqwest::header::CONTENT_TYPE, "application/json"),
        };

        let response = request.send().await?;
        tracing::debug!(status = response.status().as_u16(), "JSON request completed");
        Self::into_reply(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ClientConfig {
            base_url: "http://judge.local:5000".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_url_joining() {
        let api = client();
        assert_eq!(api.url("/api/run"), "http://judge.local:5000/api/run");
        assert_eq!(api.url("problems/create"), "http://judge.local:5000/problems/create");
        assert_eq!(api.url("https://other.host/x"), "https://other.host/x");
    }

    #[test]
    fn test_reply_status_and_decode() {
        let reply = HttpReply::new(201, serde_json::json!({"success": true}));
        assert!(reply.is_ok());
        let env: crate::models::ApiEnvelope = reply.json().unwrap();
        assert!(env.success);

        let reply = HttpReply::new(400, serde_json::json!([1, 2]));
        assert!(!reply.is_ok());
        assert!(matches!(
            reply.json::<crate::models::ApiEnvelope>(),
            Err(AppError::MalformedResponse(_))
        ));
    }
}
