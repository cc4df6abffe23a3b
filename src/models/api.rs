//! Backend response envelope

use serde::Deserialize;

/// `{success, message?}` body returned by the form and auth endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    /// Server message, unless it is absent or blank
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(msg) if !msg.is_empty() => msg,
            _ => fallback,
        }
    }
}
