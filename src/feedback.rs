//! User feedback model
//!
//! Pages describe what the user should see as [`Feedback`] values and hand
//! them to a [`Presenter`]. The presenter is the only piece that knows how
//! things are actually displayed.

use std::time::{Duration, Instant};

/// Tone of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// How a modal goes away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dismiss {
    /// Stays until the user presses the button
    Button(String),
    /// Closes by itself, no button shown
    AutoClose(Duration),
}

/// Something to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Dialog on top of the page
    Modal {
        severity: Severity,
        title: String,
        text: String,
        dismiss: Dismiss,
    },
    /// Non-interactive overlay while a request is in flight
    Blocking { title: String, text: String },
    /// Message next to the control it concerns
    Inline(Banner),
}

impl Feedback {
    /// Client-side validation failure
    pub fn validation(text: impl Into<String>) -> Self {
        Self::Modal {
            severity: Severity::Warning,
            title: "Validation Error".to_string(),
            text: text.into(),
            dismiss: Dismiss::Button("OK".to_string()),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Modal {
            severity: Severity::Error,
            title: title.into(),
            text: text.into(),
            dismiss: Dismiss::Button("OK".to_string()),
        }
    }

    /// Success toast without a button
    pub fn toast(title: impl Into<String>, text: impl Into<String>, after: Duration) -> Self {
        Self::Modal {
            severity: Severity::Success,
            title: title.into(),
            text: text.into(),
            dismiss: Dismiss::AutoClose(after),
        }
    }

    pub fn blocking(title: impl Into<String>) -> Self {
        Self::Blocking {
            title: title.into(),
            text: "Please wait...".to_string(),
        }
    }
}

/// Inline status message, optionally expiring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub severity: Severity,
    pub text: String,
    shown_at: Instant,
    ttl: Option<Duration>,
}

impl Banner {
    /// Banner that clears itself after `ttl`
    pub fn transient(severity: Severity, text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            severity,
            text: text.into(),
            shown_at: Instant::now(),
            ttl: Some(ttl),
        }
    }

    /// Banner that stays until replaced
    pub fn sticky(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            shown_at: Instant::now(),
            ttl: None,
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        match self.ttl {
            None => true,
            Some(ttl) => now.saturating_duration_since(self.shown_at) < ttl,
        }
    }
}

/// Display adapter for page feedback
pub trait Presenter {
    fn present(&mut self, feedback: Feedback);

    /// Leave the current page
    fn navigate(&mut self, location: &str);
}

/// Presenter that remembers everything it was asked to show
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Recorder {
    pub shown: Vec<Feedback>,
    pub navigations: Vec<String>,
}

#[cfg(test)]
impl Recorder {
    pub fn last(&self) -> Option<&Feedback> {
        self.shown.last()
    }
}

#[cfg(test)]
impl Presenter for Recorder {
    fn present(&mut self, feedback: Feedback) {
        self.shown.push(feedback);
    }

    fn navigate(&mut self, location: &str) {
        self.navigations.push(location.to_string());
    }
}
