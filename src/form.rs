//! The summarize form: its four fields, URL validation, and the submit cycle.

use serde::Serialize;
use url::Url;

use crate::error::{AppError, Result, ValidationError};
use crate::webhook::Summarizer;

/// Which of the four renderings the form is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Loading,
    Error,
    Summary,
}

/// In-memory state of one form session. `Default` is the idle form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub url: String,
    pub is_loading: bool,
    pub error: String,
    pub summary: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input change handler. Nothing is validated until submit.
    pub fn set_url(&mut self, value: impl Into<String>) {
        self.url = value.into();
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if !self.error.is_empty() {
            Phase::Error
        } else if !self.summary.is_empty() {
            Phase::Summary
        } else {
            Phase::Idle
        }
    }

    /// The submit control is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading
    }

    fn fail(&mut self, err: &AppError) {
        self.error = err.to_string();
        self.summary.clear();
    }
}

/// Checks the raw input and returns the trimmed URL that will be sent.
///
/// The value has to parse as an absolute URL with an authority section,
/// so `example.com` (no scheme) and `mailto:someone` (no authority) are both
/// rejected.
pub fn validate_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    match Url::parse(trimmed) {
        Ok(parsed) if !parsed.cannot_be_a_base() => Ok(trimmed.to_string()),
        _ => Err(ValidationError::Invalid),
    }
}

/// Runs one submit attempt against `state`.
///
/// Prior error and summary are cleared before anything else, so a stale
/// result never survives into a new attempt. Loading is always false again
/// once this returns. On failure the message is stored in `state.error` and
/// the typed error is returned as well. A state that is already loading is
/// left untouched and reported as `Phase::Loading`.
pub async fn submit(state: &mut FormState, summarizer: &dyn Summarizer) -> Result<Phase> {
    if !state.can_submit() {
        tracing::debug!("submit ignored, request already in flight");
        return Ok(state.phase());
    }

    state.error.clear();
    state.summary.clear();

    let url = match validate_url(&state.url) {
        Ok(url) => url,
        Err(err) => {
            let err = AppError::from(err);
            state.fail(&err);
            return Err(err);
        }
    };

    state.is_loading = true;
    tracing::info!(url = %url, "requesting summary");
    let start_time = std::time::Instant::now();

    let result = summarizer.summarize(&url).await;
    state.is_loading = false;

    match result {
        Ok(summary) => {
            tracing::info!(url = %url, elapsed = ?start_time.elapsed(), bytes = summary.len(), "summary received");
            state.summary = summary;
            Ok(state.phase())
        }
        Err(err) => {
            tracing::error!(url = %url, elapsed = ?start_time.elapsed(), error = %err, "summary request failed");
            let err = AppError::from(err);
            state.fail(&err);
            Err(err)
        }
    }
}
