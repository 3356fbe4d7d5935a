//! Shared failure type for assertion predicates

use serde::Serialize;
use thiserror::Error;

/// The single failure kind raised by a failed assertion.
///
/// `Display` is exactly the rendered failure message. The message text is
/// part of the public contract: external runners match on it, so wording,
/// punctuation and the trailing period are stable across versions.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
    predicate: &'static str,
    subject_name: String,
}

impl AssertionFailure {
    /// Create a failure for the given predicate and subject name.
    pub(crate) fn new(
        predicate: &'static str,
        subject_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            predicate,
            subject_name: subject_name.into(),
        }
    }

    /// The fully rendered failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the predicate that raised this failure.
    pub fn predicate(&self) -> &'static str {
        self.predicate
    }

    /// The caller-visible name of the subject under test.
    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }
}

/// Outcome of a single predicate evaluation: pass, or a failure carrying
/// the rendered message.
pub type AssertionResult = Result<(), AssertionFailure>;
