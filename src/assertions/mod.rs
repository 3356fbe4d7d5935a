//! Fluent assertion contexts over string subjects
//!
//! The entry points are [`that`] for an explicit subject and the
//! [`assert_that!`](crate::assert_that) macro, which also captures the
//! call-site expression text as the subject name.

pub mod casing;

use std::borrow::Cow;
use std::fmt::Display;

use crate::errors::AssertionFailure;
use crate::reason::because_clause;
use crate::subject::IntoSubject;

/// Neutral subject name used when no call-site name is available.
pub const DEFAULT_SUBJECT_NAME: &str = "actual";

/// Assertion context binding a subject to its caller-visible name and an
/// optional reason clause.
///
/// Each predicate method evaluates once and either returns `Ok(())` or an
/// [`AssertionFailure`] carrying the composed message; never both.
#[derive(Debug, Clone)]
pub struct StringAssertion<'a> {
    subject: Option<&'a str>,
    name: Cow<'static, str>,
    reason: String,
}

/// Wrap a subject in an assertion context with the neutral name `actual`.
pub fn that<'a>(subject: impl IntoSubject<'a>) -> StringAssertion<'a> {
    StringAssertion {
        subject: subject.into_subject(),
        name: Cow::Borrowed(DEFAULT_SUBJECT_NAME),
        reason: String::new(),
    }
}

impl<'a> StringAssertion<'a> {
    /// Override the subject name used in failure messages.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach a reason to include in the failure message, rendered from a
    /// template with positional `{0}`-style placeholders.
    ///
    /// The word "because" is prepended unless the rendered reason already
    /// starts with it.
    pub fn because(mut self, template: &str, args: &[&dyn Display]) -> Self {
        self.reason = because_clause(template, args);
        self
    }

    /// The subject under test, `None` for a null subject.
    pub fn subject(&self) -> Option<&'a str> {
        self.subject
    }

    /// The caller-visible subject name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn reason(&self) -> &str {
        &self.reason
    }

    pub(crate) fn fail(&self, predicate: &'static str, message: String) -> AssertionFailure {
        log::trace!("assertion {predicate} failed for subject {}", self.name);
        AssertionFailure::new(predicate, self.name.clone(), message)
    }
}
