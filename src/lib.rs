//! Fluent casing assertions for strings.
//!
//! Each predicate evaluates a subject once and either passes or returns an
//! [`AssertionFailure`] whose message is stable, human-readable and part
//! of the public contract:
//!
//! ```
//! use attest::assert_that;
//!
//! let header = "X-Request-Id";
//! let err = assert_that!(header)
//!     .because("header names should be {0}", &[&"lowercase"])
//!     .be_lower_cased()
//!     .unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Expected all characters in header to be lower cased because header names \
//!      should be lowercase, but found \"X-Request-Id\".",
//! );
//! ```
//!
//! Subjects may be null (`Option::None`); the positive predicates fail on
//! null while the negative ones treat it as trivially passing. See the
//! [`assertions::casing`] module for the exact semantics.

// Export modules for library usage
pub mod assertions;
pub mod errors;
pub mod reason;
pub mod subject;

mod macros;

// Re-export the public surface
pub use crate::assertions::{that, StringAssertion, DEFAULT_SUBJECT_NAME};
pub use crate::errors::{AssertionFailure, AssertionResult};
pub use crate::subject::{display_subject, IntoSubject, NULL_DISPLAY};
