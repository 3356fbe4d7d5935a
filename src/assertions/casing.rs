//! Casing predicates over string subjects
//!
//! Classification uses the platform's default case mapping
//! (`char::is_lowercase` / `char::is_uppercase`): letters are lower- or
//! upper-case, while digits, punctuation and symbols are caseless and
//! never fail a casing check on their own.
//!
//! Null handling is asymmetric on purpose. The positive predicates
//! (`be_lower_cased`, `be_upper_cased`) fail on a null subject, since a
//! non-existent string has no casing to exhibit; the negative predicates
//! treat null as trivially passing for the same reason.

use super::StringAssertion;
use crate::errors::AssertionResult;
use crate::subject::display_subject;

fn has_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase)
}

fn has_lower(s: &str) -> bool {
    s.chars().any(char::is_lowercase)
}

impl StringAssertion<'_> {
    /// Assert that every character of the subject is lower cased.
    ///
    /// The empty string passes vacuously; caseless characters are neutral.
    /// A null subject fails.
    pub fn be_lower_cased(&self) -> AssertionResult {
        match self.subject() {
            Some(s) if !has_upper(s) => Ok(()),
            other => Err(self.fail(
                "be_lower_cased",
                format!(
                    "Expected all characters in {} to be lower cased{}, but found {}.",
                    self.name(),
                    self.reason(),
                    display_subject(other)
                ),
            )),
        }
    }

    /// Assert that the subject is not made up entirely of lower-case
    /// characters.
    ///
    /// Passes when the subject is null or contains at least one character
    /// that is not lower-case. An empty string fails: it exhibits no
    /// non-lower-case character.
    pub fn not_be_lower_cased(&self) -> AssertionResult {
        match self.subject() {
            Some(s) if s.chars().all(char::is_lowercase) => Err(self.fail(
                "not_be_lower_cased",
                format!(
                    "Did not expect any characters in {} to be lower cased{}.",
                    self.name(),
                    self.reason()
                ),
            )),
            _ => Ok(()),
        }
    }

    /// Assert that no character of the subject is lower cased.
    ///
    /// Fails as soon as a single lower-case letter is present, even in a
    /// mixed-case string. A null subject passes.
    pub fn not_have_any_lower_casing(&self) -> AssertionResult {
        match self.subject() {
            Some(s) if has_lower(s) => Err(self.fail(
                "not_have_any_lower_casing",
                format!(
                    "Did not expect one or more character(s) in {} to be lower cased{}.",
                    self.name(),
                    self.reason()
                ),
            )),
            _ => Ok(()),
        }
    }

    /// Assert that every character of the subject is upper cased.
    ///
    /// Mirror of [`be_lower_cased`](Self::be_lower_cased).
    pub fn be_upper_cased(&self) -> AssertionResult {
        match self.subject() {
            Some(s) if !has_lower(s) => Ok(()),
            other => Err(self.fail(
                "be_upper_cased",
                format!(
                    "Expected all characters in {} to be upper cased{}, but found {}.",
                    self.name(),
                    self.reason(),
                    display_subject(other)
                ),
            )),
        }
    }

    /// Assert that the subject is not made up entirely of upper-case
    /// characters.
    ///
    /// Mirror of [`not_be_lower_cased`](Self::not_be_lower_cased).
    pub fn not_be_upper_cased(&self) -> AssertionResult {
        match self.subject() {
            Some(s) if s.chars().all(char::is_uppercase) => Err(self.fail(
                "not_be_upper_cased",
                format!(
                    "Did not expect any characters in {} to be upper cased{}.",
                    self.name(),
                    self.reason()
                ),
            )),
            _ => Ok(()),
        }
    }

    /// Assert that no character of the subject is upper cased.
    ///
    /// Mirror of [`not_have_any_lower_casing`](Self::not_have_any_lower_casing).
    pub fn not_have_any_upper_casing(&self) -> AssertionResult {
        match self.subject() {
            Some(s) if has_upper(s) => Err(self.fail(
                "not_have_any_upper_casing",
                format!(
                    "Did not expect one or more character(s) in {} to be upper cased{}.",
                    self.name(),
                    self.reason()
                ),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::assertions::that;

    #[test]
    fn lower_string_is_lower_cased() {
        assert!(that("abc").be_lower_cased().is_ok());
    }

    #[test]
    fn empty_string_is_lower_cased_vacuously() {
        assert!(that("").be_lower_cased().is_ok());
    }

    #[test]
    fn digits_and_symbols_are_neutral_for_lower() {
        assert!(that("a123").be_lower_cased().is_ok());
        assert!(that("abc!@#$/").be_lower_cased().is_ok());
    }

    #[test]
    fn upper_letter_breaks_be_lower_cased() {
        assert!(that("ABC").be_lower_cased().is_err());
        assert!(that("aBc").be_lower_cased().is_err());
    }

    #[test]
    fn null_subject_fails_be_lower_cased() {
        let null_string: Option<&str> = None;
        assert!(that(null_string).be_lower_cased().is_err());
    }

    #[test]
    fn not_be_lower_cased_accepts_null_and_mixed_input() {
        let null_string: Option<&str> = None;
        assert!(that(null_string).not_be_lower_cased().is_ok());
        assert!(that("ABC").not_be_lower_cased().is_ok());
        assert!(that("A1").not_be_lower_cased().is_ok());
        assert!(that("a1").not_be_lower_cased().is_ok());
    }

    #[test]
    fn not_be_lower_cased_rejects_fully_lower_input() {
        assert!(that("abc").not_be_lower_cased().is_err());
        assert!(that("").not_be_lower_cased().is_err());
    }

    #[test]
    fn not_have_any_lower_casing_rejects_a_single_lower_letter() {
        assert!(that("abc").not_have_any_lower_casing().is_err());
        assert!(that("Abc").not_have_any_lower_casing().is_err());
        assert!(that("a1").not_have_any_lower_casing().is_err());
    }

    #[test]
    fn not_have_any_lower_casing_accepts_null_and_caseless_input() {
        let null_string: Option<&str> = None;
        assert!(that(null_string).not_have_any_lower_casing().is_ok());
        assert!(that("ABC").not_have_any_lower_casing().is_ok());
        assert!(that("A1").not_have_any_lower_casing().is_ok());
        assert!(that("123!").not_have_any_lower_casing().is_ok());
    }

    #[test]
    fn upper_family_mirrors_lower_family() {
        let null_string: Option<&str> = None;
        assert!(that("ABC").be_upper_cased().is_ok());
        assert!(that("A123").be_upper_cased().is_ok());
        assert!(that("Abc").be_upper_cased().is_err());
        assert!(that(null_string).be_upper_cased().is_err());

        assert!(that("abc").not_be_upper_cased().is_ok());
        assert!(that("a1").not_be_upper_cased().is_ok());
        assert!(that("ABC").not_be_upper_cased().is_err());

        assert!(that("abc").not_have_any_upper_casing().is_ok());
        assert!(that("Abc").not_have_any_upper_casing().is_err());
        assert!(that(null_string).not_have_any_upper_casing().is_ok());
    }
}
