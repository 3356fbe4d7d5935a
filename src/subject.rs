//! Subject conversion and display conventions
//!
//! A subject is the string under test, possibly null. Owned values stay
//! with the caller; assertions only ever borrow.

/// Display token used for a null subject.
pub const NULL_DISPLAY: &str = "<null>";

/// Conversion of caller values into a possibly-null borrowed subject.
///
/// Implemented for plain strings and for the `Option` forms that model a
/// null subject.
pub trait IntoSubject<'a> {
    fn into_subject(self) -> Option<&'a str>;
}

impl<'a> IntoSubject<'a> for &'a str {
    fn into_subject(self) -> Option<&'a str> {
        Some(self)
    }
}

impl<'a> IntoSubject<'a> for &'a String {
    fn into_subject(self) -> Option<&'a str> {
        Some(self.as_str())
    }
}

impl<'a> IntoSubject<'a> for Option<&'a str> {
    fn into_subject(self) -> Option<&'a str> {
        self
    }
}

impl<'a> IntoSubject<'a> for &'a Option<String> {
    fn into_subject(self) -> Option<&'a str> {
        self.as_deref()
    }
}

impl<'a> IntoSubject<'a> for &'a Option<&'a str> {
    fn into_subject(self) -> Option<&'a str> {
        *self
    }
}

/// Render a subject for inclusion in a failure message: the literal value
/// wrapped in double quotes, or the bare `<null>` token.
pub fn display_subject(subject: Option<&str>) -> String {
    match subject {
        Some(value) => format!("\"{value}\""),
        None => NULL_DISPLAY.to_string(),
    }
}
