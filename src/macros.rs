/// Wrap a subject in an assertion context named after the call-site
/// expression.
///
/// ```
/// use attest::assert_that;
///
/// let greeting = "hello";
/// assert_that!(greeting).be_lower_cased().unwrap();
/// ```
///
/// Failure messages reference the expression text (`greeting` above) where
/// the plain [`that`](crate::that) constructor would say `actual`.
#[macro_export]
macro_rules! assert_that {
    ($subject:expr) => {
        $crate::that($subject).named(stringify!($subject))
    };
}
