//! Reason-clause formatting for failure messages
//!
//! A reason is a template string with positional `{0}`-style placeholders
//! plus an ordered list of displayable arguments. Formatting is
//! display-friendly rather than strictly validating: placeholders whose
//! index is out of range, and anything in braces that is not a plain
//! ordinal, are left verbatim instead of raising.

use std::fmt::Display;

/// Substitute positional placeholders in `template` with the display form
/// of the corresponding argument.
///
/// - An empty template yields an empty result.
/// - `{N}` with `N < args.len()` is replaced by `args[N]`.
/// - `{N}` with an out-of-range index is left verbatim.
/// - `{{` and `}}` escape to literal braces; any other brace text is
///   copied through unchanged.
pub fn format_reason(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut index = String::new();
                let mut closed = false;
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_digit() {
                        index.push(next);
                        chars.next();
                    } else if next == '}' {
                        chars.next();
                        closed = true;
                        break;
                    } else {
                        break;
                    }
                }
                match (closed, index.parse::<usize>()) {
                    (true, Ok(n)) if n < args.len() => out.push_str(&args[n].to_string()),
                    (true, _) => {
                        // Out-of-range or empty braces: leave verbatim.
                        out.push('{');
                        out.push_str(&index);
                        out.push('}');
                    }
                    (false, _) => {
                        // Unclosed or non-ordinal: emit what was consumed and
                        // let the main loop carry on.
                        out.push('{');
                        out.push_str(&index);
                    }
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Compose the reason fragment inserted into a failure message.
///
/// An empty template yields an empty fragment. Otherwise the rendered
/// reason is prefixed with a space and, unless it already starts with
/// "because", the word `because`:
///
/// - `"we want to test it"` becomes `" because we want to test it"`
/// - `"because we want to test it"` becomes `" because we want to test it"`
pub fn because_clause(template: &str, args: &[&dyn Display]) -> String {
    if template.is_empty() {
        return String::new();
    }
    let rendered = format_reason(template, args);
    if starts_with_because(&rendered) {
        format!(" {}", rendered.trim_start())
    } else {
        format!(" because {rendered}")
    }
}

fn starts_with_because(reason: &str) -> bool {
    reason
        .trim_start()
        .get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("because"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_template_renders_empty() {
        assert_eq!(format_reason("", &[&"unused"]), "");
    }

    #[test]
    fn positional_placeholders_are_substituted_in_order() {
        assert_eq!(
            format_reason("expected {0}, got {1}", &[&"abc", &42]),
            "expected abc, got 42"
        );
    }

    #[test]
    fn repeated_placeholder_is_substituted_each_time() {
        assert_eq!(format_reason("{0} and {0}", &[&"x"]), "x and x");
    }

    #[test]
    fn out_of_range_placeholder_is_left_verbatim() {
        assert_eq!(format_reason("got {0} and {3}", &[&"a"]), "got a and {3}");
    }

    #[test]
    fn template_without_placeholders_passes_through() {
        assert_eq!(format_reason("plain text", &[]), "plain text");
    }

    #[test]
    fn named_or_empty_braces_are_left_verbatim() {
        assert_eq!(format_reason("{name} and {}", &[&"a"]), "{name} and {}");
    }

    #[test]
    fn doubled_braces_escape_to_literals() {
        assert_eq!(format_reason("{{0}} is literal", &[&"a"]), "{0} is literal");
    }

    #[test]
    fn unclosed_brace_degrades_gracefully() {
        assert_eq!(format_reason("tail {0", &[&"a"]), "tail {0");
    }

    #[test]
    fn because_clause_is_empty_for_empty_template() {
        assert_eq!(because_clause("", &[]), "");
    }

    #[test]
    fn because_clause_prefixes_because_when_missing() {
        assert_eq!(
            because_clause("we want {0}", &[&"proof"]),
            " because we want proof"
        );
    }

    #[test]
    fn because_clause_keeps_existing_because_prefix() {
        assert_eq!(
            because_clause("because strings should never be {0}", &[&"null"]),
            " because strings should never be null"
        );
    }

    #[test]
    fn because_prefix_check_is_case_insensitive() {
        assert_eq!(because_clause("Because it matters", &[]), " Because it matters");
    }
}
