//! Body-text escaping
//!
//! Abstract bodies span multiple physical lines, but the on-disk record
//! format is one field per line. The body is flattened to a single line of
//! visible two-character escape sequences; [`unescape`] reverses the step.

/// Escapes newlines, tabs, carriage returns, and backslashes
///
/// # Example
///
/// ```
/// use aps_harvest::record::escape;
///
/// assert_eq!(escape("a\nb"), "a\\nb");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverses [`escape`]
///
/// Unknown escape sequences are preserved verbatim.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_newline() {
        assert_eq!(escape("\nWe report..."), "\\nWe report...");
    }

    #[test]
    fn test_escape_tab_and_backslash() {
        assert_eq!(escape("a\tb\\c"), "a\\tb\\\\c");
    }

    #[test]
    fn test_escape_produces_single_line() {
        let escaped = escape("line one\nline two\r\nline three");
        assert!(!escaped.contains('\n'));
        assert!(!escaped.contains('\r'));
    }

    #[test]
    fn test_round_trip_is_identity() {
        let bodies = [
            "plain text",
            "\nleading newline",
            "tabs\tand\nnewlines",
            "backslash \\n is not a newline",
            "trailing backslash \\",
            "\r\nwindows line ending",
        ];
        for body in bodies {
            assert_eq!(unescape(&escape(body)), body, "round trip of {:?}", body);
        }
    }

    #[test]
    fn test_unescape_preserves_unknown_sequences() {
        assert_eq!(unescape("\\x41"), "\\x41");
    }

    #[test]
    fn test_unescape_lone_trailing_backslash() {
        assert_eq!(unescape("abc\\"), "abc\\");
    }
}
