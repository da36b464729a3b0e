//! Escape Utilities for Dart string literals
use crate::types::QuoteStyle;

/// Escapes every `quote` in `s` that is not already escaped with a backslash.
///
/// Returns the escaped string and the number of quotes escaped.
pub fn escape_unescaped(s: &str, quote: char) -> (String, usize) {
    let mut escaped = String::with_capacity(s.len());
    let mut count = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            escaped.push(c);
            if let Some(next) = chars.next() {
                escaped.push(next);
            }
        } else if c == quote {
            escaped.push('\\');
            escaped.push(c);
            count += 1;
        } else {
            escaped.push(c);
        }
    }
    (escaped, count)
}

/// Like [escape_unescaped], but copies `${...}` interpolations untouched so
/// nested literals keep their quotes. An escaped `\${` is plain text.
pub fn escape_outside_interpolation(s: &str, quote: char) -> (String, usize) {
    let mut escaped = String::with_capacity(s.len());
    let mut count = 0;
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        if c == '\\' {
            let len = rest[1..].chars().next().map_or(1, |n| 1 + n.len_utf8());
            escaped.push_str(&rest[..len]);
            rest = &rest[len..];
            continue;
        }
        if rest.starts_with("${") {
            if let Some(end) = rest.find('}') {
                escaped.push_str(&rest[..=end]);
                rest = &rest[end + 1..];
                continue;
            }
        }
        if c == quote {
            escaped.push('\\');
            count += 1;
        }
        escaped.push(c);
        rest = &rest[c.len_utf8()..];
    }
    (escaped, count)
}

/// Escapes `s` so it can be placed between quotes of `style`.
pub fn escape_for_quote(s: &str, style: QuoteStyle) -> String {
    escape_unescaped(s, style.as_char()).0
}

/// Returns `s` as a literal of `style`, escaping quotes as needed.
pub fn quote_literal(s: &str, style: QuoteStyle) -> String {
    style.quote(&escape_for_quote(s, style))
}

#[test]
fn test_escape_unescaped() {
    assert_eq!(
        escape_unescaped("Let's play", '\''),
        ("Let\\'s play".to_string(), 1)
    );
    assert_eq!(
        escape_unescaped("Let\\'s play", '\''),
        ("Let\\'s play".to_string(), 0)
    );
    assert_eq!(
        escape_unescaped(r"a\\'b", '\''),
        (r"a\\\'b".to_string(), 1)
    );
    assert_eq!(escape_unescaped("trailing\\", '\''), ("trailing\\".to_string(), 0));
    assert_eq!(escape_unescaped("it's", '"'), ("it's".to_string(), 0));
}

#[test]
fn test_quote_literal() {
    assert_eq!(
        quote_literal("Making progress on today's tasks?", QuoteStyle::Single),
        r"'Making progress on today\'s tasks?'"
    );
    assert_eq!(
        quote_literal("Making progress on today's tasks?", QuoteStyle::Double),
        "\"Making progress on today's tasks?\""
    );
    assert_eq!(quote_literal("say \"hi\"", QuoteStyle::Double), r#""say \"hi\"""#);
}

#[test]
fn test_escape_outside_interpolation() {
    assert_eq!(
        escape_outside_interpolation("${n == 1 ? 'day' : 'days'} isn't", '\''),
        ("${n == 1 ? 'day' : 'days'} isn\\'t".to_string(), 1)
    );
    assert_eq!(
        escape_outside_interpolation(r"\${a}'s", '\''),
        (r"\${a}\'s".to_string(), 1)
    );
    assert_eq!(
        escape_outside_interpolation("${unclosed 'x'", '\''),
        (r"${unclosed \'x\'".to_string(), 2)
    );
}
