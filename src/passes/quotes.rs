//! Escapes stray single quotes inside single-quoted Dart literals.
use super::base::*;
use crate::ext::fancy_regex::FancyRegexExt;
use crate::utils::escape::escape_outside_interpolation;
use anyhow::Result;
use fancy_regex::{Regex, RegexBuilder};

/// What may follow a closing quote on the same line.
const CLOSE: &str = r"[ \t]*(?:[,;:)\]}+?.'=&|!<>/\r]|$)";

/// A literal that never closes is rescanned from every later quote on its
/// line, so long lines need more than the default budget.
const BACKTRACK_LIMIT: usize = 1 << 30;

lazy_static::lazy_static! {
    // 1: char before the opening quote, 2: literal body.
    // `${...}` is one unit so quotes of nested literals never end the body.
    static ref SINGLE_QUOTED: Regex = RegexBuilder::new(&format!(
        r"(?m)(^|[^\w\\'])'(?!'')((?>(?:\$\{{[^}}\r\n]*\}}|[^'\\\r\n]|\\.|'(?!{close}))*))'(?={close})",
        close = CLOSE
    ))
    .backtrack_limit(BACKTRACK_LIMIT)
    .build()
    .unwrap();
}

/// Escapes every unescaped `'` inside a single-quoted literal.
///
/// A quote closes a literal only when it is followed by punctuation that can
/// end an expression or by the end of the line; any other interior quote is
/// an apostrophe and gets escaped. Quotes inside `${...}` belong to nested
/// literals and are kept. Literals never span lines and quotes that are
/// already escaped are left alone, so the pass is idempotent.
#[derive(Debug, Default)]
pub struct QuoteEscapePass {}

impl QuoteEscapePass {
    pub fn new() -> Self {
        Self {}
    }
}

impl TextPass for QuoteEscapePass {
    fn name(&self) -> &'static str {
        "fix-quotes"
    }

    fn apply(&self, content: &str) -> Result<PassOutput> {
        let mut escaped_total = 0;
        let (result, _) = SINGLE_QUOTED.try_replace_all(content, |caps| {
            let (body, count) = escape_outside_interpolation(&caps[2], '\'');
            escaped_total += count;
            format!("{}'{}'", &caps[1], body)
        })?;
        let mut changes = Vec::new();
        if escaped_total > 0 {
            changes.push(format!("Escaped {} quote(s)", escaped_total));
        }
        Ok(PassOutput {
            content: result,
            changes,
        })
    }
}
