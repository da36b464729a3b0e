//! Inserts `letterSpacing` after large `fontSize` declarations.
use super::base::*;
use crate::ext::fancy_regex::FancyRegexExt;
use anyhow::Result;
use fancy_regex::Regex;
use std::collections::HashMap;

/// Font sizes and the letter spacing inserted after them.
pub const DEFAULT_RULES: &[(u32, &str)] = &[
    (32, "-0.5"),
    (28, "-0.5"),
    (24, "-0.3"),
    (22, "-0.3"),
    (20, "-0.3"),
    (18, "-0.2"),
];

/// Inserts `letterSpacing: <value>,` on a new line right after every matching
/// `fontSize: <size>,`, indented like the line holding `fontSize`.
///
/// A `fontSize` already followed by `letterSpacing` is skipped.
#[derive(Debug)]
pub struct LetterSpacingPass {
    spacing: HashMap<String, String>,
    regex: Regex,
}

impl LetterSpacingPass {
    pub fn new(rules: &[(u32, &str)]) -> Result<Self> {
        if rules.is_empty() {
            return Err(anyhow::anyhow!("No letter spacing rules given"));
        }
        let sizes: Vec<String> = rules.iter().map(|(size, _)| size.to_string()).collect();
        let regex = Regex::new(&format!(
            r"\bfontSize:\s*({}),(?!\s*letterSpacing\s*:)",
            sizes.join("|")
        ))?;
        let spacing = rules
            .iter()
            .map(|(size, value)| (size.to_string(), value.to_string()))
            .collect();
        Ok(Self { spacing, regex })
    }
}

fn line_indent(content: &str, pos: usize) -> &str {
    let start = content[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = &content[start..];
    let len = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..len]
}

impl TextPass for LetterSpacingPass {
    fn name(&self) -> &'static str {
        "letter-spacing"
    }

    fn apply(&self, content: &str) -> Result<PassOutput> {
        let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
        let mut inserted: Vec<String> = Vec::new();
        let (result, _) = self.regex.try_replace_all(content, |caps| {
            let whole = &caps[0];
            let start = caps.get(0).map_or(0, |m| m.start());
            match self.spacing.get(&caps[1]) {
                Some(value) => {
                    inserted.push(format!("fontSize {}: letterSpacing {}", &caps[1], value));
                    format!(
                        "{}{}{}letterSpacing: {},",
                        whole,
                        newline,
                        line_indent(content, start),
                        value
                    )
                }
                None => whole.to_string(),
            }
        })?;
        Ok(PassOutput {
            content: result,
            changes: inserted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pass() -> LetterSpacingPass {
        LetterSpacingPass::new(DEFAULT_RULES).unwrap()
    }

    #[test]
    fn test_inserts_after_font_size() {
        let src = concat!(
            "          style: TextStyle(\n",
            "            fontSize: 24,\n",
            "            fontWeight: FontWeight.bold,\n",
            "          ),\n",
        );
        let out = pass().apply(src).unwrap();
        assert_eq!(
            out.content,
            concat!(
                "          style: TextStyle(\n",
                "            fontSize: 24,\n",
                "            letterSpacing: -0.3,\n",
                "            fontWeight: FontWeight.bold,\n",
                "          ),\n",
            )
        );
        assert_eq!(out.changes, vec!["fontSize 24: letterSpacing -0.3".to_string()]);
    }

    #[test]
    fn test_rules_per_size() {
        let out = pass()
            .apply("a(fontSize: 32,)\nb(fontSize:18,)\nc(fontSize: 16,)\nd(fontSize: 240,)\n")
            .unwrap();
        assert_eq!(
            out.content,
            "a(fontSize: 32,\nletterSpacing: -0.5,)\nb(fontSize:18,\nletterSpacing: -0.2,)\nc(fontSize: 16,)\nd(fontSize: 240,)\n"
        );
    }

    #[test]
    fn test_idempotent_and_crlf() {
        let src = "  TextStyle(\r\n    fontSize: 28,\r\n    color: c,\r\n  )\r\n";
        let once = pass().apply(src).unwrap().content;
        assert_eq!(
            once,
            "  TextStyle(\r\n    fontSize: 28,\r\n    letterSpacing: -0.5,\r\n    color: c,\r\n  )\r\n"
        );
        let twice = pass().apply(&once).unwrap();
        assert_eq!(twice.content, once);
        assert!(twice.changes.is_empty());
    }

    #[test]
    fn test_skips_other_properties() {
        let src = "minFontSize: 24,\nfontSize: 24.0,\n";
        assert_eq!(pass().apply(src).unwrap().content, src);
    }

    #[test]
    fn test_empty_rules() {
        assert!(LetterSpacingPass::new(&[]).is_err());
    }
}
