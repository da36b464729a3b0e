use crate::tables::MappingTable;
use crate::types::*;
use crate::utils::escape::quote_literal;
use anyhow::Result;

/// The result of running a [TextPass] over a file.
#[derive(Debug, Default)]
pub struct PassOutput {
    /// New file content
    pub content: String,
    /// Human readable description of each change
    pub changes: Vec<String>,
}

impl PassOutput {
    pub fn unchanged(content: &str) -> Self {
        Self {
            content: content.to_string(),
            changes: Vec::new(),
        }
    }
}

/// A deterministic text transformation applied to a whole file.
pub trait TextPass: std::fmt::Debug {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    fn apply(&self, content: &str) -> Result<PassOutput>;
}

/// Replaces every quoted literal whose exact text is a key of `table`.
///
/// Both single and double quoted literals are handled. The replacement keeps
/// the quote style and is escaped for it.
pub fn replace_literals(content: &str, table: &MappingTable) -> PassOutput {
    let mut result = content.to_string();
    let mut changes = Vec::new();
    for (key, value) in table.entries() {
        for style in QuoteStyle::all() {
            let pattern = quote_literal(key, style);
            if !result.contains(&pattern) {
                continue;
            }
            let replacement = quote_literal(value, style);
            let count = result.matches(&pattern).count();
            result = result.replace(&pattern, &replacement);
            if count > 1 {
                changes.push(format!("{} → {} (x{})", pattern, replacement, count));
            } else {
                changes.push(format!("{} → {}", pattern, replacement));
            }
        }
    }
    PassOutput {
        content: result,
        changes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replace_literals_keeps_quote_style() {
        let table = MappingTable::from_pairs(
            "t",
            &[("はい", "Yes"), ("今日のタスク", "Today's tasks")],
        );
        let out = replace_literals(
            "a('はい'); b(\"はい\"); c('今日のタスク'); d(\"今日のタスク\"); e('はいはい');",
            &table,
        );
        assert_eq!(
            out.content,
            "a('Yes'); b(\"Yes\"); c('Today\\'s tasks'); d(\"Today's tasks\"); e('はいはい');"
        );
        assert_eq!(out.changes.len(), 4);
    }

    #[test]
    fn test_replace_literals_skips_conflicting_keys() {
        let table = MappingTable::from_pairs("t", &[("月", "Mon"), ("月", "Month")]);
        let src = "Text('月')";
        let out = replace_literals(src, &table);
        assert_eq!(out.content, src);
        assert!(out.changes.is_empty());
    }
}
