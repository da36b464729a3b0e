//! Replaces Japanese string literals with their English translation.
use super::base::*;
use crate::ext::fancy_regex::FancyRegexExt;
use crate::tables::MappingTable;
use anyhow::Result;
use fancy_regex::Regex;

lazy_static::lazy_static! {
    static ref SINGLE_QUOTED_BRACKET_EXPR: Regex = Regex::new(r"'「\$\{([^}]+)\}」").unwrap();
    static ref DOUBLE_QUOTED_BRACKET_EXPR: Regex = Regex::new(r#""「\$\{([^}]+)\}」"#).unwrap();
}

/// Translates exact literals through a [MappingTable], then rewrites literals
/// that open with a `「${expr}」` quotation into `"${expr}"`.
#[derive(Debug)]
pub struct TranslatePass {
    table: MappingTable,
}

impl TranslatePass {
    pub fn new(table: MappingTable) -> Self {
        Self { table }
    }
}

impl TextPass for TranslatePass {
    fn name(&self) -> &'static str {
        "translate"
    }

    fn apply(&self, content: &str) -> Result<PassOutput> {
        let mut output = replace_literals(content, &self.table);
        let (s, single) = SINGLE_QUOTED_BRACKET_EXPR
            .try_replace_all(&output.content, |caps| format!("'\"${{{}}}\"", &caps[1]))?;
        let (s, double) = DOUBLE_QUOTED_BRACKET_EXPR
            .try_replace_all(&s, |caps| format!("\"\\\"${{{}}}\\\"", &caps[1]))?;
        if single + double > 0 {
            output
                .changes
                .push(format!("「${{…}}」 → \"${{…}}\" (x{})", single + double));
        }
        output.content = s;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::translation_table;
    use crate::types::TableKind;
    use pretty_assertions::assert_eq;

    fn translate(kind: TableKind, src: &str) -> PassOutput {
        TranslatePass::new(translation_table(kind))
            .apply(src)
            .unwrap()
    }

    #[test]
    fn test_translates_exact_literal() {
        let out = translate(TableKind::Primary, "title: 'このタスクはできましたか？',");
        assert_eq!(out.content, "title: 'Did you complete this task?',");
        assert_eq!(
            out.changes,
            vec!["'このタスクはできましたか？' → 'Did you complete this task?'".to_string()]
        );

        let out = translate(TableKind::Primary, "Text(\"このタスクはできましたか？\")");
        assert_eq!(out.content, "Text(\"Did you complete this task?\")");
    }

    #[test]
    fn test_escapes_apostrophes_in_translation() {
        let out = translate(TableKind::Primary, "'今日のタスク、進んでいますか？',");
        assert_eq!(out.content, r"'Making progress on today\'s tasks?',");
        let out = translate(TableKind::Primary, "\"アルバムの次のトラックを再生しましょう\"");
        assert_eq!(out.content, "\"Let's play the next track\"");
    }

    #[test]
    fn test_partial_matches_are_untouched() {
        let src = "final s = 'このタスクはできましたか？です';\n// このタスクはできましたか？\n";
        let out = translate(TableKind::Primary, src);
        assert_eq!(out.content, src);
        assert!(out.changes.is_empty());
    }

    #[test]
    fn test_bracket_expressions() {
        let out = translate(
            TableKind::Primary,
            "Text('「${album.name}」を削除しました'); Text(\"「${task.title}」\")",
        );
        assert_eq!(
            out.content,
            "Text('\"${album.name}\"を削除しました'); Text(\"\\\"${task.title}\\\"\")"
        );
        assert_eq!(out.changes.len(), 1);
    }

    #[test]
    fn test_conflicting_keys_are_not_substituted() {
        let src = "labels: ['日', '月', '火'],";
        assert_eq!(
            translate(TableKind::Primary, src).content,
            "labels: ['Sun', 'Mon', 'Tue'],"
        );
        assert_eq!(
            translate(TableKind::Legacy, src).content,
            "labels: ['日', '月', 'Tue'],"
        );
        assert_eq!(
            translate(TableKind::All, src).content,
            "labels: ['日', '月', 'Tue'],"
        );
    }

    #[test]
    fn test_english_keys() {
        let out = translate(
            TableKind::Primary,
            "body: 'Time to put your phone away and rest ',",
        );
        assert_eq!(out.content, "body: 'Time to put your phone away and rest 🌙',");
        let again = translate(TableKind::Primary, &out.content);
        assert_eq!(again.content, out.content);
    }
}
