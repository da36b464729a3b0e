use super::base::*;
use crate::tables::MappingTable;
use anyhow::Result;

/// Rewrites quoted UI strings found in the title case dictionary.
///
/// The dictionary is authoritative: its values are applied as written, even
/// where [to_title_case](crate::utils::title_case::to_title_case) would
/// capitalize differently (sentence-style placeholders such as
/// `Enter task title` stay as they are).
#[derive(Debug)]
pub struct TitleCasePass {
    table: MappingTable,
}

impl TitleCasePass {
    pub fn new(table: MappingTable) -> Self {
        Self { table }
    }
}

impl TextPass for TitleCasePass {
    fn name(&self) -> &'static str {
        "title-case"
    }

    fn apply(&self, content: &str) -> Result<PassOutput> {
        Ok(replace_literals(content, &self.table))
    }
}

#[test]
fn test_title_case_pass() {
    let pass = TitleCasePass::new(crate::tables::title_case_table());
    let out = pass
        .apply("greeting = hour < 12 ? 'Good morning' : \"Good evening\";\nText('Settings')")
        .unwrap();
    assert_eq!(
        out.content,
        "greeting = hour < 12 ? 'Good Morning' : \"Good Evening\";\nText('Settings')"
    );
    assert_eq!(out.changes.len(), 2);
}

#[test]
fn test_dictionary_overrides_rule() {
    use crate::utils::title_case::to_title_case;

    let pass = TitleCasePass::new(crate::tables::title_case_table());
    let src = "hintText: 'Enter task title',";
    assert_eq!(to_title_case("Enter task title"), "Enter Task Title");
    let out = pass.apply(src).unwrap();
    assert_eq!(out.content, src);
    assert!(out.changes.is_empty());
}
