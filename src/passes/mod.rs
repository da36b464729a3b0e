//! Text passes applied to source files.
pub mod base;
pub mod letter_spacing;
pub mod quotes;
pub mod title_case;
pub mod translate;

pub use base::{PassOutput, TextPass, replace_literals};
pub use letter_spacing::LetterSpacingPass;
pub use quotes::QuoteEscapePass;
pub use title_case::TitleCasePass;
pub use translate::TranslatePass;

use anyhow::Result;

/// Runs `passes` in order, feeding each the output of the previous one.
pub fn apply_all(content: &str, passes: &[Box<dyn TextPass>]) -> Result<PassOutput> {
    let mut output = PassOutput::unchanged(content);
    for pass in passes {
        let next = pass
            .apply(&output.content)
            .map_err(|e| anyhow::anyhow!("{} pass failed: {}", pass.name(), e))?;
        output.content = next.content;
        output.changes.extend(next.changes);
    }
    Ok(output)
}

#[test]
fn test_apply_all_chains_passes() {
    let passes: Vec<Box<dyn TextPass>> = vec![
        Box::new(TranslatePass::new(crate::tables::translation_table(
            crate::types::TableKind::Primary,
        ))),
        Box::new(QuoteEscapePass::new()),
    ];
    let out = apply_all("Text('できた！'), Text('It's')", &passes).unwrap();
    assert_eq!(out.content, "Text('Done!'), Text('It\\'s')");
    assert_eq!(out.changes.len(), 2);
}
