mod args;

use anyhow::Result;
use std::sync::atomic::Ordering;
use ui_text_tool::COUNTER;
use ui_text_tool::passes::letter_spacing::DEFAULT_RULES;
use ui_text_tool::passes::*;
use ui_text_tool::runner::{INTERRUPTED, RunConfig, run_files};
use ui_text_tool::tables::{self, MappingTable};
use ui_text_tool::targets;
use ui_text_tool::types::*;
use ui_text_tool::utils;

/// Builds the table selected by `args`, merged with any extra table files.
fn load_tables(args: &args::TableArgs, default: TableKind) -> Result<MappingTable> {
    let kind = args.table.unwrap_or(default);
    let mut list = vec![tables::translation_table(kind)];
    for f in args.table_files.iter() {
        let table = tables::load_table_file(f)?;
        log::debug!("Loaded {} entries from {}", table.len(), f);
        list.push(table);
    }
    if list.len() == 1 {
        return Ok(list.remove(0));
    }
    Ok(MappingTable::merge(kind.as_ref(), &list))
}

/// Warns about conflicting keys, or fails in strict mode.
fn report_collisions(table: &MappingTable, strict: bool) -> Result<()> {
    let collisions = table.collisions();
    for c in collisions.iter() {
        eprintln!("Warning: conflicting mapping skipped: {}", c);
        COUNTER.warning();
    }
    if strict && !collisions.is_empty() {
        return Err(anyhow::anyhow!(
            "{} conflicting key(s) in table {}",
            collisions.len(),
            table.name()
        ));
    }
    Ok(())
}

fn files_or_default(files: &[String], default: &[&str]) -> Vec<String> {
    if files.is_empty() {
        targets::to_owned_list(default)
    } else {
        files.to_vec()
    }
}

fn fix_quotes(input: &str, recursive: bool, cfg: &RunConfig) -> Result<()> {
    let (files, _) = utils::files::collect_files(input, recursive, targets::SOURCE_EXT)?;
    if files.is_empty() {
        eprintln!("No .{} files found in {}", targets::SOURCE_EXT, input);
        return Ok(());
    }
    let passes: Vec<Box<dyn TextPass>> = vec![Box::new(QuoteEscapePass::new())];
    run_files(&files, &passes, cfg);
    Ok(())
}

fn title_case(args: &args::TitleCaseArgs, cfg: &RunConfig) -> Result<()> {
    if let Some(text) = &args.text {
        println!("{}", utils::title_case::to_title_case(text));
        return Ok(());
    }
    let mut passes: Vec<Box<dyn TextPass>> =
        vec![Box::new(TitleCasePass::new(tables::title_case_table()))];
    if !args.no_spacing {
        passes.push(Box::new(LetterSpacingPass::new(DEFAULT_RULES)?));
    }
    let files = files_or_default(&args.files, targets::TITLE_CASE_FILES);
    run_files(&files, &passes, cfg);
    Ok(())
}

fn translate(
    tables: &args::TableArgs,
    files: &[String],
    strict: bool,
    cfg: &RunConfig,
) -> Result<()> {
    let table = load_tables(tables, TableKind::Primary)?;
    report_collisions(&table, strict)?;
    let passes: Vec<Box<dyn TextPass>> = vec![Box::new(TranslatePass::new(table))];
    let files = files_or_default(files, targets::TRANSLATE_FILES);
    run_files(&files, &passes, cfg);
    Ok(())
}

/// Prints every conflicting key. Returns whether any was found.
fn check_tables(tables: &args::TableArgs) -> Result<bool> {
    let table = load_tables(tables, TableKind::All)?;
    let collisions = table.collisions();
    if collisions.is_empty() {
        println!(
            "No conflicting keys in {} ({} entries)",
            table.name(),
            table.len()
        );
        return Ok(false);
    }
    for c in collisions.iter() {
        println!("{}", c);
    }
    println!(
        "{} conflicting key(s) in {} ({} entries)",
        collisions.len(),
        table.name(),
        table.len()
    );
    Ok(true)
}

#[cfg(feature = "image")]
fn resize(args: &args::ResizeArgs, cfg: &RunConfig) -> Result<()> {
    let input = args
        .input
        .clone()
        .unwrap_or_else(targets::screenshot_input_dir);
    let input = std::path::PathBuf::from(input);
    let output = match &args.output {
        Some(output) => std::path::PathBuf::from(output),
        None => input.join(targets::SCREENSHOT_OUTPUT_DIR),
    };
    let size = TargetSize {
        width: args.width.unwrap_or(targets::SCREENSHOT_SIZE.width),
        height: args.height.unwrap_or(targets::SCREENSHOT_SIZE.height),
    };
    let files = files_or_default(&args.files, targets::SCREENSHOT_FILES);
    ui_text_tool::runner::run_resize(&input, &output, &files, size, args.filter, cfg)?;
    eprintln!("Resized images are saved in {}", output.display());
    Ok(())
}

fn main() {
    let arg = args::parse_args();
    if arg.backtrace {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") };
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = ctrlc::set_handler(|| {
        if INTERRUPTED.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
        eprintln!("Interrupt received, stopping after the current file");
    }) {
        log::warn!("Failed to set Ctrl-C handler: {}", e);
    }
    let cfg = RunConfig {
        dry_run: arg.dry_run,
        backtrace: arg.backtrace,
    };
    let re = match &arg.command {
        args::Command::FixQuotes { input, recursive } => fix_quotes(input, *recursive, &cfg),
        #[cfg(feature = "image")]
        args::Command::Resize(args) => resize(args, &cfg),
        args::Command::TitleCase(args) => title_case(args, &cfg),
        args::Command::Translate { tables, files } => translate(tables, files, arg.strict, &cfg),
        args::Command::CheckTables { tables } => match check_tables(tables) {
            Ok(found) => {
                if found {
                    std::process::exit(1);
                }
                return;
            }
            Err(e) => Err(e),
        },
    };
    if let Err(e) = re {
        eprintln!("Error: {}", e);
        if arg.backtrace {
            eprintln!("Backtrace: {}", e.backtrace());
        }
        std::process::exit(1);
    }
    if let args::Command::TitleCase(args::TitleCaseArgs { text: Some(_), .. }) = &arg.command {
        return;
    }
    eprintln!("{}", *COUNTER);
    if COUNTER.errors() > 0 {
        std::process::exit(1);
    }
}
