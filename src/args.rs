use clap::{ArgAction, Args, Parser, Subcommand};
use ui_text_tool::targets::ONBOARDING_DIR;
use ui_text_tool::types::*;

/// Tools for batch editing the app's UI sources and screenshots
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Arg {
    #[arg(short = 'n', long, action = ArgAction::SetTrue, global = true)]
    /// Report what would change without writing any file
    pub dry_run: bool,
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    /// Abort when mapping tables bind a key to different replacements
    pub strict: bool,
    #[arg(global = true, action = ArgAction::SetTrue, short, long)]
    /// Print backtrace on error
    pub backtrace: bool,
    #[command(subcommand)]
    /// Command
    pub command: Command,
}

#[derive(Subcommand, Debug)]
/// Commands
pub enum Command {
    /// Escape unescaped single quotes inside single-quoted literals
    FixQuotes {
        /// Directory (or single file) to process
        #[arg(default_value = ONBOARDING_DIR)]
        input: String,
        #[arg(short, long, action = ArgAction::SetTrue)]
        /// Search for source files in the directory recursively
        recursive: bool,
    },
    #[cfg(feature = "image")]
    /// Resize screenshots to a fixed resolution
    Resize(ResizeArgs),
    /// Apply the title case dictionary and add letterSpacing to large fonts
    TitleCase(TitleCaseArgs),
    /// Replace Japanese string literals with English ones
    Translate {
        #[command(flatten)]
        tables: TableArgs,
        /// Files to translate (defaults to the built-in list)
        files: Vec<String>,
    },
    /// Report keys bound to different replacements
    CheckTables {
        #[command(flatten)]
        tables: TableArgs,
    },
}

#[derive(Args, Debug)]
pub struct TableArgs {
    #[arg(short = 't', long, value_enum)]
    /// Built-in translation table
    pub table: Option<TableKind>,
    #[arg(long = "table-file", value_name = "PATH")]
    /// Extra mapping table (csv with source,target columns, json or yaml)
    pub table_files: Vec<String>,
}

#[derive(Args, Debug)]
pub struct TitleCaseArgs {
    #[arg(long, conflicts_with = "files")]
    /// Print the title case form of TEXT instead of editing files
    pub text: Option<String>,
    #[arg(long, action = ArgAction::SetTrue)]
    /// Do not insert letterSpacing
    pub no_spacing: bool,
    /// Files to edit (defaults to the built-in list)
    pub files: Vec<String>,
}

#[cfg(feature = "image")]
#[derive(Args, Debug)]
pub struct ResizeArgs {
    #[arg(short, long)]
    /// Folder holding the screenshots (defaults to ~/Desktop)
    pub input: Option<String>,
    #[arg(short, long)]
    /// Output folder (defaults to <input>/resized_screenshots)
    pub output: Option<String>,
    #[arg(short = 'W', long)]
    /// Output width in pixels
    pub width: Option<u32>,
    #[arg(short = 'H', long)]
    /// Output height in pixels
    pub height: Option<u32>,
    #[arg(long, value_enum, default_value_t = ResizeFilter::Lanczos3)]
    /// Resampling filter
    pub filter: ResizeFilter,
    /// Screenshot file names inside the input folder (defaults to the built-in list)
    pub files: Vec<String>,
}

pub fn parse_args() -> Arg {
    Arg::parse()
}

#[test]
fn test_parse_defaults() {
    let arg = Arg::try_parse_from(["ui_text_tool", "fix-quotes"]).unwrap();
    match arg.command {
        Command::FixQuotes { input, recursive } => {
            assert_eq!(input, ONBOARDING_DIR);
            assert!(!recursive);
        }
        _ => panic!("unexpected command"),
    }

    let arg = Arg::try_parse_from([
        "ui_text_tool",
        "translate",
        "-t",
        "legacy",
        "--table-file",
        "extra.csv",
        "-n",
        "lib/a.dart",
    ])
    .unwrap();
    assert!(arg.dry_run);
    match arg.command {
        Command::Translate { tables, files } => {
            assert_eq!(tables.table, Some(TableKind::Legacy));
            assert_eq!(tables.table_files, vec!["extra.csv".to_string()]);
            assert_eq!(files, vec!["lib/a.dart".to_string()]);
        }
        _ => panic!("unexpected command"),
    }

    assert!(
        Arg::try_parse_from(["ui_text_tool", "title-case", "--text", "x", "a.dart"]).is_err()
    );
}
