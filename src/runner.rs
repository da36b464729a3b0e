//! Per-file driver shared by every text command.
use crate::passes::{TextPass, apply_all};
use crate::types::*;
use crate::utils::files::{read_text, write_text};
use anyhow::Result;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set by the Ctrl-C handler; checked before each file.
pub static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// How many changes are listed per file.
const MAX_LISTED_CHANGES: usize = 10;

/// Options shared by every command.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunConfig {
    /// Report changes without writing
    pub dry_run: bool,
    /// Print backtrace on error
    pub backtrace: bool,
}

#[derive(Debug)]
pub struct FileReport {
    pub result: ScriptResult,
    pub changes: Vec<String>,
}

/// Runs `passes` over one file and overwrites it if the content changed.
pub fn process_file(
    path: &str,
    passes: &[Box<dyn TextPass>],
    cfg: &RunConfig,
) -> Result<FileReport> {
    let content = read_text(path)?;
    let output = apply_all(&content, passes)?;
    if output.content == content {
        return Ok(FileReport {
            result: ScriptResult::Ignored,
            changes: Vec::new(),
        });
    }
    if !cfg.dry_run {
        write_text(path, &output.content)?;
    }
    Ok(FileReport {
        result: ScriptResult::Ok,
        changes: output.changes,
    })
}

fn print_report(path: &str, report: &FileReport, cfg: &RunConfig) {
    match report.result {
        ScriptResult::Ok => {
            if cfg.dry_run {
                eprintln!("Would update {}", path);
            } else {
                eprintln!("Updated {}", path);
            }
            for change in report.changes.iter().take(MAX_LISTED_CHANGES) {
                eprintln!("  {}", change);
            }
            if report.changes.len() > MAX_LISTED_CHANGES {
                eprintln!(
                    "  ... and {} more",
                    report.changes.len() - MAX_LISTED_CHANGES
                );
            }
        }
        ScriptResult::Ignored => log::debug!("Unchanged {}", path),
    }
}

/// Processes `files` one after another. Missing files and errors are
/// reported and skipped.
///
/// Returns the number of updated files.
pub fn run_files(files: &[String], passes: &[Box<dyn TextPass>], cfg: &RunConfig) -> usize {
    let mut updated = 0;
    for file in files {
        if INTERRUPTED.load(Ordering::SeqCst) {
            eprintln!("Interrupted, remaining files skipped");
            break;
        }
        if !Path::new(file).is_file() {
            eprintln!("File not found: {}", file);
            crate::COUNTER.warning();
            continue;
        }
        log::debug!("Processing {}", file);
        match process_file(file, passes, cfg) {
            Ok(report) => {
                print_report(file, &report, cfg);
                if report.result == ScriptResult::Ok {
                    updated += 1;
                }
                crate::COUNTER.record(report.result);
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", file, e);
                if cfg.backtrace {
                    eprintln!("Backtrace: {}", e.backtrace());
                }
                crate::COUNTER.error();
            }
        }
    }
    updated
}

/// Resizes `files` from `input_dir` into `output_dir` as `screenshot_<n>.png`,
/// `n` being the 1-based position in `files`. Missing files are skipped.
///
/// Returns the number of written images.
#[cfg(feature = "image")]
pub fn run_resize(
    input_dir: &Path,
    output_dir: &Path,
    files: &[String],
    size: TargetSize,
    filter: ResizeFilter,
    cfg: &RunConfig,
) -> Result<usize> {
    if output_dir.exists() {
        if !output_dir.is_dir() {
            return Err(anyhow::anyhow!(
                "Output path {} is not a directory",
                output_dir.display()
            ));
        }
    } else if !cfg.dry_run {
        std::fs::create_dir_all(output_dir)?;
    }
    let mut written = 0;
    for (i, name) in files.iter().enumerate() {
        if INTERRUPTED.load(Ordering::SeqCst) {
            eprintln!("Interrupted, remaining files skipped");
            break;
        }
        let input = input_dir.join(name);
        if !input.is_file() {
            eprintln!("File not found: {}", input.display());
            crate::COUNTER.warning();
            continue;
        }
        let out_name = crate::targets::screenshot_output_name(i);
        if cfg.dry_run {
            eprintln!("Would resize {} → {} ({})", name, out_name, size);
            crate::COUNTER.record(ScriptResult::Ok);
            written += 1;
            continue;
        }
        match crate::utils::img::resize_image(&input, &output_dir.join(&out_name), size, filter)
        {
            Ok(_) => {
                eprintln!("{} → {} ({})", name, out_name, size);
                crate::COUNTER.record(ScriptResult::Ok);
                written += 1;
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", input.display(), e);
                if cfg.backtrace {
                    eprintln!("Backtrace: {}", e.backtrace());
                }
                crate::COUNTER.error();
            }
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::*;
    use crate::tables::translation_table;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn translate_passes() -> Vec<Box<dyn TextPass>> {
        vec![Box::new(TranslatePass::new(translation_table(
            TableKind::Primary,
        )))]
    }

    #[test]
    fn test_rewrites_only_changed_files() {
        let dir = tempfile::tempdir().unwrap();
        let changed = dir.path().join("completion_dialog.dart");
        let untouched = dir.path().join("other.dart");
        fs::write(&changed, "Text('このタスクはできましたか？'),\n").unwrap();
        let original: &[u8] = b"Text('Hello'),\r\n// \xe6\x97\xa5\n";
        fs::write(&untouched, original).unwrap();

        let files = vec![
            changed.to_string_lossy().into_owned(),
            untouched.to_string_lossy().into_owned(),
            dir.path().join("missing.dart").to_string_lossy().into_owned(),
        ];
        let updated = run_files(&files, &translate_passes(), &RunConfig::default());
        assert_eq!(updated, 1);
        assert_eq!(
            fs::read_to_string(&changed).unwrap(),
            "Text('Did you complete this task?'),\n"
        );
        assert_eq!(fs::read(&untouched).unwrap(), original);
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.dart");
        fs::write(&path, "Text('できた！')").unwrap();
        let cfg = RunConfig {
            dry_run: true,
            backtrace: false,
        };
        let report = process_file(path.to_str().unwrap(), &translate_passes(), &cfg).unwrap();
        assert_eq!(report.result, ScriptResult::Ok);
        assert_eq!(report.changes, vec!["'できた！' → 'Done!'".to_string()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Text('できた！')");
    }

    #[test]
    fn test_errors_do_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.dart");
        let good = dir.path().join("good.dart");
        fs::write(&bad, [0xffu8, 0xfe]).unwrap();
        fs::write(&good, "Text(\"できなかった\")").unwrap();
        let files = vec![
            bad.to_string_lossy().into_owned(),
            good.to_string_lossy().into_owned(),
        ];
        let updated = run_files(&files, &translate_passes(), &RunConfig::default());
        assert_eq!(updated, 1);
        assert_eq!(fs::read_to_string(&good).unwrap(), "Text(\"Not Done\")");
        assert_eq!(fs::read(&bad).unwrap(), vec![0xffu8, 0xfe]);
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_run_resize_numbers_outputs_by_position() {
        use image::{GenericImageView, ImageBuffer, Rgba};

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("resized");
        ImageBuffer::from_pixel(30, 60, Rgba([1u8, 2, 3, 255]))
            .save(dir.path().join("first.png"))
            .unwrap();
        ImageBuffer::from_pixel(60, 30, Rgba([4u8, 5, 6, 255]))
            .save(dir.path().join("third.png"))
            .unwrap();
        let files = vec![
            "first.png".to_string(),
            "second.png".to_string(),
            "third.png".to_string(),
        ];
        let size = TargetSize {
            width: 12,
            height: 26,
        };
        let written = run_resize(
            dir.path(),
            &output,
            &files,
            size,
            ResizeFilter::Lanczos3,
            &RunConfig::default(),
        )
        .unwrap();
        assert_eq!(written, 2);
        assert!(!output.join("screenshot_2.png").exists());
        for name in ["screenshot_1.png", "screenshot_3.png"] {
            let img = image::open(output.join(name)).unwrap();
            assert_eq!(img.dimensions(), (12, 26));
        }
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_run_resize_rejects_file_as_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("file");
        fs::write(&output, "x").unwrap();
        let size = TargetSize {
            width: 1,
            height: 1,
        };
        assert!(
            run_resize(
                dir.path(),
                &output,
                &[],
                size,
                ResizeFilter::Nearest,
                &RunConfig::default()
            )
            .is_err()
        );
    }
}
