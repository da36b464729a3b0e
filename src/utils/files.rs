use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;

/// Finds files with extension `ext` (case insensitive) in `path`.
pub fn find_files(path: &str, recursive: bool, ext: &str) -> io::Result<Vec<String>> {
    let mut result = Vec::new();
    let dir_path = Path::new(&path);
    let suffix = format!(".{}", ext.to_lowercase());

    if dir_path.is_dir() {
        for entry in fs::read_dir(dir_path)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file()
                && path.file_name().map_or(false, |file| {
                    file.to_string_lossy().to_lowercase().ends_with(&suffix)
                })
            {
                if let Some(path_str) = path.to_str() {
                    result.push(path_str.to_string());
                }
            } else if recursive && path.is_dir() {
                if let Some(path_str) = path.to_str() {
                    let mut sub_files = find_files(path_str, recursive, ext)?;
                    result.append(&mut sub_files);
                }
            }
        }
    }
    result.sort();

    Ok(result)
}

/// Collects files from a path. A directory is searched for files with
/// extension `ext`, a file is returned as is.
///
/// Returns the files and whether `path` was a directory.
pub fn collect_files(path: &str, recursive: bool, ext: &str) -> io::Result<(Vec<String>, bool)> {
    let pa = Path::new(path);
    if pa.is_dir() {
        return Ok((find_files(path, recursive, ext)?, true));
    }
    if pa.is_file() {
        return Ok((vec![path.to_string()], false));
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("Path {} is neither a file nor a directory", pa.display()),
    ))
}

pub fn read_file<F: AsRef<Path> + ?Sized>(f: &F) -> io::Result<Vec<u8>> {
    fs::read(f)
}

pub fn write_file<F: AsRef<Path> + ?Sized>(f: &F) -> io::Result<io::BufWriter<fs::File>> {
    Ok(io::BufWriter::new(fs::File::create(f)?))
}

/// Reads a UTF-8 text file.
pub fn read_text<F: AsRef<Path> + ?Sized>(f: &F) -> anyhow::Result<String> {
    let data = read_file(f)?;
    String::from_utf8(data)
        .map_err(|e| anyhow::anyhow!("{} is not valid UTF-8: {}", f.as_ref().display(), e))
}

/// Overwrites a text file with `content`.
pub fn write_text<F: AsRef<Path> + ?Sized>(f: &F, content: &str) -> io::Result<()> {
    let mut file = write_file(f)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

pub fn make_sure_dir_exists<F: AsRef<Path> + ?Sized>(f: &F) -> io::Result<()> {
    let path = f.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_files_filters_extension() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(dir.path().join("b.dart"), "b").unwrap();
        fs::write(dir.path().join("a.DART"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(sub.join("c.dart"), "c").unwrap();

        let root = dir.path().to_str().unwrap();
        let flat = find_files(root, false, "dart").unwrap();
        assert_eq!(flat.len(), 2);
        assert!(flat.iter().all(|f| f.to_lowercase().ends_with(".dart")));

        let deep = find_files(root, true, "dart").unwrap();
        assert_eq!(deep.len(), 3);
    }

    #[test]
    fn test_collect_files_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = collect_files(missing.to_str().unwrap(), false, "dart").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_text_roundtrip_and_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("a.dart");
        make_sure_dir_exists(&path).unwrap();
        write_text(&path, "Text('こんにちは')").unwrap();
        assert_eq!(read_text(&path).unwrap(), "Text('こんにちは')");

        let bad = dir.path().join("bad.dart");
        fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();
        assert!(read_text(&bad).is_err());
    }
}
