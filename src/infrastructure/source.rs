//! Reading coded letters and writing documents

use crate::error::{Result, TeiError};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Path meaning "standard input/output"
pub const STDIO_PATH: &str = "-";

fn is_stdio(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == STDIO_PATH)
}

/// Read a source file, or stdin when `path` is `None` or `-`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if !is_stdio(Some(path)) => {
            if !path.is_file() {
                return Err(TeiError::InputNotFound(path.to_path_buf()));
            }
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write a document to a file, or stdout when `path` is `None` or `-`
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) if !is_stdio(Some(path)) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, content)?;
            Ok(())
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// All files under `root` with `extension` (case-insensitive), sorted.
///
/// Hidden directories are not descended into.
pub fn collect_sources(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(TeiError::InputNotFound(root.to_path_buf()));
    }

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        if !entry.file_type().is_dir() {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .is_none_or(|name| !name.starts_with('.'))
    });

    let mut sources = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            sources.push(entry.into_path());
        }
    }

    sources.sort();
    Ok(sources)
}

/// Where the document for `source` goes.
///
/// Next to the source by default; with `out_dir`, mirrored under it relative
/// to `root`.
pub fn output_path_for(
    source: &Path,
    root: &Path,
    out_dir: Option<&Path>,
    extension: &str,
) -> PathBuf {
    let target = match out_dir {
        Some(out_dir) => {
            let relative = source.strip_prefix(root).unwrap_or(source);
            out_dir.join(relative)
        }
        None => source.to_path_buf(),
    };
    target.with_extension(extension)
}
