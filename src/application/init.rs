//! Write a default configuration file

use crate::error::{Result, TeiError};
use crate::infrastructure::{Config, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};

/// Create `lalp-tei.toml` with default values in `dir`.
///
/// Returns the path of the new file. Fails if one already exists.
pub fn init(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(TeiError::Config(format!(
            "Config file already exists: {}",
            path.display()
        )));
    }

    Config::default().save_to_path(&path)?;
    tracing::info!("created {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = init(&temp.path().join("project")).unwrap();

        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("[document]"));
        assert!(content.contains("authority = \"LALP\""));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();

        let err = init(temp.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
