//! Directory batch conversion use case

use crate::application::convert::ConvertService;
use crate::error::{Result, TeiError};
use crate::infrastructure::{collect_sources, output_path_for, read_input, write_output, Config};
use std::path::{Path, PathBuf};

/// Options for a batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory searched recursively for source files
    pub root: PathBuf,

    /// Mirror outputs under this directory instead of next to each source
    pub out_dir: Option<PathBuf>,
}

/// One converted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
}

/// Service for converting every source file under a directory
pub struct BatchService {
    config: Config,
}

impl BatchService {
    pub fn new(config: Config) -> Self {
        BatchService { config }
    }

    /// Execute the batch
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root directory does not exist
    /// - No file with the source extension is found
    /// - Reading or writing a file fails
    pub fn execute(&self, options: &BatchOptions) -> Result<BatchReport> {
        let batch = &self.config.batch;
        let sources = collect_sources(&options.root, &batch.source_extension)?;
        if sources.is_empty() {
            return Err(TeiError::NoSourceFiles(options.root.clone()));
        }

        let service = ConvertService::new(self.config.document.clone());
        let mut report = BatchReport::default();

        for source in sources {
            let output = output_path_for(
                &source,
                &options.root,
                options.out_dir.as_deref(),
                &batch.output_extension,
            );
            convert_one(&service, &source, &output)?;
            tracing::info!("converted {} -> {}", source.display(), output.display());
            report.converted.push(ConvertedFile { source, output });
        }

        Ok(report)
    }
}

fn convert_one(service: &ConvertService, source: &Path, output: &Path) -> Result<()> {
    let text = read_input(Some(source))?;
    let xml = service.convert(&text)?;
    write_output(Some(output), &xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_batch_next_to_sources() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("one.txt"), "<F 1>").unwrap();
        fs::create_dir(temp.path().join("box")).unwrap();
        fs::write(temp.path().join("box").join("two.txt"), "<F 2>").unwrap();

        let report = BatchService::new(Config::default())
            .execute(&BatchOptions {
                root: temp.path().to_path_buf(),
                out_dir: None,
            })
            .unwrap();

        assert_eq!(report.converted.len(), 2);
        let two = fs::read_to_string(temp.path().join("box").join("two.xml")).unwrap();
        assert!(two.contains("<idno>2</idno>"));
        assert!(temp.path().join("one.xml").exists());
    }

    #[test]
    fn test_batch_mirrors_into_out_dir() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let out = temp.path().join("out");
        fs::create_dir_all(src.join("box")).unwrap();
        fs::write(src.join("box").join("a.txt"), "<F a>").unwrap();

        let report = BatchService::new(Config::default())
            .execute(&BatchOptions {
                root: src.clone(),
                out_dir: Some(out.clone()),
            })
            .unwrap();

        assert_eq!(
            report.converted,
            vec![ConvertedFile {
                source: src.join("box").join("a.txt"),
                output: out.join("box").join("a.xml"),
            }]
        );
        assert!(out.join("box").join("a.xml").exists());
    }

    #[test]
    fn test_batch_custom_extensions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.letter"), "<F 5>").unwrap();
        fs::write(temp.path().join("b.txt"), "<F 6>").unwrap();

        let mut config = Config::default();
        config.batch.source_extension = "letter".to_string();
        config.batch.output_extension = "tei".to_string();

        let report = BatchService::new(config)
            .execute(&BatchOptions {
                root: temp.path().to_path_buf(),
                out_dir: None,
            })
            .unwrap();

        assert_eq!(report.converted.len(), 1);
        assert!(temp.path().join("a.tei").exists());
        assert!(!temp.path().join("b.tei").exists());
    }

    #[test]
    fn test_batch_no_sources() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("readme.md"), "").unwrap();

        let result = BatchService::new(Config::default()).execute(&BatchOptions {
            root: temp.path().to_path_buf(),
            out_dir: None,
        });
        assert!(matches!(result, Err(TeiError::NoSourceFiles(_))));
    }
}
