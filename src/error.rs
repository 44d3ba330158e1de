//! Error types for lalp-tei

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lalp-tei
#[derive(Debug, Error)]
pub enum TeiError {
    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("No source files found in: {0}")]
    NoSourceFiles(PathBuf),

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl TeiError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TeiError::InputNotFound(_) => 2,
            TeiError::NoSourceFiles(_) => 3,
            TeiError::UnknownTag(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TeiError::InputNotFound(path) => {
                format!(
                    "Input not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path spelling\n\
                    • Omit the path (or pass '-') to read from stdin",
                    path.display()
                )
            }
            TeiError::NoSourceFiles(path) => {
                format!(
                    "No source files found in: {}\n\n\
                    Suggestions:\n\
                    • Source files are matched by extension (default: .txt)\n\
                    • Change [batch] source_extension in lalp-tei.toml\n\
                    • Hidden directories are skipped",
                    path.display()
                )
            }
            TeiError::UnknownTag(tag) => {
                format!(
                    "Unknown tag: '{}'\n\n\
                    Run 'lalp-tei fields --all' on any file to see every recognised tag.\n\
                    Examples: F, Q, U, T, G1, G2, CF, CO, ML",
                    tag
                )
            }
            TeiError::Config(msg) => {
                if msg.contains("already exists") {
                    format!(
                        "{}\n\n\
                        Edit the existing file or remove it before running 'lalp-tei init'",
                        msg
                    )
                } else if msg.contains("LALP_TEI_CONFIG") {
                    format!(
                        "{}\n\n\
                        Unset LALP_TEI_CONFIG or point it at an existing file",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TeiError
pub type Result<T> = std::result::Result<T, TeiError>;
