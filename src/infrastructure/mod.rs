//! Infrastructure layer - Configuration and file I/O

pub mod config;
pub mod source;

pub use config::{BatchSettings, Config, CONFIG_ENV, CONFIG_FILE_NAME};
pub use source::{collect_sources, output_path_for, read_input, write_output};
