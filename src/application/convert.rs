//! Single letter conversion use case

use crate::domain::tei::to_xml_string;
use crate::domain::{assemble, DocumentSettings, Letter};
use crate::error::Result;
use crate::infrastructure::{read_input, write_output};
use std::path::Path;

/// Converts coded letter text into a TEI document.
///
/// Holds only read-only settings, so one service can serve any number of
/// conversions; every call builds its own tree.
#[derive(Debug, Clone, Default)]
pub struct ConvertService {
    settings: DocumentSettings,
}

impl ConvertService {
    pub fn new(settings: DocumentSettings) -> Self {
        ConvertService { settings }
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    /// Convert one source string to an XML document string
    pub fn convert(&self, source: &str) -> Result<String> {
        let letter = Letter::from_source(source);
        tracing::debug!(
            identifier = %letter.identifier,
            categories = letter.categories.len(),
            notes = letter.notes.len(),
            body_lines = letter.body.line_count(),
            "extracted letter"
        );
        if letter.body.is_empty() {
            tracing::debug!("empty letter body, emitting empty paragraph");
        }

        let document = assemble(&letter, &self.settings);
        to_xml_string(&document)
    }

    /// Read from `input` (stdin when `None`), write to `output` (stdout when `None`)
    pub fn convert_file(&self, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
        let source = read_input(input)?;
        let xml = self.convert(&source)?;
        write_output(output, &xml)?;
        if let Some(path) = output {
            tracing::info!("wrote {}", path.display());
        }
        Ok(())
    }
}

/// Convert with default document settings
pub fn convert(source: &str) -> Result<String> {
    ConvertService::default().convert(source)
}
