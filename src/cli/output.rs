//! Output formatting utilities

use crate::application::{BatchReport, FieldEntry};

/// Format extracted fields as `NAME = value` lines.
///
/// Reserved tags are marked; absent tags show `(absent)`.
pub fn format_field_list(entries: &[FieldEntry]) -> String {
    if entries.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let value = if entry.present {
            format!("{:?}", entry.value)
        } else {
            "(absent)".to_string()
        };
        let reserved = if entry.tag.feeds_document() {
            ""
        } else {
            "  [reserved]"
        };
        output.push_str(&format!("{:<3}= {}{}\n", entry.tag.as_str(), value, reserved));
    }
    output
}

/// Format a batch report: one line per file plus a summary
pub fn format_batch_report(report: &BatchReport) -> String {
    let mut output = String::new();
    for file in &report.converted {
        output.push_str(&format!(
            "{} -> {}\n",
            file.source.display(),
            file.output.display()
        ));
    }
    let noun = if report.converted.len() == 1 {
        "file"
    } else {
        "files"
    };
    output.push_str(&format!("Converted {} {}\n", report.converted.len(), noun));
    output
}
