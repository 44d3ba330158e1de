//! Field inspection use case
//!
//! Reports what the scanner extracts for each recognised tag, including the
//! reserved tags that do not feed the document.

use crate::domain::tags::{Tag, TagScanner};
use crate::error::{Result, TeiError};
use std::str::FromStr;

/// One tag's extraction result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub tag: Tag,
    pub value: String,
    /// A marker for the tag occurs, even if its content is empty
    pub present: bool,
}

pub struct FieldsService;

impl FieldsService {
    /// Fields in vocabulary order; only present ones unless `include_all`
    pub fn list(source: &str, include_all: bool) -> Vec<FieldEntry> {
        let scanner = TagScanner::new(source);
        Tag::ALL
            .iter()
            .map(|&tag| FieldEntry {
                tag,
                value: scanner.extract(tag).to_string(),
                present: scanner.contains(tag),
            })
            .filter(|entry| include_all || entry.present)
            .collect()
    }

    /// Value of a tag given by name
    pub fn value(source: &str, tag_name: &str) -> Result<String> {
        let tag = Tag::from_str(tag_name).map_err(|_| TeiError::UnknownTag(tag_name.to_string()))?;
        Ok(TagScanner::new(source).extract(tag).to_string())
    }
}
