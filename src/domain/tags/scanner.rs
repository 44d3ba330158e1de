//! Tag extraction from coded letter text
//!
//! Contract:
//! - A marker is the literal `<NAME`, at least one whitespace character, then
//!   content up to the first `>` on the same line.
//! - Only the first marker with a given name is used.
//! - `NAME` must be followed by whitespace, so `<F` never matches `<FX ...>`.
//! - A marker without a closing `>` does not match.
//! - `G1`/`G2` split the content of the `<G ...>` marker on its first `/`.
//!   Without a slash, `G1` is the whole content and `G2` is empty.
//! - A missing marker is not an error; its value is the empty string.

use super::vocabulary::Tag;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One compiled pattern per physical marker name
fn marker_regexes() -> &'static HashMap<&'static str, Regex> {
    static REGEXES: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        Tag::ALL
            .iter()
            .map(|tag| tag.marker())
            .map(|marker| {
                let pattern = format!(r"<{}\s+(.*?)>", regex::escape(marker));
                (marker, Regex::new(&pattern).unwrap())
            })
            .collect()
    })
}

/// Read-only view over one source text
#[derive(Debug, Clone, Copy)]
pub struct TagScanner<'a> {
    source: &'a str,
}

impl<'a> TagScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        TagScanner { source }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Content of the first matching marker, or `""`
    pub fn extract(&self, tag: Tag) -> &'a str {
        let Some(content) = self.marker_content(tag.marker()) else {
            return "";
        };

        match tag {
            Tag::G1 => content.split_once('/').map_or(content, |(head, _)| head),
            Tag::G2 => content
                .split_once('/')
                .map_or("", |(_, tail)| tail.trim_start()),
            _ => content,
        }
    }

    /// Whether a marker for this tag occurs at all (content may still be empty)
    pub fn contains(&self, tag: Tag) -> bool {
        self.marker_content(tag.marker()).is_some()
    }

    /// Every tag in vocabulary order with its extracted value
    pub fn fields(&self) -> Vec<(Tag, &'a str)> {
        Tag::ALL.iter().map(|&tag| (tag, self.extract(tag))).collect()
    }

    fn marker_content(&self, marker: &str) -> Option<&'a str> {
        let regex = marker_regexes().get(marker)?;
        regex
            .captures(self.source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Extract one tag's value from `source` (empty string when absent)
pub fn extract(tag: Tag, source: &str) -> String {
    TagScanner::new(source).extract(tag).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_marker() {
        assert_eq!(extract(Tag::F, "<F 1234> rest"), "1234");
        assert_eq!(extract(Tag::Q, "<F 1><Q DRO Preston>"), "DRO Preston");
    }

    #[test]
    fn test_missing_tag_is_empty_for_every_tag() {
        let text = "no markers at all";
        for tag in Tag::ALL {
            assert_eq!(extract(tag, text), "", "tag {}", tag);
        }
    }

    #[test]
    fn test_first_occurrence_only() {
        assert_eq!(extract(Tag::D, "<D 1850 06 12> <D 1851 01 01>"), "1850 06 12");
    }

    #[test]
    fn test_tag_name_is_not_a_prefix_match() {
        assert_eq!(extract(Tag::F, "<FX nope>"), "");
        assert_eq!(extract(Tag::L, "<ML body>"), "");
        assert_eq!(extract(Tag::ST, "<STX a> <ST b>"), "b");
    }

    #[test]
    fn test_requires_whitespace_after_name() {
        assert_eq!(extract(Tag::F, "<F>"), "");
        assert_eq!(extract(Tag::F, "<F >"), "");
    }

    #[test]
    fn test_missing_close_does_not_match() {
        assert_eq!(extract(Tag::F, "<F never closed"), "");
    }

    #[test]
    fn test_content_does_not_span_lines() {
        assert_eq!(extract(Tag::F, "<F first\nsecond>"), "");
    }

    #[test]
    fn test_g_subfields() {
        assert_eq!(extract(Tag::G1, "<G A 1/L>"), "A 1");
        assert_eq!(extract(Tag::G2, "<G A 1/L>"), "L");
        assert_eq!(extract(Tag::G2, "<G N 2/ L H>"), "L H");
    }

    #[test]
    fn test_g_without_slash() {
        assert_eq!(extract(Tag::G1, "<G NC>"), "NC");
        assert_eq!(extract(Tag::G2, "<G NC>"), "");
    }

    #[test]
    fn test_g_slash_outside_marker_is_ignored() {
        let text = "<G A 1> and later a/b <F x>";
        assert_eq!(extract(Tag::G1, text), "A 1");
        assert_eq!(extract(Tag::G2, text), "");
    }

    #[test]
    fn test_contains() {
        let scanner = TagScanner::new("<F > <Q x>");
        assert!(scanner.contains(Tag::F));
        assert!(scanner.contains(Tag::Q));
        assert!(!scanner.contains(Tag::U));
    }

    #[test]
    fn test_fields_cover_vocabulary() {
        let scanner = TagScanner::new("<F 7> <CF application>");
        let fields = scanner.fields();
        assert_eq!(fields.len(), Tag::ALL.len());
        assert!(fields.contains(&(Tag::F, "7")));
        assert!(fields.contains(&(Tag::CF, "application")));
        assert!(fields.contains(&(Tag::U, "")));
    }
}
