//! Field formatters for single extracted values

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Sentinel the source format uses for "not applicable"
pub const NOT_APPLICABLE: &str = "X";

/// Turn a `yyyy mm dd` date into `yyyy-mm-dd`.
///
/// Each whitespace run becomes one hyphen after trimming the ends. Tokens are
/// not validated, so `"c 1830"` becomes `"c-1830"`.
pub fn format_date(raw: &str) -> String {
    whitespace_regex().replace_all(raw.trim(), "-").into_owned()
}

/// Correspondent role inferred from free text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Applicant,
    Other,
    Official,
}

impl Role {
    /// Keyword lookup order; the first keyword found wins
    pub const PRIORITY: [Role; 3] = [Role::Applicant, Role::Other, Role::Official];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Applicant => "applicant",
            Role::Other => "other",
            Role::Official => "official",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer a role by case-insensitive keyword containment.
pub fn infer_role(text: &str) -> Option<Role> {
    let lowered = text.to_lowercase();
    Role::PRIORITY
        .into_iter()
        .find(|role| lowered.contains(role.as_str()))
}

/// Value to emit as a note, if any.
///
/// Empty values and the `X` sentinel produce no note.
pub fn note_text(value: &str) -> Option<&str> {
    if value.is_empty() || value == NOT_APPLICABLE {
        None
    } else {
        Some(value)
    }
}
