//! Everything the document needs from one coded letter

use crate::domain::body::LetterBody;
use crate::domain::classify::{classify_letter, CategoryRef};
use crate::domain::fields::{format_date, infer_role, note_text, Role};
use crate::domain::tags::{Tag, TagScanner};

/// A note carried over from a note-bearing tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub source: Tag,
    pub text: String,
}

/// Tags whose values become notes, in emission order
pub const NOTE_TAGS: [Tag; 2] = [Tag::MF, Tag::MI];

/// Extracted and derived values for one letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Letter {
    /// `F`: publication identifier
    pub identifier: String,
    /// `Q`: holding repository reference
    pub repository: String,
    /// `U`: manuscript identifier
    pub shelfmark: String,
    /// `D`, hyphenated
    pub date: String,
    pub sender_role: Option<Role>,
    pub recipient_role: Option<Role>,
    pub notes: Vec<Note>,
    pub categories: Vec<CategoryRef>,
    pub body: LetterBody,
}

impl Letter {
    pub fn from_source(source: &str) -> Self {
        let scanner = TagScanner::new(source);

        let notes = NOTE_TAGS
            .iter()
            .filter_map(|&tag| {
                note_text(scanner.extract(tag)).map(|text| Note {
                    source: tag,
                    text: text.to_string(),
                })
            })
            .collect();

        Letter {
            identifier: scanner.extract(Tag::F).to_string(),
            repository: scanner.extract(Tag::Q).to_string(),
            shelfmark: scanner.extract(Tag::U).to_string(),
            date: format_date(scanner.extract(Tag::D)),
            sender_role: infer_role(scanner.extract(Tag::ST)),
            recipient_role: infer_role(scanner.extract(Tag::RT)),
            notes,
            categories: classify_letter(&scanner),
            body: LetterBody::from_source(source),
        }
    }

    pub fn category_codes(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "<F 2013.12> <Q DDX 1> <U 5/7> <D 1834  02 11> \
<ST Applicant (widow)> <RT Overseer, official> <T 1a> <G A 1/L H> \
<CF Application> <CO relief: money> <MF X> <MI written on reverse>
<ML 1>Gentlemen
I am in want";

    #[test]
    fn test_from_source_fields() {
        let letter = Letter::from_source(SAMPLE);
        assert_eq!(letter.identifier, "2013.12");
        assert_eq!(letter.repository, "DDX 1");
        assert_eq!(letter.shelfmark, "5/7");
        assert_eq!(letter.date, "1834-02-11");
        assert_eq!(letter.sender_role, Some(Role::Applicant));
        assert_eq!(letter.recipient_role, Some(Role::Official));
    }

    #[test]
    fn test_from_source_notes_skip_sentinel() {
        let letter = Letter::from_source(SAMPLE);
        assert_eq!(
            letter.notes,
            vec![Note {
                source: Tag::MI,
                text: "written on reverse".to_string()
            }]
        );
    }

    #[test]
    fn test_from_source_categories() {
        let letter = Letter::from_source(SAMPLE);
        assert_eq!(
            letter.category_codes(),
            vec![
                "gen:OFFICIAL",
                "gen:AUTHENTICITY_A1",
                "gen:WRITING_SKILL_L",
                "gen:WRITING_SKILL_H",
                "gen:CF_APPLICATION",
                "gen:CO_RELIEF_MONEY",
            ]
        );
    }

    #[test]
    fn test_from_source_body() {
        let letter = Letter::from_source(SAMPLE);
        assert_eq!(letter.body.first_line(), Some("Gentlemen"));
        assert_eq!(letter.body.line_count(), 2);
    }

    #[test]
    fn test_empty_source() {
        let letter = Letter::from_source("");
        assert_eq!(letter, Letter::default());
    }
}
