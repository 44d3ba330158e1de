//! TEI document assembly
//!
//! The skeleton is fixed: every structural element is emitted for every
//! letter, with empty attributes or text where the source had no data.

use crate::domain::body::LetterBody;
use crate::domain::fields::Role;
use crate::domain::letter::Letter;
use crate::domain::tei::Element;
use serde::{Deserialize, Serialize};

pub const TEI_NAMESPACE: &str = "http://www.tei-c.org/ns/1.0";

/// Constant values written into every document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// `xml:id` of the root element
    pub document_id: String,
    /// `xml:lang` of the root, header and text
    pub language: String,
    /// Publication authority
    pub authority: String,
    /// `scheme` of every category reference
    pub category_scheme: String,
    /// `ref` of the author in `creation`
    pub author_ref: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        DocumentSettings {
            document_id: "TEI_ujl_fxt_s1c".to_string(),
            language: "en".to_string(),
            authority: "LALP".to_string(),
            category_scheme: "gen:LALP_letter_types".to_string(),
            author_ref: "psn:hand_1".to_string(),
        }
    }
}

fn role_attr(role: Option<Role>) -> &'static str {
    role.map_or("", |r| r.as_str())
}

/// Build the full TEI tree for one letter
pub fn assemble(letter: &Letter, settings: &DocumentSettings) -> Element {
    Element::new("TEI")
        .attr("xml:id", settings.document_id.as_str())
        .attr("xml:lang", settings.language.as_str())
        .attr("xmlns", TEI_NAMESPACE)
        .child(tei_header(letter, settings))
        .child(facsimile())
        .child(text(letter, settings))
}

fn tei_header(letter: &Letter, settings: &DocumentSettings) -> Element {
    Element::new("teiHeader")
        .attr("xml:lang", settings.language.as_str())
        .child(file_desc(letter, settings))
        .child(profile_desc(letter, settings))
        .child(Element::new("revisionDesc").child(Element::new("change")))
}

fn file_desc(letter: &Letter, settings: &DocumentSettings) -> Element {
    let mut notes_stmt = Element::new("notesStmt");
    for note in &letter.notes {
        notes_stmt.push(
            Element::new("note")
                .attr("type", note.source.as_str())
                .text(note.text.as_str()),
        );
    }

    Element::new("fileDesc")
        .child(Element::new("titleStmt").child(Element::new("title").attr("type", "main")))
        .child(
            Element::new("publicationStmt")
                .child(Element::new("authority").text(settings.authority.as_str()))
                .child(Element::new("idno").text(letter.identifier.as_str())),
        )
        .child(notes_stmt)
        .child(
            Element::new("sourceDesc").child(
                Element::new("msDesc").child(
                    Element::new("msIdentifier")
                        .child(Element::new("repository").attr("ref", letter.repository.as_str()))
                        .child(Element::new("idno").text(letter.shelfmark.as_str())),
                ),
            ),
        )
}

fn profile_desc(letter: &Letter, settings: &DocumentSettings) -> Element {
    let sent = Element::new("correspAction")
        .attr("type", "sent")
        .child(
            Element::new("persName")
                .attr("ref", "")
                .attr("role", role_attr(letter.sender_role)),
        )
        .child(Element::new("settlement").attr("ref", ""))
        .child(
            Element::new("date")
                .attr("when", letter.date.as_str())
                .attr("cert", "")
                .attr("evidence", ""),
        );

    let received = Element::new("correspAction")
        .attr("type", "received")
        .child(
            Element::new("persName")
                .attr("ref", "")
                .attr("role", role_attr(letter.recipient_role)),
        )
        .child(Element::new("settlement").attr("ref", ""));

    let mut text_class = Element::new("textClass");
    for category in &letter.categories {
        text_class.push(
            Element::new("catRef")
                .attr("scheme", settings.category_scheme.as_str())
                .attr("target", category.code),
        );
    }

    Element::new("profileDesc")
        .child(Element::new("correspDesc").child(sent).child(received))
        .child(
            Element::new("creation").child(
                Element::new("persName")
                    .attr("role", "author")
                    .attr("ref", settings.author_ref.as_str()),
            ),
        )
        .child(text_class)
        .child(
            Element::new("handNotes")
                .child(Element::new("handNote").attr("xml:id", "").attr("scope", "")),
        )
}

fn facsimile() -> Element {
    Element::new("facsimile").attr("xml:base", "").child(
        Element::new("graphic")
            .attr("xml:id", "")
            .attr("url", "")
            .attr("mimeType", ""),
    )
}

fn text(letter: &Letter, settings: &DocumentSettings) -> Element {
    let letter_div = Element::new("div")
        .attr("type", "letter")
        .attr("facs", "")
        .child(Element::new("pb").attr("facs", "").attr("break", "yes"))
        .child(
            Element::new("opener")
                .child(Element::new("dateline"))
                .child(Element::new("salute")),
        )
        .child(body_paragraph(&letter.body))
        .child(Element::new("closer").child(Element::new("signed")))
        .child(
            Element::new("postscript")
                .child(Element::new("p").child(Element::new("lb")))
                .child(Element::new("signed")),
        );

    Element::new("text")
        .attr("xml:lang", settings.language.as_str())
        .child(
            Element::new("body")
                .child(Element::new("div").attr("type", "address"))
                .child(letter_div),
        )
}

/// First line as leading text, then `<lb break="yes"/>` + text for every
/// further line
pub fn body_paragraph(body: &LetterBody) -> Element {
    let mut paragraph = Element::new("p");
    if let Some(first) = body.first_line() {
        paragraph.push_text(first);
    }
    for line in body.continuation_lines() {
        paragraph.push(line_break());
        paragraph.push_text(line.as_str());
    }
    paragraph
}

fn line_break() -> Element {
    Element::new("lb").attr("break", "yes")
}
