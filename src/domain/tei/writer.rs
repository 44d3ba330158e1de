//! Deterministic XML serialization with quick-xml

use super::{Element, Node};
use crate::error::Result;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;

const INDENT_WIDTH: usize = 2;

/// Stands in for characters XML 1.0 cannot carry
const REPLACEMENT: char = '\u{FFFD}';

/// Serialize `root` as an indented UTF-8 document with an XML declaration.
///
/// Elements without children are self-closed. Elements holding text are
/// written on one line so their text is never padded by indentation.
pub fn to_xml_string(root: &Element) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        let value = xml_safe(value);
        start.push_attribute((key.as_str(), value.as_ref()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    let mixed = element
        .children
        .iter()
        .any(|node| matches!(node, Node::Text(_)));

    writer.write_event(Event::Start(start))?;
    for node in &element.children {
        match node {
            Node::Element(child) => {
                if mixed {
                    // an empty text event keeps the next tag on the same line
                    write_text(writer, "")?;
                }
                write_element(writer, child)?;
            }
            Node::Text(text) => write_text(writer, text)?,
        }
    }
    if mixed {
        write_text(writer, "")?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn write_text(writer: &mut Writer<Vec<u8>>, text: &str) -> Result<()> {
    let text = xml_safe(text);
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(&text))))?;
    Ok(())
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Replace characters outside the XML 1.0 `Char` production
fn xml_safe(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_xml_char(c) { c } else { REPLACEMENT })
            .collect(),
    )
}
