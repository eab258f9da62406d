//! Paragraph-level reading and rewriting of `word/document.xml`

use crate::document::{ContainerLocation, TextContainer};
use crate::error::TemplateError;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

const PARAGRAPH: &[u8] = b"w:p";
const RUN: &[u8] = b"w:r";
const TEXT: &[u8] = b"w:t";
const TAB: &[u8] = b"w:tab";
const BREAK: &[u8] = b"w:br";
const CARRIAGE_RETURN: &[u8] = b"w:cr";
const TABLE_CELL: &[u8] = b"w:tc";

fn xml_error(e: impl std::fmt::Display) -> TemplateError {
    TemplateError::Xml(e.to_string())
}

/// Character a run-level element stands for in paragraph text
///
/// Page and column breaks are layout, not text.
fn separator(element: &BytesStart<'_>) -> Option<char> {
    match element.name().as_ref() {
        TAB => Some('\t'),
        CARRIAGE_RETURN => Some('\n'),
        BREAK => {
            let layout_break = element
                .attributes()
                .flatten()
                .any(|attr| attr.key.as_ref() == b"w:type" && attr.value.as_ref() != b"textWrapping");
            (!layout_break).then_some('\n')
        }
        _ => None,
    }
}

enum Part<'a> {
    Event(Event<'a>),
    /// A paragraph inside this one, e.g. in a text box
    Nested(Paragraph<'a>),
}

struct Paragraph<'a> {
    parts: Vec<Part<'a>>,
    in_cell: bool,
}

impl<'a> Paragraph<'a> {
    fn own_events(&self) -> impl Iterator<Item = &Event<'a>> {
        self.parts.iter().filter_map(|part| match part {
            Part::Event(event) => Some(event),
            Part::Nested(_) => None,
        })
    }

    /// Text of this paragraph's runs in order, tabs and line breaks included
    fn text(&self) -> Result<String, TemplateError> {
        let mut text = String::new();
        let mut in_text = false;
        let mut in_run = false;

        for event in self.own_events() {
            match event {
                Event::Start(e) if e.name().as_ref() == RUN => in_run = true,
                Event::End(e) if e.name().as_ref() == RUN => in_run = false,
                Event::Start(e) if e.name().as_ref() == TEXT => in_text = true,
                Event::End(e) if e.name().as_ref() == TEXT => in_text = false,
                Event::Text(t) if in_text => text.push_str(&t.unescape().map_err(xml_error)?),
                Event::Empty(e) if in_run => text.extend(separator(e)),
                _ => {}
            }
        }

        Ok(text)
    }

    fn has_text_element(&self) -> bool {
        self.own_events().any(|event| match event {
            Event::Start(e) | Event::Empty(e) => e.name().as_ref() == TEXT,
            _ => false,
        })
    }

    fn collect_containers(&self, out: &mut Vec<TextContainer>) -> Result<(), TemplateError> {
        let location = if self.in_cell {
            ContainerLocation::TableCell
        } else {
            ContainerLocation::Body
        };
        out.push(TextContainer {
            location,
            text: self.text()?,
        });

        for part in &self.parts {
            if let Part::Nested(inner) = part {
                inner.collect_containers(out)?;
            }
        }
        Ok(())
    }
}

enum Segment<'a> {
    Event(Event<'a>),
    Paragraph(Paragraph<'a>),
}

enum Tag {
    ParagraphStart,
    ParagraphEnd,
    CellStart,
    CellEnd,
    Other,
}

fn classify(event: &Event<'_>) -> Tag {
    match event {
        Event::Start(e) if e.name().as_ref() == PARAGRAPH => Tag::ParagraphStart,
        Event::End(e) if e.name().as_ref() == PARAGRAPH => Tag::ParagraphEnd,
        Event::Start(e) if e.name().as_ref() == TABLE_CELL => Tag::CellStart,
        Event::End(e) if e.name().as_ref() == TABLE_CELL => Tag::CellEnd,
        _ => Tag::Other,
    }
}

/// Attach a finished paragraph to the one enclosing it, or to the top level
fn close_paragraph<'a>(done: Paragraph<'a>, open: &mut [Paragraph<'a>], segments: &mut Vec<Segment<'a>>) {
    match open.last_mut() {
        Some(outer) => outer.parts.push(Part::Nested(done)),
        None => segments.push(Segment::Paragraph(done)),
    }
}

/// Split the document into paragraphs and the events between them
fn scan(xml: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut reader = Reader::from_str(xml);
    let mut segments = Vec::new();
    let mut open: Vec<Paragraph<'_>> = Vec::new();
    let mut cell_depth = 0usize;

    loop {
        let event = reader.read_event().map_err(xml_error)?;
        if matches!(event, Event::Eof) {
            break;
        }

        match classify(&event) {
            Tag::ParagraphStart => open.push(Paragraph {
                parts: vec![Part::Event(event)],
                in_cell: cell_depth > 0,
            }),
            Tag::ParagraphEnd => match open.pop() {
                Some(mut done) => {
                    done.parts.push(Part::Event(event));
                    close_paragraph(done, &mut open, &mut segments);
                }
                None => segments.push(Segment::Event(event)),
            },
            tag => {
                match tag {
                    Tag::CellStart => cell_depth += 1,
                    Tag::CellEnd => cell_depth = cell_depth.saturating_sub(1),
                    _ => {}
                }
                match open.last_mut() {
                    Some(paragraph) => paragraph.parts.push(Part::Event(event)),
                    None => segments.push(Segment::Event(event)),
                }
            }
        }
    }

    while let Some(unclosed) = open.pop() {
        close_paragraph(unclosed, &mut open, &mut segments);
    }

    Ok(segments)
}

/// Read the text of every paragraph in document order
///
/// A nested paragraph follows the paragraph that contains it.
pub(crate) fn read_containers(xml: &str) -> Result<Vec<TextContainer>, TemplateError> {
    let mut containers = Vec::new();

    for segment in scan(xml)? {
        if let Segment::Paragraph(paragraph) = segment {
            paragraph.collect_containers(&mut containers)?;
        }
    }

    Ok(containers)
}

/// Rewrite the document, replacing paragraph text where `replace` asks to
///
/// `replace` receives each paragraph's text and returns the new text, or
/// `None` to keep the paragraph byte-for-byte. Nested paragraphs are offered
/// separately.
pub(crate) fn rewrite_paragraphs<F>(xml: &str, mut replace: F) -> Result<String, TemplateError>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));

    for segment in scan(xml)? {
        match segment {
            Segment::Event(event) => writer.write_event(event).map_err(xml_error)?,
            Segment::Paragraph(paragraph) => write_paragraph(&mut writer, paragraph, &mut replace)?,
        }
    }

    String::from_utf8(writer.into_inner()).map_err(xml_error)
}

fn write_paragraph<F>(
    writer: &mut Writer<Vec<u8>>,
    paragraph: Paragraph<'_>,
    replace: &mut F,
) -> Result<(), TemplateError>
where
    F: FnMut(&str) -> Option<String>,
{
    let text = paragraph.text()?;
    match replace(&text) {
        Some(new_text) if new_text != text && paragraph.has_text_element() => {
            write_replaced(writer, paragraph, &new_text, replace)
        }
        _ => {
            for part in paragraph.parts {
                match part {
                    Part::Event(event) => writer.write_event(event).map_err(xml_error)?,
                    Part::Nested(inner) => write_paragraph(writer, inner, replace)?,
                }
            }
            Ok(())
        }
    }
}

/// Write a paragraph with all its text moved into the first `w:t`
///
/// Tabs and line breaks travel with the text, so the originals are dropped.
fn write_replaced<F>(
    writer: &mut Writer<Vec<u8>>,
    paragraph: Paragraph<'_>,
    new_text: &str,
    replace: &mut F,
) -> Result<(), TemplateError>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut placed = false;
    let mut in_text = false;
    let mut in_run = false;

    for part in paragraph.parts {
        let event = match part {
            Part::Event(event) => event,
            Part::Nested(inner) => {
                write_paragraph(writer, inner, replace)?;
                continue;
            }
        };

        match &event {
            Event::Start(e) if e.name().as_ref() == RUN => in_run = true,
            Event::End(e) if e.name().as_ref() == RUN => in_run = false,
            _ => {}
        }

        match event {
            Event::Start(start) if start.name().as_ref() == TEXT => {
                in_text = true;
                if placed {
                    writer.write_event(Event::Start(start)).map_err(xml_error)?;
                } else {
                    write_text(writer, start, new_text)?;
                    placed = true;
                }
            }
            Event::End(end) if end.name().as_ref() == TEXT => {
                in_text = false;
                writer.write_event(Event::End(end)).map_err(xml_error)?;
            }
            Event::Empty(start) if start.name().as_ref() == TEXT && !placed => {
                write_text(writer, start, new_text)?;
                writer.write_event(Event::End(BytesEnd::new("w:t"))).map_err(xml_error)?;
                placed = true;
            }
            Event::Empty(element) if in_run && separator(&element).is_some() => {}
            Event::Text(_) if in_text => {}
            other => writer.write_event(other).map_err(xml_error)?,
        }
    }

    Ok(())
}

/// Open `start` and write `text` into it, leaving the last `w:t` open
///
/// Each tab or newline closes the current `w:t`, emits `w:tab` or `w:br`,
/// and opens another `w:t` with the same attributes.
fn write_text(writer: &mut Writer<Vec<u8>>, start: BytesStart<'_>, text: &str) -> Result<(), TemplateError> {
    let start = preserve_space(start);
    let mut rest = text;

    writer.write_event(Event::Start(start.clone())).map_err(xml_error)?;
    while let Some(at) = rest.find(['\t', '\n']) {
        let element = if rest.as_bytes()[at] == b'\t' { "w:tab" } else { "w:br" };

        writer.write_event(Event::Text(BytesText::new(&rest[..at]))).map_err(xml_error)?;
        writer.write_event(Event::End(BytesEnd::new("w:t"))).map_err(xml_error)?;
        writer.write_event(Event::Empty(BytesStart::new(element))).map_err(xml_error)?;
        writer.write_event(Event::Start(start.clone())).map_err(xml_error)?;
        rest = &rest[at + 1..];
    }
    writer.write_event(Event::Text(BytesText::new(rest))).map_err(xml_error)?;

    Ok(())
}

/// Make sure leading and trailing spaces in the run survive
fn preserve_space(mut start: BytesStart<'_>) -> BytesStart<'_> {
    let has_space_attr = start
        .attributes()
        .flatten()
        .any(|attr| attr.key.as_ref() == b"xml:space");
    if !has_space_attr {
        start.push_attribute(("xml:space", "preserve"));
    }
    start
}
