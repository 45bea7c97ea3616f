//! DOCX raw text extraction: the zip container's `word/document.xml`, walked
//! with `quick-xml`.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

pub(crate) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ExtractError::MissingPart(DOCUMENT_PART));
        }
        Err(e) => return Err(e.into()),
    }
    body_text(&xml)
}

/// Raw text of a WordprocessingML body. Each paragraph is followed by a blank
/// line; tabs and breaks inside runs are kept, all formatting is dropped.
pub(crate) fn body_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    // Tabs and breaks only count inside a run; `w:tab` also appears in
    // paragraph properties as a tab stop definition.
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                name if in_run => push_run_marker(&mut text, name),
                _ => {}
            },
            Event::Empty(e) if e.name().as_ref() == b"w:p" => text.push_str("\n\n"),
            Event::Empty(e) if in_run => push_run_marker(&mut text, e.name().as_ref()),
            Event::End(e) => match e.name().as_ref() {
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Text(e) if in_text => text.push_str(&e.unescape()?),
            Event::CData(e) if in_text => text.push_str(&String::from_utf8_lossy(&e)),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

fn push_run_marker(text: &mut String, name: &[u8]) {
    match name {
        b"w:tab" => text.push('\t'),
        b"w:br" | b"w:cr" => text.push('\n'),
        _ => {}
    }
}
