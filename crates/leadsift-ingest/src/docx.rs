//! DOCX text extraction.
//!
//! A `.docx` file is a ZIP container; the body text lives in
//! `word/document.xml`. Only paragraphs that are direct children of
//! `<w:body>` are emitted, one per line. Paragraphs inside tables, content
//! controls and text boxes are not part of the body paragraph list and are
//! skipped.

use std::io::{BufRead, BufReader, Read, Seek};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the body paragraphs of a DOCX file, each followed by `'\n'`.
pub fn extract_docx(path: &Path) -> Result<String, String> {
    let file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    extract_docx_from_reader(file)
}

/// Same as [`extract_docx`], for an already-open container.
pub fn extract_docx_from_reader<R: Read + Seek>(reader: R) -> Result<String, String> {
    let mut archive =
        zip::ZipArchive::new(reader).map_err(|e| format!("Failed to open DOCX container: {}", e))?;
    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| format!("Failed to read {}: {}", DOCUMENT_PART, e))?;
    parse_document_xml(BufReader::new(part))
}

/// Walk `word/document.xml` SAX-style and collect body paragraph text.
///
/// Inside a run of a paragraph, `<w:t>` contributes its text, `<w:tab/>` a
/// tab and `<w:br/>`/`<w:cr/>` a newline. Tab stops declared in paragraph
/// properties are not runs and produce nothing.
pub fn parse_document_xml<R: BufRead>(reader: R) -> Result<String, String> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(false);

    let mut buf = Vec::with_capacity(4096);
    let mut out = String::new();

    // State
    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    let mut paragraph: Option<String> = None;
    let mut paragraph_depth = 0usize;
    let mut in_text = false;
    // Open `<w:r>` elements in the current paragraph
    let mut run_depth = 0usize;
    // Depth of a text box whose contents are ignored
    let mut skip_depth: Option<usize> = None;

    loop {
        let event = xml
            .read_event_into(&mut buf)
            .map_err(|e| format!("Malformed {} at byte {}: {}", DOCUMENT_PART, xml.buffer_position(), e))?;

        match event {
            Event::Start(ref e) => {
                depth += 1;
                if skip_depth.is_none() {
                    match e.name().as_ref() {
                        b"w:body" if body_depth.is_none() => body_depth = Some(depth),
                        b"w:p" if paragraph.is_none() && body_depth == Some(depth - 1) => {
                            paragraph = Some(String::new());
                            paragraph_depth = depth;
                        }
                        b"w:r" if paragraph.is_some() => run_depth += 1,
                        b"w:t" if paragraph.is_some() => in_text = true,
                        b"w:txbxContent" if paragraph.is_some() => skip_depth = Some(depth),
                        _ => {}
                    }
                }
            }

            Event::Empty(ref e) => {
                let name = e.name();
                match paragraph.as_mut() {
                    _ if skip_depth.is_some() => {}
                    Some(_) if run_depth == 0 => {}
                    Some(text) => match name.as_ref() {
                        b"w:tab" => text.push('\t'),
                        b"w:br" | b"w:cr" => text.push('\n'),
                        _ => {}
                    },
                    // A self-closing top-level paragraph is an empty line
                    None if name.as_ref() == b"w:p" && body_depth == Some(depth) => out.push('\n'),
                    None => {}
                }
            }

            Event::Text(ref e) => {
                if in_text && skip_depth.is_none() {
                    if let Some(text) = paragraph.as_mut() {
                        let unescaped = e.unescape().map_err(|e| e.to_string())?;
                        text.push_str(&unescaped);
                    }
                }
            }

            Event::CData(ref e) => {
                if in_text && skip_depth.is_none() {
                    if let Some(text) = paragraph.as_mut() {
                        text.push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
            }

            Event::End(ref e) => {
                if skip_depth == Some(depth) {
                    skip_depth = None;
                } else if skip_depth.is_none() {
                    match e.name().as_ref() {
                        b"w:t" => in_text = false,
                        b"w:r" => run_depth = run_depth.saturating_sub(1),
                        b"w:p" if depth == paragraph_depth => {
                            run_depth = 0;
                            if let Some(text) = paragraph.take() {
                                out.push_str(&text);
                                out.push('\n');
                            }
                        }
                        _ => {}
                    }
                }
                depth = depth.saturating_sub(1);
            }

            Event::Eof => break,
            _ => {}
        }

        buf.clear();
    }

    Ok(out)
}
