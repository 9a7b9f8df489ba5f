//! XML parsing for inflection service responses.
//!
//! A typical response for a dictionary word:
//!
//! ```xml
//! <inflections>
//!   <original>Москва</original>
//!   <inflection case="1">Москва</inflection>
//!   <inflection case="2">Москвы</inflection>
//!   ...
//! </inflections>
//! ```
//!
//! For unknown words the service sends a single `<inflection>` echoing the
//! input. See [`ParsedResponse::from_entries`] for how counts map to shapes.

use std::fmt;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::types::{InflectionEntry, ParsedResponse};

const ROOT: &[u8] = b"inflections";

/// Error while reading a response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The body is not well-formed XML
    #[error("malformed XML at byte {position}: {message}")]
    Syntax { position: u64, message: String },

    /// The document root is some other element
    #[error("unexpected root element <{0}>")]
    UnexpectedRoot(String),

    /// The body contains no root element at all
    #[error("missing <inflections> root element")]
    MissingRoot,
}

/// Which child of the root we are currently inside.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Original,
    Inflection,
    Other,
}

/// Parse a response body into a [`ParsedResponse`].
pub fn parse_inflections(body: &str) -> Result<ParsedResponse, ParseError> {
    let mut xml = Reader::from_str(body);
    xml.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut seen_root = false;
    let mut field = Field::Other;
    let mut original: Option<String> = None;
    let mut entries: Vec<InflectionEntry> = Vec::new();

    loop {
        let position = xml.buffer_position() as u64;
        match xml.read_event() {
            Ok(Event::Start(e)) => {
                match depth {
                    0 => enter_root(&e, &mut seen_root, position)?,
                    1 => {
                        field = open_child(&e, &mut original, &mut entries, position)?;
                    }
                    _ => {}
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) => match depth {
                0 => enter_root(&e, &mut seen_root, position)?,
                1 => {
                    open_child(&e, &mut original, &mut entries, position)?;
                }
                _ => {}
            },
            Ok(Event::Text(t)) if depth >= 2 => {
                let text = t.unescape().map_err(|e| syntax(position, e))?;
                append_text(field, &text, &mut original, &mut entries);
            }
            Ok(Event::CData(c)) if depth >= 2 => {
                let text = String::from_utf8_lossy(&c);
                append_text(field, &text, &mut original, &mut entries);
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                if depth <= 1 {
                    field = Field::Other;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(syntax(position, e)),
            _ => {}
        }
    }

    if !seen_root {
        return Err(ParseError::MissingRoot);
    }
    if depth != 0 {
        return Err(ParseError::Syntax {
            position: body.len() as u64,
            message: "unexpected end of document".to_string(),
        });
    }

    Ok(ParsedResponse::from_entries(original, entries))
}

fn syntax(position: u64, err: impl fmt::Display) -> ParseError {
    ParseError::Syntax {
        position,
        message: err.to_string(),
    }
}

fn enter_root(e: &BytesStart<'_>, seen_root: &mut bool, position: u64) -> Result<(), ParseError> {
    if *seen_root {
        return Err(syntax(position, "multiple root elements"));
    }
    let name = e.local_name();
    if name.as_ref() != ROOT {
        return Err(ParseError::UnexpectedRoot(
            String::from_utf8_lossy(name.as_ref()).into_owned(),
        ));
    }
    *seen_root = true;
    Ok(())
}

/// Record a direct child of the root and report which field it opens.
fn open_child(
    e: &BytesStart<'_>,
    original: &mut Option<String>,
    entries: &mut Vec<InflectionEntry>,
    position: u64,
) -> Result<Field, ParseError> {
    match e.local_name().as_ref() {
        b"original" => {
            original.get_or_insert_with(String::new);
            Ok(Field::Original)
        }
        b"inflection" => {
            let case = match e.try_get_attribute("case").map_err(|e| syntax(position, e))? {
                Some(attr) => attr
                    .unescape_value()
                    .map_err(|e| syntax(position, e))?
                    .into_owned(),
                None => String::new(),
            };
            entries.push(InflectionEntry::new(case, String::new()));
            Ok(Field::Inflection)
        }
        _ => Ok(Field::Other),
    }
}

fn append_text(
    field: Field,
    text: &str,
    original: &mut Option<String>,
    entries: &mut [InflectionEntry],
) {
    match field {
        Field::Original => {
            if let Some(original) = original {
                original.push_str(text);
            }
        }
        Field::Inflection => {
            if let Some(entry) = entries.last_mut() {
                entry.text.push_str(text);
            }
        }
        Field::Other => {}
    }
}
