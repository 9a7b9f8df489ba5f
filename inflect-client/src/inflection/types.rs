//! Inflection service response types.
//!
//! The service answers with an XML document whose `<inflection>` children
//! come in two shapes. The shape is decided once, at parse time, and
//! carried as a [`ParsedResponse`] variant.

/// One `<inflection case="N">text</inflection>` element.
///
/// The case is kept as the raw attribute string; validation happens when
/// the entry is placed into an inflection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionEntry {
    /// Raw `case` attribute (expected "1" to "6").
    pub case: String,

    /// The inflected form.
    pub text: String,
}

impl InflectionEntry {
    /// Create an entry from a case string and text.
    pub fn new(case: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            case: case.into(),
            text: text.into(),
        }
    }
}

/// A response body, classified by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    /// The dictionary has no entry for the word.
    ///
    /// The service echoes a single pseudo-record instead of a list.
    NotFound {
        /// The `<original>` element, if present.
        original: Option<String>,
    },

    /// Two or more inflections, in document order.
    FoundList {
        /// The `<original>` element, if present.
        original: Option<String>,
        entries: Vec<InflectionEntry>,
    },

    /// A well-formed `<inflections>` document with no `<inflection>` children.
    Malformed,
}

impl ParsedResponse {
    /// Classify a list of entries by how many the service sent.
    pub fn from_entries(original: Option<String>, entries: Vec<InflectionEntry>) -> Self {
        match entries.len() {
            0 => ParsedResponse::Malformed,
            1 => ParsedResponse::NotFound { original },
            _ => ParsedResponse::FoundList { original, entries },
        }
    }
}
