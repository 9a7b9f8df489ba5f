//! Client for the remote word inflection service.
//!
//! The service takes a word as the `name` query parameter of
//! `/inflect.xml` and replies with an XML document listing the word's
//! forms in the six grammatical cases. Words missing from the service's
//! dictionary come back as a single echoed record instead of a list.

mod client;
mod error;
mod parse;
mod types;

pub use client::{InflectionClient, InflectionConfig};
pub use error::InflectionError;
pub use parse::{ParseError, parse_inflections};
pub use types::{InflectionEntry, ParsedResponse};
