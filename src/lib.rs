//! Permissive INI parsing with repeatable "array sections".
//!
//! ```
//! use ini_sections::{parse_with_options, ParseOptions};
//!
//! let text = "[peer]\nip = 10.0.0.1\n[peer]\nip = 10.0.0.2\n";
//! let options = ParseOptions::new().with_array_section("peer");
//! let doc = parse_with_options(text, &options);
//! assert_eq!(doc.entries("peer").len(), 2);
//! ```
pub mod decode;
pub mod document;
pub mod error;
pub mod options;

use std::io::Read;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use crate::document::{Document, Entry, Section};
pub use crate::error::{Error, ErrorKind};
pub use crate::options::ParseOptions;

pub type Result<T> = std::result::Result<T, Error>;

/// Parses `input` with no array sections. Never fails.
pub fn parse(input: &str) -> Document {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: &ParseOptions) -> Document {
    decode::parse(input, options)
}

pub fn parse_slice(input: &[u8]) -> Result<Document> {
    parse_slice_with_options(input, &ParseOptions::default())
}

pub fn parse_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Document> {
    decode::parse_slice(input, options)
}

pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    parse_reader_with_options(reader, &ParseOptions::default())
}

pub fn parse_reader_with_options<R: Read>(reader: R, options: &ParseOptions) -> Result<Document> {
    decode::parse_reader(reader, options)
}

pub fn parse_to_value(input: &str) -> Value {
    parse_to_value_with_options(input, &ParseOptions::default())
}

pub fn parse_to_value_with_options(input: &str, options: &ParseOptions) -> Value {
    parse_with_options(input, options).to_value()
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    from_str_with_options(input, &ParseOptions::default())
}

pub fn from_str_with_options<T: DeserializeOwned>(
    input: &str,
    options: &ParseOptions,
) -> Result<T> {
    decode::from_str(input, options)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    from_slice_with_options(input, &ParseOptions::default())
}

pub fn from_slice_with_options<T: DeserializeOwned>(
    input: &[u8],
    options: &ParseOptions,
) -> Result<T> {
    decode::from_slice(input, options)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    from_reader_with_options(reader, &ParseOptions::default())
}

pub fn from_reader_with_options<T: DeserializeOwned, R: Read>(
    reader: R,
    options: &ParseOptions,
) -> Result<T> {
    decode::from_reader(reader, options)
}

pub fn from_document<T: DeserializeOwned>(document: &Document) -> Result<T> {
    decode::from_document(document)
}
