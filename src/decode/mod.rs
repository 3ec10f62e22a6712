mod parser;
mod scan;

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::{Document, Error, ParseOptions, Result};

pub use parser::{classify, LineKind};

pub fn parse(input: &str, options: &ParseOptions) -> Document {
    parser::Parser::new(options).parse(input)
}

pub fn parse_slice(input: &[u8], options: &ParseOptions) -> Result<Document> {
    let text =
        std::str::from_utf8(input).map_err(|err| Error::decode(format!("invalid utf-8: {err}")))?;
    Ok(parse(text, options))
}

pub fn parse_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Document> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_slice(&buf, options)
}

pub fn from_document<T: DeserializeOwned>(document: &Document) -> Result<T> {
    serde_json::from_value(document.to_value())
        .map_err(|err| Error::deserialize(format!("deserialize failed: {err}")))
}

pub fn from_str<T: DeserializeOwned>(input: &str, options: &ParseOptions) -> Result<T> {
    from_document(&parse(input, options))
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8], options: &ParseOptions) -> Result<T> {
    from_document(&parse_slice(input, options)?)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R, options: &ParseOptions) -> Result<T> {
    from_document(&parse_reader(reader, options)?)
}
