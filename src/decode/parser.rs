use memchr::memchr;

use crate::decode::scan::{content_lines, trim_space};
use crate::document::{Document, Entry, Section};
use crate::ParseOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    Comment,
    Header(&'a str),
    Pair { key: &'a str, value: &'a str },
}

/// Classifies one non-blank line. Comments win over headers, and anything
/// that is neither becomes a key/value pair.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with('#') {
        return LineKind::Comment;
    }
    if let Some(name) = header_name(line) {
        return LineKind::Header(name);
    }
    let (key, value) = split_pair(line);
    LineKind::Pair { key, value }
}

/// A header is the whole line: `[`, at least one character, `]`. The name is
/// the line with exactly one character sliced off each end, so `[[x]]` names
/// the section `[x]`.
fn header_name(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    if name.is_empty() || name.contains(['\r', '\u{2028}', '\u{2029}']) {
        return None;
    }
    Some(name)
}

fn split_pair(line: &str) -> (&str, &str) {
    match memchr(b'=', line.as_bytes()) {
        Some(idx) => (trim_space(&line[..idx]), trim_space(&line[idx + 1..])),
        None => (trim_space(line), ""),
    }
}

pub struct Parser<'a, 'o> {
    options: &'o ParseOptions,
    current: &'a str,
    document: Document,
}

impl<'a, 'o> Parser<'a, 'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            current: "",
            document: Document::new(),
        }
    }

    pub fn parse(mut self, input: &'a str) -> Document {
        let mut lines = 0usize;
        for line in content_lines(input) {
            lines += 1;
            match classify(line) {
                LineKind::Comment => {}
                LineKind::Header(name) => self.enter_section(name),
                LineKind::Pair { key, value } => self.set(key, value),
            }
        }
        tracing::debug!(
            lines,
            sections = self.document.len(),
            "parsed ini document"
        );
        self.document
    }

    fn current_is_array(&self) -> bool {
        self.options.is_array_section(self.current)
    }

    fn enter_section(&mut self, name: &'a str) {
        // The new-element decision looks at the section being left, not the
        // one being entered. The first header of an array section that follows
        // an ordinary section therefore opens no element; its first key/value
        // line creates one instead. Whether this was intended is unclear, so
        // it is kept as is.
        if self.current_is_array() {
            tracing::trace!(from = self.current, to = name, "new array element");
            self.document
                .section_or_insert_with(name, || Section::Sequence(Vec::new()))
                .push_entry();
        } else {
            tracing::trace!(from = self.current, to = name, "enter section");
        }
        self.current = name;
    }

    fn set(&mut self, key: &str, value: &str) {
        tracing::trace!(section = self.current, key, value, "set value");
        let entry = self.target_entry();
        entry.insert(key, value);
    }

    fn target_entry(&mut self) -> &mut Entry {
        let make: fn() -> Section = if self.current_is_array() {
            || Section::Sequence(Vec::new())
        } else {
            || Section::Single(Entry::new())
        };
        self.document
            .section_or_insert_with(self.current, make)
            .target_mut()
    }
}
