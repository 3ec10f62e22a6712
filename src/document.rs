use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// One flat group of `key = value` pairs.
///
/// Keys keep their first-insertion order; re-inserting a key replaces its
/// value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Entry {
    fields: IndexMap<String, String>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Sets `key` to `value`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect::<Map<String, Value>>(),
        )
    }
}

impl<'a> IntoIterator for &'a Entry {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Entry {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut entry = Entry::new();
        for (key, value) in iter {
            entry.insert(key, value);
        }
        entry
    }
}

/// The value stored under a section name.
///
/// Ordinary sections hold a single entry. Array sections hold one entry per
/// header occurrence, in document order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Section {
    Single(Entry),
    Sequence(Vec<Entry>),
}

impl Section {
    pub fn as_single(&self) -> Option<&Entry> {
        match self {
            Section::Single(entry) => Some(entry),
            Section::Sequence(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Entry]> {
        match self {
            Section::Single(_) => None,
            Section::Sequence(entries) => Some(entries),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Section::Sequence(_))
    }

    /// All entries of the section: one for a single section, every element for
    /// a sequence.
    pub fn entries(&self) -> &[Entry] {
        match self {
            Section::Single(entry) => std::slice::from_ref(entry),
            Section::Sequence(entries) => entries,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Section::Single(entry) => entry.to_value(),
            Section::Sequence(entries) => Value::Array(entries.iter().map(Entry::to_value).collect()),
        }
    }

    /// Appends a fresh element. A single entry is promoted to a sequence
    /// whose first element is that entry.
    pub(crate) fn push_entry(&mut self) {
        match self {
            Section::Sequence(entries) => entries.push(Entry::new()),
            Section::Single(entry) => {
                let first = std::mem::take(entry);
                *self = Section::Sequence(vec![first, Entry::new()]);
            }
        }
    }

    /// The entry that key/value lines currently write into: the single entry,
    /// or the last element of a sequence (created if the sequence is empty).
    pub(crate) fn target_mut(&mut self) -> &mut Entry {
        match self {
            Section::Single(entry) => entry,
            Section::Sequence(entries) => {
                if entries.is_empty() {
                    entries.push(Entry::new());
                }
                let last = entries.len() - 1;
                &mut entries[last]
            }
        }
    }
}

/// Parsed INI document: section name to section, in first-seen order.
///
/// Key/value lines that appear before any header live in the section named
/// `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    /// The entry of an ordinary section. Returns `None` for array sections.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.get(name).and_then(Section::as_single)
    }

    /// Every entry stored under `name`; empty when the section is missing.
    pub fn entries(&self, name: &str) -> &[Entry] {
        self.get(name).map(Section::entries).unwrap_or_default()
    }

    /// Looks up `key` in `section`. For array sections the last element wins.
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.entries(section).last().and_then(|entry| entry.get(key))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.sections
                .iter()
                .map(|(name, section)| (name.clone(), section.to_value()))
                .collect::<Map<String, Value>>(),
        )
    }

    pub fn insert(&mut self, name: impl Into<String>, section: Section) -> Option<Section> {
        self.sections.insert(name.into(), section)
    }

    pub(crate) fn section_or_insert_with(
        &mut self,
        name: &str,
        make: impl FnOnce() -> Section,
    ) -> &mut Section {
        let index = match self.sections.get_index_of(name) {
            Some(index) => index,
            None => self.sections.insert_full(name.to_owned(), make()).0,
        };
        &mut self.sections[index]
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Section);
    type IntoIter = indexmap::map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
