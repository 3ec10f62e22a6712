use std::collections::HashSet;

/// Parser configuration.
///
/// The only knob is the set of "array sections": section names whose repeated
/// headers collect into a list of entries instead of merging into one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub array_sections: HashSet<String>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_array_sections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.array_sections.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_array_section(mut self, name: impl Into<String>) -> Self {
        self.array_sections.insert(name.into());
        self
    }

    pub fn is_array_section(&self, name: &str) -> bool {
        self.array_sections.contains(name)
    }
}
