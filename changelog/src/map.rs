use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// Release notes keyed by version label, in the order the labels first
/// appear in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ChangelogMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a section for `version` unless one already exists.
    ///
    /// Notes gathered under an existing section are kept. Returns `true` when
    /// a new section was created.
    pub(crate) fn open_section(&mut self, version: &str) -> bool {
        if self.index.contains_key(version) {
            return false;
        }
        self.index.insert(version.to_string(), self.entries.len());
        self.entries.push((version.to_string(), String::new()));
        true
    }

    /// Appends `line` and a newline to the notes of `version`.
    pub(crate) fn append_line(&mut self, version: &str, line: &str) -> bool {
        let Some(&idx) = self.index.get(version) else {
            return false;
        };
        let notes = &mut self.entries[idx].1;
        notes.push_str(line);
        notes.push('\n');
        true
    }

    #[must_use]
    pub fn get(&self, version: &str) -> Option<&str> {
        self.index
            .get(version)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    #[must_use]
    pub fn contains(&self, version: &str) -> bool {
        self.index.contains_key(version)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first version label in document order
    #[must_use]
    pub fn first_version(&self) -> Option<&str> {
        self.entries.first().map(|(version, _)| version.as_str())
    }

    pub fn versions(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(version, _)| version.as_str())
    }

    /// Iterates `(version, notes)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(version, notes)| (version.as_str(), notes.as_str()))
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<(String, String)> {
        self.entries
    }
}

impl Serialize for ChangelogMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
