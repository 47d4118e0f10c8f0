//! Table-of-contents assembly.
//!
//! A [`TocIndex`] maps URL paths (`"/" + href`) to navigation metadata. It is an ordered
//! association list: entries keep the order they were inserted in (the sidebar order), and
//! serialize as a JSON object with keys in that order.

use std::collections::HashMap;

use serde::{Serialize, Serializer, ser::SerializeMap};
use sitetoc_document::Header;

use crate::DocumentRecord;

/// Navigation metadata for one URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Document id.
    pub id: String,
    /// Document title.
    pub title: String,
    /// Headings in document order.
    pub headers: Vec<Header>,
    /// Sidebar category; omitted when the document is uncategorized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Ordered mapping from URL path to [`TocEntry`].
#[derive(Debug, Clone, Default)]
pub struct TocIndex {
    /// Entries in insertion order.
    entries: Vec<(String, TocEntry)>,
    /// Position of each key in `entries`.
    positions: HashMap<String, usize>,
}

impl TocIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. An existing key keeps its position and gets the new entry.
    pub fn insert(&mut self, path: String, entry: TocEntry) {
        if let Some(&position) = self.positions.get(&path) {
            self.entries[position].1 = entry;
        } else {
            self.positions.insert(path.clone(), self.entries.len());
            self.entries.push((path, entry));
        }
    }

    /// Looks up the entry for a URL path.
    pub fn get(&self, path: &str) -> Option<&TocEntry> {
        self.positions.get(path).map(|&i| &self.entries[i].1)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TocEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the URL paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TocIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, entry) in &self.entries {
            map.serialize_entry(path, entry)?;
        }
        map.end()
    }
}

/// Returns the URL path for an href.
pub fn url_path(href: &str) -> String {
    format!("/{href}")
}

/// Assembles records into an index keyed by URL path, keeping record order.
pub fn assemble(records: Vec<DocumentRecord>) -> TocIndex {
    let mut index = TocIndex::new();
    for record in records {
        index.insert(
            url_path(&record.href),
            TocEntry {
                id: record.id,
                title: record.title,
                headers: record.headers,
                category: record.category,
            },
        );
    }
    index
}
