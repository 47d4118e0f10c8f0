//! Sidebar ordering documents.
//!
//! A sidebar file is a JSON object mapping category names to ordered arrays of document
//! ids (filename stems):
//!
//! ```json
//! { "Overview": ["introduction", "installation"], "Guides": ["editor-plugins"] }
//! ```
//!
//! Key order is significant, so the object is read into an explicit ordered list of
//! categories instead of a map.

use std::{
    collections::{HashMap, HashSet},
    fmt, fs,
    path::Path,
};

use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor},
};

use crate::{IndexError, SidebarError};

/// One sidebar category and the documents listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category name as shown in the navigation.
    pub name: String,
    /// Document ids, in navigation order.
    pub ids: Vec<String>,
}

/// The navigation order of one documentation set.
///
/// Categories keep their declaration order. Category names and document ids are unique
/// across the whole sidebar; both are checked when parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarSpec {
    /// Categories in declaration order.
    categories: Vec<Category>,
}

impl SidebarSpec {
    /// Builds a sidebar from categories, checking the uniqueness invariants.
    pub fn new(categories: Vec<Category>) -> Result<Self, SidebarError> {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for category in &categories {
            if !names.insert(category.name.as_str()) {
                return Err(SidebarError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }
            for id in &category.ids {
                if !ids.insert(id.as_str()) {
                    return Err(SidebarError::DuplicateId { id: id.clone() });
                }
            }
        }
        Ok(Self { categories })
    }

    /// Loads a sidebar file.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let content = fs::read_to_string(path).map_err(|source| IndexError::ReadSidebar {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| IndexError::ParseSidebar {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a sidebar from JSON text.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Returns the categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns every document id in navigation order.
    pub fn flatten(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.ids.iter().map(String::as_str))
            .collect()
    }

    /// Builds the id to category lookup for this sidebar.
    pub fn category_map(&self) -> CategoryMap {
        let mut by_id = HashMap::new();
        for category in &self.categories {
            for id in &category.ids {
                by_id
                    .entry(id.clone())
                    .or_insert_with(|| category.name.clone());
            }
        }
        CategoryMap { by_id }
    }
}

/// Lookup from document id to the name of its sidebar category.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    /// Category name per document id.
    by_id: HashMap<String, String>,
}

impl CategoryMap {
    /// Returns the category containing `id`, if any.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for SidebarSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SidebarVisitor)
    }
}

/// Reads a JSON object into categories, keeping key order.
struct SidebarVisitor;

impl<'de> Visitor<'de> for SidebarVisitor {
    type Value = SidebarSpec;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping category names to arrays of document ids")
    }

    fn visit_map<A>(self, mut map: A) -> Result<SidebarSpec, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, ids)) = map.next_entry::<String, Vec<String>>()? {
            categories.push(Category { name, ids });
        }
        SidebarSpec::new(categories).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_order_is_preserved() {
        let sidebar =
            SidebarSpec::from_json(r#"{"Zeta": ["z1", "z2"], "Alpha": ["a1"], "Mid": []}"#)
                .unwrap();

        let names: Vec<&str> = sidebar.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(sidebar.flatten(), vec!["z1", "z2", "a1"]);
    }

    #[test]
    fn test_category_map() {
        let sidebar =
            SidebarSpec::from_json(r#"{"Intro": ["overview", "install"], "Guides": ["editor"]}"#)
                .unwrap();
        let map = sidebar.category_map();

        assert_eq!(map.get("overview"), Some("Intro"));
        assert_eq!(map.get("editor"), Some("Guides"));
        assert_eq!(map.get("unknown"), None);
    }

    #[test]
    fn test_empty_sidebar() {
        let sidebar = SidebarSpec::from_json("{}").unwrap();
        assert!(sidebar.categories().is_empty());
        assert!(sidebar.flatten().is_empty());
    }

    #[test]
    fn test_duplicate_id_across_categories() {
        let err = SidebarSpec::from_json(r#"{"A": ["intro"], "B": ["intro"]}"#).unwrap_err();
        assert!(err.to_string().contains("\"intro\" is listed more than once"));
    }

    #[test]
    fn test_duplicate_category() {
        let err = SidebarSpec::from_json(r#"{"A": ["one"], "A": ["two"]}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate category \"A\""));
    }

    #[test]
    fn test_new_reports_typed_errors() {
        let category = |name: &str, ids: &[&str]| Category {
            name: name.into(),
            ids: ids.iter().map(|id| (*id).to_string()).collect(),
        };

        let err = SidebarSpec::new(vec![category("A", &["x"]), category("A", &["y"])]).unwrap_err();
        assert_eq!(err, SidebarError::DuplicateCategory { name: "A".into() });

        let err = SidebarSpec::new(vec![category("A", &["x", "x"])]).unwrap_err();
        assert_eq!(err, SidebarError::DuplicateId { id: "x".into() });

        let sidebar = SidebarSpec::new(vec![category("A", &["x"]), category("B", &["y"])]).unwrap();
        assert_eq!(sidebar.flatten(), vec!["x", "y"]);
    }

    #[test]
    fn test_not_an_object() {
        assert!(SidebarSpec::from_json(r#"["intro"]"#).is_err());
        assert!(SidebarSpec::from_json(r#"{"A": "intro"}"#).is_err());
        assert!(SidebarSpec::from_json("{").is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebar_broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = SidebarSpec::load(&path).unwrap_err();
        assert!(matches!(err, IndexError::ParseSidebar { .. }));
        assert!(err.to_string().contains("sidebar_broken.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SidebarSpec::load(Path::new("/nonexistent/sidebar.json")).unwrap_err();
        assert!(matches!(err, IndexError::ReadSidebar { .. }));
    }
}
