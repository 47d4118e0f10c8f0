//! Per-document records.

use std::path::{Component, Path};

use sitetoc_document::{Header, parse_file};
use tracing::debug;

use crate::{CategoryMap, IndexError};

/// Metadata for one source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Filename stem, unique within one source set.
    pub id: String,
    /// Resolved title.
    pub title: String,
    /// Headings in document order.
    pub headers: Vec<Header>,
    /// Path relative to the document root without extension, `/`-separated.
    pub href: String,
    /// Sidebar category listing this document, if any.
    pub category: Option<String>,
}

/// Builds the record for one source file.
///
/// The title is the frontmatter title, else the first heading, else the filename stem.
pub fn process_file(
    path: &Path,
    doc_root: &Path,
    categories: &CategoryMap,
) -> Result<DocumentRecord, IndexError> {
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let document = parse_file(path)?;
    let href = href_for(path, doc_root)?;
    let category = categories.get(&id).map(str::to_string);
    debug!(%id, %href, category = category.as_deref().unwrap_or("-"), "processed document");

    Ok(DocumentRecord {
        title: document.title(&id),
        headers: document.headers,
        href,
        category,
        id,
    })
}

/// Computes the href of a document: its path relative to `doc_root`, extension stripped,
/// joined with `/`.
pub fn href_for(path: &Path, doc_root: &Path) -> Result<String, IndexError> {
    let outside = || IndexError::OutsideDocRoot {
        path: path.to_path_buf(),
        doc_root: doc_root.to_path_buf(),
    };
    let relative = path.strip_prefix(doc_root).map_err(|_| outside())?;
    let relative = relative.with_extension("");

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy()),
            Component::CurDir => {}
            _ => return Err(outside()),
        }
    }
    if parts.is_empty() {
        return Err(outside());
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::SidebarSpec;

    #[test]
    fn test_href_for() {
        let root = Path::new("/site/pages");
        let path = root.join("docs/manual/v12.0.0/introduction.mdx");

        assert_eq!(
            href_for(&path, root).unwrap(),
            "docs/manual/v12.0.0/introduction"
        );
    }

    #[test]
    fn test_href_keeps_inner_dots() {
        let root = Path::new("/site/pages");
        let path = root.join("community/release.v2.md");

        assert_eq!(href_for(&path, root).unwrap(), "community/release.v2");
    }

    #[test]
    fn test_href_outside_root() {
        let err = href_for(Path::new("/elsewhere/doc.md"), Path::new("/site/pages")).unwrap_err();
        assert!(matches!(err, IndexError::OutsideDocRoot { .. }));
    }

    #[test]
    fn test_process_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("community")).unwrap();
        let path = root.join("community/roadmap.md");
        fs::write(
            &path,
            "# Roadmap\n\n## Next [release](/blog)\n\n### Done `v11`\n",
        )
        .unwrap();

        let sidebar = SidebarSpec::from_json(r#"{"Resources": ["roadmap"]}"#).unwrap();
        let record = process_file(&path, root, &sidebar.category_map()).unwrap();

        assert_eq!(record.id, "roadmap");
        assert_eq!(record.title, "Roadmap");
        assert_eq!(record.href, "community/roadmap");
        assert_eq!(record.category.as_deref(), Some("Resources"));
        let texts: Vec<&str> = record.headers.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["Roadmap", "Next release", "Done v11"]);
    }

    #[test]
    fn test_uncategorized_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.md");
        fs::write(&path, "No headings here.").unwrap();

        let record = process_file(&path, dir.path(), &CategoryMap::default()).unwrap();

        assert_eq!(record.title, "index");
        assert_eq!(record.href, "index");
        assert!(record.category.is_none());
        assert!(record.headers.is_empty());
    }

    #[test]
    fn test_document_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.md");
        fs::write(&path, "---\ntitle: [oops\n---\n").unwrap();

        let err = process_file(&path, dir.path(), &CategoryMap::default()).unwrap_err();
        assert!(matches!(err, IndexError::Document(_)));
    }
}
