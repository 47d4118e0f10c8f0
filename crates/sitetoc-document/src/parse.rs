//! High-level document extraction API.
//!
//! Provides functions to turn markdown, MDX and legacy script pages into
//! [`ExtractedDocument`]s carrying frontmatter, headers and the derived main header.

use std::{fs, path::Path};

use crate::{DocumentError, Frontmatter, Header, extract_headers, parse_frontmatter};

/// Metadata extracted from one source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// Frontmatter fields (default when the document has none).
    pub frontmatter: Frontmatter,
    /// All headings, in document order.
    pub headers: Vec<Header>,
    /// Text of the first heading, if any.
    pub main_header: Option<String>,
}

impl ExtractedDocument {
    /// Resolves the document title.
    ///
    /// Precedence: frontmatter `title`, then the main header, then `fallback` (usually the
    /// filename stem). Empty strings never win.
    pub fn title(&self, fallback: &str) -> String {
        self.frontmatter
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.main_header.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Extracts frontmatter and headers from markdown or MDX content.
///
/// `path` is only used to identify the document in errors.
pub fn parse_markdown(content: &str, path: &Path) -> Result<ExtractedDocument, DocumentError> {
    let (frontmatter, body) =
        parse_frontmatter(content).map_err(|source| DocumentError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = extract_headers(body);
    let main_header = headers.first().map(|h| h.text.clone());

    Ok(ExtractedDocument {
        frontmatter: frontmatter.unwrap_or_default(),
        headers,
        main_header,
    })
}

/// Reads a document from disk, detecting its kind by extension.
///
/// Supported extensions:
/// - `.md`, `.mdx`, `.markdown` - frontmatter and headers are extracted
/// - `.js` - legacy script pages, which carry no markdown metadata
pub fn parse_file(path: &Path) -> Result<ExtractedDocument, DocumentError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("md" | "mdx" | "markdown") => {
            let content = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
            parse_markdown(&content, path)
        }
        Some("js") => Ok(ExtractedDocument::default()),
        _ => Err(DocumentError::UnsupportedFileType {
            path: path.to_path_buf(),
        }),
    }
}
