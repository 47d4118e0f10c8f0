//! YAML frontmatter parsing for markdown documents.
//!
//! Frontmatter is optional metadata at the start of a markdown file, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Installation Guide
//! description: Getting the compiler onto your machine
//! ---
//!
//! # Content starts here
//! ```

use serde::Deserialize;

/// Parsed frontmatter from a markdown document. Keys other than `title` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    /// Title override for the document.
    pub title: Option<String>,
}

/// Parses YAML frontmatter from markdown content.
///
/// Returns the parsed frontmatter and the remaining content after the block. When the
/// content does not open with a delimited block, returns `None` and the original content.
///
/// Frontmatter must:
/// - Start at the beginning of the content
/// - Be delimited by `---` on its own line
/// - Contain valid YAML
///
/// A delimited block that is not valid YAML is an error, never body text.
pub fn parse_frontmatter(content: &str) -> Result<(Option<Frontmatter>, &str), serde_yaml::Error> {
    let content = content.trim_start_matches('\u{feff}');
    let Some(after_opening) = strip_delimiter_line(content) else {
        return Ok((None, content));
    };

    let Some((yaml_end, body_start)) = find_closing_delimiter(after_opening) else {
        return Ok((None, content));
    };

    let yaml_content = &after_opening[..yaml_end];
    let remaining = &after_opening[body_start..];

    // A blank line usually separates the block from the body
    let remaining = remaining
        .strip_prefix("\r\n")
        .or_else(|| remaining.strip_prefix('\n'))
        .unwrap_or(remaining);

    if yaml_content.trim().is_empty() {
        return Ok((Some(Frontmatter::default()), remaining));
    }

    let frontmatter = serde_yaml::from_str::<Frontmatter>(yaml_content)?;
    Ok((Some(frontmatter), remaining))
}

/// Strips an opening `---` line, returning the text after its line ending.
fn strip_delimiter_line(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Finds the closing `---` delimiter line.
///
/// Returns the byte offset where the delimiter line starts and the offset just past its
/// line ending. The delimiter must occupy a whole line.
fn find_closing_delimiter(content: &str) -> Option<(usize, usize)> {
    let mut pos = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Some((pos, pos + line.len()));
        }
        pos += line.len();
    }
    None
}
