//! Front-matter and header extraction for sitetoc.
//!
//! This crate turns documentation sources into the metadata a table of contents needs:
//! - YAML frontmatter extraction (title override; other keys are ignored)
//! - Heading extraction with links and styling collapsed to their visible text
//! - Title resolution (frontmatter title, first heading, or filename)

#![warn(missing_docs)]

mod error;
mod frontmatter;
mod headers;
mod parse;

pub use error::DocumentError;
pub use frontmatter::{Frontmatter, parse_frontmatter};
pub use headers::{Header, Inline, collapse, extract_heading_trees, extract_headers};
pub use parse::{ExtractedDocument, parse_file, parse_markdown};
