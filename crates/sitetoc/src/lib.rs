//! sitetoc: table-of-contents indexes for versioned documentation.
//!
//! sitetoc reads the markdown and MDX pages of a documentation site, orders them by the
//! sidebar files kept next to the pages and writes one JSON index per documentation
//! version. The indexes map each page URL to its title, headings and sidebar category, and
//! drive search and navigation on the site.

#![warn(missing_docs)]

pub mod cli;
