//! Heading extraction from markdown content.
//!
//! Each heading's inline content is first built into a small [`Inline`] tree, then collapsed
//! into plain text. Links are unwrapped to their visible text, styling wrappers contribute
//! their children, and nodes without a textual value (images, raw HTML) contribute nothing.
//!
//! Inline HTML in a heading is treated as markup, not text: `# Hello <kbd>Ctrl</kbd>`
//! yields `Hello Ctrl`, the tags themselves are dropped. MDX pages render such tags as
//! components, so their markup never reaches the visible heading.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

/// A heading extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// The heading level (1-6 for h1-h6).
    pub level: u8,
    /// The collapsed heading text.
    pub text: String,
}

/// Inline content of a heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text, including inline code.
    Text(String),
    /// A link; only its children are visible.
    Link(Vec<Inline>),
    /// Emphasis, strong, strikethrough and other styling wrappers.
    Styled(Vec<Inline>),
    /// A node with no textual value.
    Opaque,
}

impl Inline {
    /// Appends the visible text of this node to `out`.
    fn collapse_into(&self, out: &mut String) {
        match self {
            Self::Text(value) => out.push_str(value),
            Self::Link(children) | Self::Styled(children) => {
                for child in children {
                    child.collapse_into(out);
                }
            }
            Self::Opaque => {}
        }
    }
}

/// Collapses a sequence of inline nodes into their visible text, preserving order.
pub fn collapse(children: &[Inline]) -> String {
    let mut out = String::new();
    for child in children {
        child.collapse_into(&mut out);
    }
    out
}

/// The kind of container an open inline frame will become once closed.
#[derive(Debug, Clone, Copy)]
enum FrameKind {
    /// The heading itself.
    Root,
    /// A link.
    Link,
    /// A styling wrapper.
    Styled,
    /// A container whose children are discarded (images).
    Opaque,
}

impl FrameKind {
    /// Classifies an inline container tag.
    fn of(tag: &Tag<'_>) -> Self {
        match tag {
            Tag::Link { .. } => Self::Link,
            Tag::Image { .. } => Self::Opaque,
            _ => Self::Styled,
        }
    }

    /// Wraps collected children into a node of this kind.
    fn close(self, children: Vec<Inline>) -> Inline {
        match self {
            Self::Link => Inline::Link(children),
            Self::Styled | Self::Root => Inline::Styled(children),
            Self::Opaque => Inline::Opaque,
        }
    }
}

/// Builds the inline tree of one heading from the event stream.
#[derive(Debug)]
struct HeadingBuilder {
    /// Level of the heading being built.
    level: u8,
    /// Open frames, innermost last. The first frame is the heading root.
    stack: Vec<(FrameKind, Vec<Inline>)>,
}

impl HeadingBuilder {
    /// Starts a heading at the given level.
    fn new(level: HeadingLevel) -> Self {
        Self {
            level: heading_level_to_u8(level),
            stack: vec![(FrameKind::Root, Vec::new())],
        }
    }

    /// Adds a leaf node to the innermost frame.
    fn push(&mut self, node: Inline) {
        if let Some((_, children)) = self.stack.last_mut() {
            children.push(node);
        }
    }

    /// Opens a nested inline container.
    fn open(&mut self, kind: FrameKind) {
        self.stack.push((kind, Vec::new()));
    }

    /// Closes the innermost nested container.
    fn close(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some((kind, children)) = self.stack.pop() {
            self.push(kind.close(children));
        }
    }

    /// Finishes the heading, closing any frames left open.
    fn finish(mut self) -> (u8, Vec<Inline>) {
        while self.stack.len() > 1 {
            self.close();
        }
        let children = self.stack.pop().map(|(_, c)| c).unwrap_or_default();
        (self.level, children)
    }
}

/// Parser options used for document bodies.
fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES
}

/// Extracts every heading of a markdown body as inline trees, in document order.
pub fn extract_heading_trees(content: &str) -> Vec<(u8, Vec<Inline>)> {
    let mut headings = Vec::new();
    let mut current: Option<HeadingBuilder> = None;

    for event in Parser::new_ext(content, parser_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some(HeadingBuilder::new(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(builder) = current.take() {
                    headings.push(builder.finish());
                }
            }
            event => {
                if let Some(builder) = current.as_mut() {
                    feed(builder, event);
                }
            }
        }
    }

    headings
}

/// Feeds one event from inside a heading into the builder.
fn feed(builder: &mut HeadingBuilder, event: Event<'_>) {
    match event {
        Event::Start(tag) => builder.open(FrameKind::of(&tag)),
        Event::End(_) => builder.close(),
        Event::Text(text) | Event::Code(text) => builder.push(Inline::Text(text.into_string())),
        Event::SoftBreak | Event::HardBreak => builder.push(Inline::Text(" ".to_string())),
        _ => builder.push(Inline::Opaque),
    }
}

/// Extracts all headings from a markdown body with their collapsed text.
pub fn extract_headers(content: &str) -> Vec<Header> {
    extract_heading_trees(content)
        .into_iter()
        .map(|(level, children)| Header {
            level,
            text: collapse(&children),
        })
        .collect()
}

/// Converts a pulldown_cmark HeadingLevel to a u8 (1-6).
fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(content: &str) -> Vec<String> {
        extract_headers(content).into_iter().map(|h| h.text).collect()
    }

    #[test]
    fn test_extract_headers() {
        let content = "# Heading 1\n\nSome text\n\n## Heading 2\n\nMore text";
        let headers = extract_headers(content);

        assert_eq!(
            headers,
            vec![
                Header {
                    level: 1,
                    text: "Heading 1".into()
                },
                Header {
                    level: 2,
                    text: "Heading 2".into()
                },
            ]
        );
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(texts("### Plain heading text"), vec!["Plain heading text"]);
    }

    #[test]
    fn test_inline_code_keeps_value() {
        assert_eq!(texts("# The `Result<T>` Type"), vec!["The Result<T> Type"]);
    }

    #[test]
    fn test_link_is_unwrapped() {
        assert_eq!(
            texts("## See [the guide](https://example.com/guide) first"),
            vec!["See the guide first"]
        );
    }

    #[test]
    fn test_link_wrapping_formatted_text() {
        assert_eq!(
            texts("## [`Js.log` and *friends*](/docs/api/js) overview"),
            vec!["Js.log and friends overview"]
        );
    }

    #[test]
    fn test_image_contributes_nothing() {
        assert_eq!(texts("# Logo ![alt text](logo.png) here"), vec!["Logo  here"]);
    }

    #[test]
    fn test_inline_html_contributes_nothing() {
        assert_eq!(texts("# Hello <span>world</span>"), vec!["Hello world"]);
    }

    #[test]
    fn test_inline_html_tags_are_dropped_around_text() {
        assert_eq!(texts("## Hello <kbd>Ctrl</kbd>"), vec!["Hello Ctrl"]);
    }

    #[test]
    fn test_setext_heading() {
        let headers = extract_headers("Title\n=====\n\nSub\n---\n");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].level, 1);
        assert_eq!(headers[1].level, 2);
        assert_eq!(headers[1].text, "Sub");
    }

    #[test]
    fn test_multiline_setext_heading_joins_lines() {
        assert_eq!(texts("First line\nsecond line\n===\n"), vec!["First line second line"]);
    }

    #[test]
    fn test_headings_inside_code_blocks_are_ignored() {
        let content = "# Real\n\n```\n# not a heading\n```\n";
        assert_eq!(texts(content), vec!["Real"]);
    }

    #[test]
    fn test_inline_tree_shape() {
        let trees = extract_heading_trees("# A [*b*](x)");
        assert_eq!(
            trees,
            vec![(
                1,
                vec![
                    Inline::Text("A ".into()),
                    Inline::Link(vec![Inline::Styled(vec![Inline::Text("b".into())])]),
                ]
            )]
        );
    }

    #[test]
    fn test_collapse_skips_opaque() {
        let children = vec![
            Inline::Text("a".into()),
            Inline::Opaque,
            Inline::Link(vec![Inline::Text("b".into()), Inline::Opaque]),
        ];
        assert_eq!(collapse(&children), "ab");
    }

    #[test]
    fn test_header_serializes_level_and_text() {
        let header = Header {
            level: 2,
            text: "Usage".into(),
        };
        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(json, r#"{"level":2,"text":"Usage"}"#);
    }
}
