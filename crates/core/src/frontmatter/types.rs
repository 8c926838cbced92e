//! Front-matter types and data structures.

use std::fmt;

/// Raw front-matter block.
///
/// Kept as the original lines rather than parsed YAML so that unknown keys,
/// comments, and formatting survive a rewrite byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    /// Lines between the delimiters, without line terminators.
    pub lines: Vec<String>,
}

impl FrontMatter {
    /// Build a front-matter block from the text found between the delimiters.
    pub fn from_text(text: &str) -> Self {
        Self { lines: text.lines().map(ToOwned::to_owned).collect() }
    }
}

/// Renders the block as it sits between the delimiters: every line
/// terminated by `\n`.
impl fmt::Display for FrontMatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Result of splitting front matter from markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Front matter (if a closed block opens the document).
    pub front_matter: Option<FrontMatter>,
    /// The markdown body (everything after the closing delimiter line).
    pub body: String,
}
