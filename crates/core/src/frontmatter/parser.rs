//! Front-matter splitting from markdown documents.

use super::types::{FrontMatter, ParsedDocument};

/// Opening and closing delimiter line.
pub(crate) const DELIMITER: &str = "---\n";

const CLOSING: &str = "\n---\n";

/// Split front matter from markdown content.
///
/// Front matter is only recognised when the document starts with a `---`
/// line and a later line consisting solely of `---` closes the block:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
/// A document without the opening line, or with an opening line that is
/// never closed, is returned whole as the body.
pub fn split_front_matter(content: &str) -> ParsedDocument {
    let Some((front_matter, body)) = find_block(content) else {
        return ParsedDocument { front_matter: None, body: content.to_string() };
    };

    tracing::debug!(lines = front_matter.lines().count(), "found front matter block");
    ParsedDocument {
        front_matter: Some(FrontMatter::from_text(front_matter)),
        body: body.to_string(),
    }
}

/// Locate the raw block text and the body that follows it.
fn find_block(content: &str) -> Option<(&str, &str)> {
    if !content.starts_with(DELIMITER) {
        return None;
    }

    // The newline ending the opening line may double as the start of the
    // closing match, so `---\n---\n` is an empty block.
    let search_from = DELIMITER.len() - 1;
    let end = search_from + content[search_from..].find(CLOSING)?;

    let front_matter = content.get(DELIMITER.len()..end).unwrap_or("");
    let body = &content[end + CLOSING.len()..];
    Some((front_matter, body))
}
