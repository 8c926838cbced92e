//! Pure text rewrite of a whole document.

use std::borrow::Cow;

use super::types::Rewrite;
use crate::frontmatter::parser::DELIMITER;
use crate::frontmatter::{assemble, build_front_matter, ensure_byline, split_front_matter};

/// Normalize author metadata in `text`.
///
/// The front matter (created when missing) gets its `author` field set, and
/// the body is placed after a single blank line. With `insert_byline` the
/// assembled document is split again and its body gets a byline unless one
/// already sits within the inspection window. A body that already has a
/// byline is joined back as split, so it keeps the blank line it starts
/// with on top of the one following the closing delimiter.
pub fn rewrite(text: &str, author: &str, insert_byline: bool) -> Rewrite {
    let parsed = split_front_matter(text);
    let front_matter = build_front_matter(parsed.front_matter.as_ref(), author);
    let content = assemble(&front_matter, &parsed.body);

    if !insert_byline {
        return Rewrite { content, byline_inserted: false };
    }

    let body = split_front_matter(&content).body;
    let ensured = ensure_byline(&body, author);
    let byline_inserted = matches!(ensured, Cow::Owned(_));
    let content = format!("{DELIMITER}{front_matter}{DELIMITER}\n{ensured}");

    Rewrite { content, byline_inserted }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_author_to_existing_block() {
        let result = rewrite("---\ntitle: Hello\n---\nBody text.\n", "Jane", false);
        assert_eq!(result.content, "---\ntitle: Hello\nauthor: Jane\n---\n\nBody text.\n");
        assert!(!result.byline_inserted);
    }

    #[test]
    fn adds_byline_after_block() {
        let result = rewrite("---\ntitle: Hello\n---\nBody text.\n", "Jane", true);
        assert_eq!(
            result.content,
            "---\ntitle: Hello\nauthor: Jane\n---\n\n*作者：Jane*\n\nBody text.\n"
        );
        assert!(result.byline_inserted);
    }

    #[test]
    fn existing_byline_keeps_leading_blank_line() {
        let result = rewrite("---\nauthor: Old\n---\n\n*作者：Old*\n\nText\n", "Jane", true);
        assert_eq!(result.content, "---\nauthor: Jane\n---\n\n\n*作者：Old*\n\nText\n");
        assert!(!result.byline_inserted);
    }

    #[test]
    fn empty_document_gets_front_matter_and_byline() {
        let result = rewrite("", "Jane", true);
        assert_eq!(result.content, "---\nauthor: Jane\n---\n\n*作者：Jane*\n\n");
    }
}
