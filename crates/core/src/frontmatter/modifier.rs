//! Front-matter author rewriting and body byline insertion.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::types::FrontMatter;

/// Number of body lines inspected when looking for an existing byline.
pub const BYLINE_WINDOW: usize = 20;

static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^author\s*:\s*.*$").unwrap());

static BYLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*作者：.*\*\s*$").unwrap());

fn author_line(author: &str) -> String {
    format!("author: {author}")
}

/// The byline text for `author`, without a line terminator.
pub fn byline_for(author: &str) -> String {
    format!("*作者：{author}*")
}

/// Set the `author` field of a front-matter block.
///
/// With no existing block a new one holding only the author is returned.
/// Otherwise the first top-level `author:` line (key matched
/// case-insensitively) is rewritten in place, later duplicates are dropped,
/// and every other line is kept verbatim. A block without an author line
/// gets one appended.
pub fn build_front_matter(existing: Option<&FrontMatter>, author: &str) -> FrontMatter {
    let Some(existing) = existing else {
        return FrontMatter { lines: vec![author_line(author)] };
    };

    let mut lines = Vec::with_capacity(existing.lines.len() + 1);
    let mut updated = false;

    for line in &existing.lines {
        if !AUTHOR_RE.is_match(line) {
            lines.push(line.clone());
        } else if !updated {
            tracing::debug!(previous = %line, "replacing author line");
            lines.push(author_line(author));
            updated = true;
        } else {
            tracing::debug!(duplicate = %line, "dropping duplicate author line");
        }
    }

    if !updated {
        lines.push(author_line(author));
    }

    FrontMatter { lines }
}

/// Whether a byline sits within the first [`BYLINE_WINDOW`] lines of `body`,
/// ignoring leading blank lines.
pub fn has_byline(body: &str) -> bool {
    body.trim_start_matches('\n')
        .lines()
        .take(BYLINE_WINDOW)
        .any(|line| BYLINE_RE.is_match(line.trim()))
}

/// Make sure `body` opens with a byline.
///
/// An existing byline is left alone whatever name it carries and the body
/// comes back borrowed and untouched. Otherwise the byline for `author` and a
/// blank line are put in front of the body, whose leading blank lines are
/// dropped.
pub fn ensure_byline<'a>(body: &'a str, author: &str) -> Cow<'a, str> {
    if has_byline(body) {
        return Cow::Borrowed(body);
    }
    Cow::Owned(format!("{}\n\n{}", byline_for(author), body.trim_start_matches('\n')))
}
