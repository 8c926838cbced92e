//! Document assembly back to markdown.

use super::parser::DELIMITER;
use super::types::FrontMatter;

/// Join a front-matter block and a body into a document.
///
/// The block is wrapped in `---` lines and followed by exactly one blank
/// line; blank lines the body starts with are dropped.
pub fn assemble(front_matter: &FrontMatter, body: &str) -> String {
    format!("{DELIMITER}{front_matter}{DELIMITER}\n{}", body.trim_start_matches('\n'))
}
