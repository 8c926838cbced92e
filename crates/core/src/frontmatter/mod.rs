//! Front-matter splitting, author rewriting, and byline insertion.
//!
//! This module provides functionality to:
//! - Split a `---` delimited front-matter block from a markdown document
//! - Set the `author` field while keeping every other line untouched
//! - Insert a `*作者：<name>*` byline at the top of the body when missing
//! - Assemble the document back into text

pub mod modifier;
pub mod parser;
pub mod serializer;
pub mod types;

pub use modifier::{BYLINE_WINDOW, build_front_matter, byline_for, ensure_byline, has_byline};
pub use parser::split_front_matter;
pub use serializer::assemble;
pub use types::{FrontMatter, ParsedDocument};
