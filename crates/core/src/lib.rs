//! Core library for mdbyline.
//!
//! Keeps the `author` field of a markdown document's front matter in sync
//! with a given name and, on request, puts a `*作者：<name>*` byline at the
//! top of the body.

pub mod config;
pub mod document;
pub mod frontmatter;
