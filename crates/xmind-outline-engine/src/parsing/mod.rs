//! # Outline Parsing
//!
//! Two-phase parsing of tab-indented outlines.
//!
//! 1. **Line Classification** (`classify`): each line is reduced to its
//!    indentation level, blank flag and trimmed content
//! 2. **Tree Construction** (`builder`): an `OutlineBuilder` keeps a stack of
//!    open ancestors keyed by level and attaches nodes as frames close
//!
//! Labels are split from a line's content by `labels::split_labels`.
//!
//! ## Placement Rules
//!
//! - A level 0 line becomes the root, replacing any earlier root and its subtree
//! - A deeper line becomes a child of the nearest open line with a lower level
//! - Deeper lines seen before any root are dropped along with their descendants
//! - Blank lines are ignored

pub mod builder;
pub mod classify;
pub mod labels;

pub use builder::OutlineBuilder;
pub use classify::{LineClass, classify, indent_level};
pub use labels::split_labels;

use crate::error::CompileError;
use crate::models::OutlineNode;

/// Parses outline text into a tree rooted at the last level 0 line.
pub fn parse_outline(text: &str) -> Result<OutlineNode, CompileError> {
    if text.trim().is_empty() {
        return Err(CompileError::EmptyInput);
    }

    let mut builder = OutlineBuilder::new();
    for line in text.lines() {
        builder.push(&classify(line));
    }

    if builder.dropped() > 0 {
        log::debug!("dropped {} line(s) with no root above them", builder.dropped());
    }

    builder.finish().ok_or(CompileError::NoRootLine)
}
