//! Cheap structural pre-check for live feedback while an outline is typed.
//!
//! This never builds a tree. An input that passes may still lose lines during
//! a full parse (for example deep lines above the first root).

use crate::parsing::indent_level;

pub const MSG_EMPTY: &str = "Please enter some text to convert";
pub const MSG_NO_ROOT: &str = "Text must have at least one root-level item (no tabs)";
pub const MSG_FLAT: &str = "Text should have tab-indented structure for best results";
pub const MSG_VALID: &str = "Valid input structure";

/// Advisory verdict on outline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub ok: bool,
    pub message: String,
}

impl Validation {
    fn valid(message: &str) -> Self {
        Self {
            ok: true,
            message: message.to_string(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            ok: false,
            message: message.to_string(),
        }
    }
}

pub fn validate(text: &str) -> Validation {
    if text.trim().is_empty() {
        return Validation::invalid(MSG_EMPTY);
    }

    let mut has_root = false;
    let mut has_nesting = false;
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        if indent_level(line) == 0 {
            has_root = true;
        } else {
            has_nesting = true;
        }
        if has_root && has_nesting {
            break;
        }
    }

    match (has_root, has_nesting) {
        (false, _) => Validation::invalid(MSG_NO_ROOT),
        (true, false) => Validation::valid(MSG_FLAT),
        (true, true) => Validation::valid(MSG_VALID),
    }
}
