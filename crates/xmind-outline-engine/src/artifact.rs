use chrono::{DateTime, Utc};

pub const XMIND_EXTENSION: &str = "xmind";
pub const DEFAULT_BASE_NAME: &str = "outline";

/// A finished document ready to hand to whoever saves or downloads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Builds `<base>-<timestamp>.xmind`.
///
/// The timestamp is ISO-8601 UTC with `:` and `.` replaced by `-` so names
/// sort by creation time and are valid on every filesystem. A blank base
/// falls back to [`DEFAULT_BASE_NAME`].
pub fn artifact_filename(base: &str, at: DateTime<Utc>) -> String {
    let base = clean_base_name(base);
    let timestamp = at.format("%Y-%m-%dT%H-%M-%S-%3fZ");
    format!("{base}-{timestamp}.{XMIND_EXTENSION}")
}

fn clean_base_name(base: &str) -> String {
    let base = base.trim();
    let base = base
        .strip_suffix(".xmind")
        .or_else(|| base.strip_suffix(".XMIND"))
        .unwrap_or(base)
        .trim();
    if base.is_empty() {
        return DEFAULT_BASE_NAME.to_string();
    }
    base.replace(['/', '\\'], "-")
}
