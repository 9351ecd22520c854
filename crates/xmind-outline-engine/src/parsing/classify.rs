/// Classification of a single outline line containing only local facts.
///
/// This is phase 1 of outline parsing: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Number of leading tab characters. Spaces are not indentation.
    pub level: usize,
    /// Whether the line has no content after trimming whitespace.
    pub is_blank: bool,
    /// Line content with surrounding whitespace removed.
    pub content: &'a str,
}

/// Count of leading tabs on a line
pub fn indent_level(line: &str) -> usize {
    line.chars().take_while(|&c| c == '\t').count()
}

/// Classifies a line into a [`LineClass`].
///
/// Tabs after the leading run are ordinary text.
pub fn classify(line: &str) -> LineClass<'_> {
    let level = indent_level(line);
    let content = line.trim();

    LineClass {
        level,
        is_blank: content.is_empty(),
        content,
    }
}
