use thiserror::Error;

/// Errors produced while turning outline text into an XMind archive.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Please enter some text to convert")]
    EmptyInput,
    #[error("Text must have at least one root-level item (no tabs)")]
    NoRootLine,
    #[error("Failed to serialize outline: {0}")]
    Serialization(#[from] SerializationError),
    #[error("Failed to package archive: {0}")]
    Packaging(#[from] PackagingError),
}

impl CompileError {
    /// True when the user can fix the problem by editing the outline text.
    pub fn is_input_error(&self) -> bool {
        matches!(self, CompileError::EmptyInput | CompileError::NoRootLine)
    }
}

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("could not allocate a unique topic id after {attempts} attempts")]
    IdsExhausted { attempts: usize },
    #[error("formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

#[derive(Debug, Error)]
pub enum PackagingError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
