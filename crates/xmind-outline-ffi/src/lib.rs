//! UniFFI bindings for xmind-outline UI hosts
//!
//! Exposes the two operations a front end needs: advisory validation for live
//! feedback while typing, and compiling an outline into `.xmind` bytes plus a
//! filename. Saving or downloading the bytes stays with the host.

use xmind_outline_engine::{Artifact, CompileError, Validation};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    /// The outline text needs fixing by the user
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
    /// Compilation failed for reasons outside the user's control
    #[error("Compile failed: {reason}")]
    CompileFailed { reason: String },
}

impl From<CompileError> for FfiError {
    fn from(e: CompileError) -> Self {
        let reason = e.to_string();
        if e.is_input_error() {
            FfiError::InvalidInput { reason }
        } else {
            FfiError::CompileFailed { reason }
        }
    }
}

// ============ DTOs ============

/// Advisory verdict on outline text.
#[derive(Debug, uniffi::Record)]
pub struct ValidationDto {
    pub ok: bool,
    pub message: String,
}

impl ValidationDto {
    fn from_engine(v: Validation) -> Self {
        Self {
            ok: v.ok,
            message: v.message,
        }
    }
}

/// A compiled `.xmind` document.
#[derive(Debug, uniffi::Record)]
pub struct ArtifactDto {
    /// Zip archive bytes
    pub bytes: Vec<u8>,
    /// `<base>-<timestamp>.xmind`
    pub filename: String,
}

impl ArtifactDto {
    fn from_engine(a: Artifact) -> Self {
        Self {
            bytes: a.bytes,
            filename: a.filename,
        }
    }
}

// ============ Standalone Functions ============

#[uniffi::export]
pub fn validate_outline(text: String) -> ValidationDto {
    ValidationDto::from_engine(xmind_outline_engine::validate(&text))
}

#[uniffi::export]
pub fn compile_outline(text: String, base_filename: String) -> Result<ArtifactDto, FfiError> {
    let artifact = xmind_outline_engine::compile(&text, &base_filename)?;
    Ok(ArtifactDto::from_engine(artifact))
}

#[uniffi::export]
pub fn sample_outline() -> String {
    xmind_outline_engine::SAMPLE_OUTLINE.to_string()
}
