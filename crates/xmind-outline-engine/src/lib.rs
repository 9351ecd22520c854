pub mod artifact;
pub mod compile;
pub mod error;
pub mod models;
pub mod parsing;
pub mod validate;
pub mod xmind;

// Re-export key types for easier usage
pub use artifact::{Artifact, artifact_filename};
pub use compile::{SAMPLE_OUTLINE, compile, compile_at};
pub use error::{CompileError, PackagingError, SerializationError};
pub use models::OutlineNode;
pub use parsing::parse_outline;
pub use validate::{Validation, validate};
pub use xmind::{assemble, serialize_topic};
