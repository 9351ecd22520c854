use chrono::{DateTime, Utc};

use crate::{
    artifact::{Artifact, artifact_filename},
    error::CompileError,
    parsing::parse_outline,
    xmind::assemble,
};

/// Example outline in the shape a text-generation agent typically returns.
pub const SAMPLE_OUTLINE: &str = "BusinessPropertyInsurance
\tCoverage
\t\tRule: FireCoverage
\t\tRule: FloodCoverage
\tExclusions
\t\tCondition: WearAndTearExcluded
\tLimits
\t\tLimit: MaxPayoutPerLocation_50000000
\tConditions
\t\tCondition: FireSuppressionRequired";

/// Compiles outline text into an `.xmind` archive named after `base_name`.
pub fn compile(text: &str, base_name: &str) -> Result<Artifact, CompileError> {
    compile_at(text, base_name, Utc::now())
}

/// [`compile`] with the filename timestamp supplied by the caller.
pub fn compile_at(
    text: &str,
    base_name: &str,
    at: DateTime<Utc>,
) -> Result<Artifact, CompileError> {
    let root = parse_outline(text)?;
    let bytes = assemble(&root)?;
    let filename = artifact_filename(base_name, at);

    log::debug!(
        "compiled {:?}: {} node(s), {} label(s), height {}, {} bytes",
        filename,
        root.node_count(),
        root.label_count(),
        root.height(),
        bytes.len()
    );

    Ok(Artifact { bytes, filename })
}
