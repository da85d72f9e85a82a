use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::errors::AppError;

pub const GENERATED_RESUME_FILE: &str = "generated_resume.tex";

/// Writes `content` to `path`, creating or truncating it.
/// Any I/O failure (permissions, disk full) is unexpected.
pub fn write_resume(path: &Path, content: &str) -> Result<(), AppError> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    println!("Resume saved to {}", path.display());
    Ok(())
}
