use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::errors::AppError;

/// Parses a YAML file whose top level must be a mapping.
///
/// Every failure is a `Config` error: the file being absent, a syntax error,
/// or a document that is not a mapping (an empty file included).
pub fn load_yaml(path: &Path) -> Result<Mapping, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::Config(format!(
                "File not found: {}",
                path.display()
            )))
        }
        Err(e) => {
            return Err(AppError::Config(format!(
                "Error reading file {}: {e}",
                path.display()
            )))
        }
    };

    let value: Value = serde_yaml::from_str(&raw).map_err(|e| {
        AppError::Config(format!("Error reading file {}: {e}", path.display()))
    })?;

    match value {
        Value::Mapping(mapping) => {
            debug!("Loaded {} top-level keys from {}", mapping.len(), path.display());
            Ok(mapping)
        }
        _ => Err(AppError::Config(format!(
            "Expected a mapping in file {}",
            path.display()
        ))),
    }
}

/// Reads a whole text file. An absent file is `NotFound`; any other I/O
/// failure is unexpected.
pub fn read_text_file(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::NotFound(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}
