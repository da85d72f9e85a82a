use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::errors::AppError;

/// The one secret every run needs.
pub const API_KEY_FIELD: &str = "groq_ai_api_key";

/// Pulls the API key out of the loaded secrets mapping.
///
/// Missing key, null, empty string, `false` and zero are all rejected.
/// `path` is only used in the error text.
pub fn extract_api_key(secrets: &Mapping, path: &Path) -> Result<String, AppError> {
    let value = secrets.get(API_KEY_FIELD).ok_or_else(|| {
        AppError::Config(format!(
            "Missing secret '{API_KEY_FIELD}' in file {}",
            path.display()
        ))
    })?;

    scalar_to_key(value).ok_or_else(|| {
        AppError::Config(format!(
            "Groq Ai API key cannot be empty in secrets file {}.",
            path.display()
        ))
    })
}

fn scalar_to_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Tagged(tagged) => scalar_to_key(&tagged.value),
        _ => None,
    }
}
