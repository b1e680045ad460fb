//! Write reports as JSON files.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::error::AppError;

/// Write any serializable report as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, value)
        .map_err(|e| AppError::new(2, format!("Failed to write JSON: {e}")))?;

    Ok(())
}

/// Render a report as pretty-printed JSON text (for stdout).
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::new(2, format!("Failed to encode JSON: {e}")))
}
