//! OpenAPI document loading.
//!
//! The document is read from a YAML file once at startup and held unchanged
//! for the lifetime of the process. Errors here are fatal: the server must
//! not start without the schema it was asked to publish.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load the OpenAPI document from a YAML file.
///
/// The top level must be a mapping; anything else is rejected so the
/// introspection endpoint never serves a document that is not an object.
pub fn load_schema<P: AsRef<Path>>(path: P) -> AppResult<Value> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::SchemaRead(format!("{}: {}", path.display(), e)))?;

    let document: Value = serde_yaml::from_str(&raw)
        .map_err(|e| AppError::SchemaParse(format!("{}: {}", path.display(), e)))?;

    if !document.is_object() {
        return Err(AppError::SchemaInvalid(format!(
            "{}: top level must be a mapping",
            path.display()
        )));
    }

    Ok(document)
}
