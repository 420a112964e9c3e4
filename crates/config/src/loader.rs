//! Template mapping loader
//!
//! Reads the parameters file and checks that it is a JSON object whose values
//! are all strings. Key order from the file is preserved.

use serde_json::Value;
use ssmenv_core::{Error, Result, TemplateMapping};
use std::io::ErrorKind;
use std::path::Path;

/// Loads [`TemplateMapping`]s from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateLoader;

impl TemplateLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse the template mapping at `path`
    pub fn load(&self, path: &Path) -> Result<TemplateMapping> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::file_not_found(path),
            _ => Error::file_system(path, "read parameters file", e),
        })?;

        let template = self.parse(path, &bytes)?;
        tracing::debug!(
            path = %path.display(),
            entries = template.len(),
            "Loaded template mapping"
        );
        Ok(template)
    }

    /// Parse raw file content; `path` is only used for error context
    pub fn parse(&self, path: &Path, content: &[u8]) -> Result<TemplateMapping> {
        let value: Value =
            serde_json::from_slice(content).map_err(|e| Error::invalid_format(path, e))?;

        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(Error::invalid_schema(
                    path,
                    format!("expected an object, found {}", json_kind(&other)),
                ))
            }
        };

        let mut template = TemplateMapping::with_capacity(object.len());
        for (name, value) in object {
            match value {
                Value::String(raw) => {
                    template.insert(name, raw);
                }
                other => {
                    return Err(Error::invalid_schema(
                        path,
                        format!(
                            "value of '{name}' must be a string, found {}",
                            json_kind(&other)
                        ),
                    ))
                }
            }
        }

        Ok(template)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
