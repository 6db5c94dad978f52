//! Output formatter implementations.

use crate::path::ResolutionResult;
use crate::{Error, Result};

use super::OutputFormatter;

/// Placeholder for absent optional fields in text output.
const NONE: &str = "-";

/// Formatter for human-readable `key: value` blocks.
///
/// Blocks are separated by a blank line.
pub struct TextFormatter;

impl TextFormatter {
    fn block(result: &ResolutionResult) -> String {
        let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| NONE.to_string());
        let error = result
            .error
            .as_ref()
            .map_or_else(|| NONE.to_string(), ToString::to_string);

        [
            format!("originalPath: {}", result.original_path),
            format!(
                "pathType: {} ({})",
                result.path_type,
                result.path_type.description()
            ),
            format!("resolvedPath: {}", optional(&result.resolved_path)),
            format!("canonicalPath: {}", optional(&result.canonical_path)),
            format!("exists: {}", result.exists),
            format!("isDirectory: {}", result.is_directory),
            format!("isReadable: {}", result.is_readable),
            format!("isWritable: {}", result.is_writable),
            format!("error: {error}"),
        ]
        .join("\n")
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[ResolutionResult]) -> Result<String> {
        Ok(results
            .iter()
            .map(Self::block)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

/// Formatter for a pretty-printed JSON array.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[ResolutionResult]) -> Result<String> {
        serde_json::to_string_pretty(results).map_err(|e| Error::Serialization {
            format: "json",
            reason: e.to_string(),
        })
    }
}

/// Formatter for a YAML sequence.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, results: &[ResolutionResult]) -> Result<String> {
        serde_yaml::to_string(results).map_err(|e| Error::Serialization {
            format: "yaml",
            reason: e.to_string(),
        })
    }
}
