//! Output formatting for resolution results.
//!
//! Results can be rendered as human-readable text blocks, a pretty JSON
//! array, or a YAML sequence.

mod formatters;

use crate::path::ResolutionResult;
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter, YamlFormatter};

/// Trait for rendering resolution results.
pub trait OutputFormatter {
    /// Format the given results into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, results: &[ResolutionResult]) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `key: value` block per result.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
    /// YAML sequence.
    Yaml,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use sandpath::output::OutputFormat;
    /// use sandpath::{PathType, ResolutionResult};
    ///
    /// let results = vec![ResolutionResult::new(PathType::Absolute, "/etc")];
    /// let json = OutputFormat::Json.create_formatter().format(&results).unwrap();
    /// assert!(json.contains("\"originalPath\": \"/etc\""));
    /// ```
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}
