//! Logging infrastructure for the sandpath library.
//!
//! Library code logs through the `log` facade. This module supplies the
//! stderr backend the CLI installs, and maps the user-facing verbosity
//! levels onto `log` filters.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_ENV: &str = "SANDPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use sandpath::LogLevel;
///
/// let quiet = LogLevel::Quiet;
/// let normal = LogLevel::Normal;
/// let verbose = LogLevel::Verbose;
///
/// assert!(quiet < normal);
/// assert!(normal < verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Errors only.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use sandpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter this level enables.
    ///
    /// # Examples
    ///
    /// ```
    /// use log::LevelFilter;
    /// use sandpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::Quiet.to_level_filter(), LevelFilter::Error);
    /// assert_eq!(LogLevel::Verbose.to_level_filter(), LevelFilter::Debug);
    /// ```
    #[must_use]
    pub const fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Error,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }

    /// Pick a level from CLI flags and the environment.
    ///
    /// The priority order is:
    /// 1. CLI flags (verbose/quiet; verbose wins if both are set)
    /// 2. `SANDPATH_LOG_MODE` environment variable
    /// 3. Default (Normal)
    #[must_use]
    pub fn select(verbose: bool, quiet: bool) -> Self {
        if verbose {
            return Self::Verbose;
        }
        if quiet {
            return Self::Quiet;
        }

        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|value| Self::parse(&value).ok())
            .unwrap_or(Self::Normal)
    }
}

/// A `log` backend that writes `LEVEL: message` lines to stderr.
///
/// Filtering is left to `log::max_level`, which [`init_logger`] sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogger;

static STDERR_LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger and set the verbosity.
///
/// Safe to call more than once: the backend is installed on the first call
/// and later calls only adjust the level.
///
/// # Examples
///
/// ```
/// use sandpath::{init_logger, LogLevel};
///
/// let level = init_logger(true, false);
/// assert_eq!(level, LogLevel::Verbose);
/// assert_eq!(log::max_level(), log::LevelFilter::Debug);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = LogLevel::select(verbose, quiet);
    // Fails only if a logger is already installed; keep that one.
    let _ = log::set_logger(&STDERR_LOGGER);
    log::set_max_level(level.to_level_filter());
    level
}
