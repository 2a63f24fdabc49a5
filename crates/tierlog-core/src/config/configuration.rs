//! The configuration value and its lazily opened streams

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use super::traits::Validate;
use crate::level::Severity;
use crate::stream::SharedStream;

/// The process-level streams a configuration falls back to
///
/// Defaults to the real stdout/stderr. Tests swap in memory streams.
#[derive(Debug, Clone)]
pub struct DefaultStreams {
    pub stdout: SharedStream,
    pub stderr: SharedStream,
}

impl Default for DefaultStreams {
    fn default() -> Self {
        Self {
            stdout: SharedStream::stdout(),
            stderr: SharedStream::stderr(),
        }
    }
}

/// Logger configuration
///
/// # Example
///
/// ```no_run
/// use tierlog_core::Configuration;
///
/// let config = Configuration::new("debug")
///     .with_stdout_file("/var/log/app/out.log")
///     .with_stderr_file("/var/log/app/err.log");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Configuration {
    /// Threshold level name, matched case-insensitively
    #[serde(rename = "Level", alias = "level", default)]
    pub level: String,

    /// File backing the standard stream; empty means process stdout
    #[serde(
        rename = "StdOutFile",
        alias = "stdout_file",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stdout_file: Option<String>,

    /// File backing the error stream; empty means process stderr
    #[serde(
        rename = "StdErrFile",
        alias = "stderr_file",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stderr_file: Option<String>,

    #[serde(skip)]
    defaults: DefaultStreams,

    #[serde(skip)]
    stdout: OnceCell<SharedStream>,

    #[serde(skip)]
    stderr: OnceCell<SharedStream>,
}

impl Configuration {
    /// Create a configuration writing to the process streams
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    /// Back the standard stream with a file
    pub fn with_stdout_file(mut self, path: impl Into<String>) -> Self {
        self.stdout_file = Some(path.into());
        self.stdout = OnceCell::new();
        self
    }

    /// Back the error stream with a file
    pub fn with_stderr_file(mut self, path: impl Into<String>) -> Self {
        self.stderr_file = Some(path.into());
        self.stderr = OnceCell::new();
        self
    }

    /// Replace the process stdout/stderr used as fallbacks and for diagnostics
    pub fn with_default_streams(mut self, stdout: SharedStream, stderr: SharedStream) -> Self {
        self.defaults = DefaultStreams { stdout, stderr };
        self.stdout = OnceCell::new();
        self.stderr = OnceCell::new();
        self
    }

    /// The fallback streams
    pub fn default_streams(&self) -> &DefaultStreams {
        &self.defaults
    }

    /// The configured threshold, or `None` if the level name is unrecognized
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_name(&self.level)
    }

    /// Standard stream, opened on first use and memoized
    pub fn stdout(&self) -> &SharedStream {
        self.stdout.get_or_init(|| {
            SharedStream::open_or_fallback(
                self.stdout_file.as_deref(),
                &self.defaults.stdout,
                &self.defaults.stderr,
            )
        })
    }

    /// Error stream, opened on first use and memoized
    pub fn stderr(&self) -> &SharedStream {
        self.stderr.get_or_init(|| {
            SharedStream::open_or_fallback(
                self.stderr_file.as_deref(),
                &self.defaults.stderr,
                &self.defaults.stderr,
            )
        })
    }
}

impl Validate for Configuration {
    fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.level.trim().is_empty() {
            problems.push("Level must not be empty".to_string());
        } else if self.severity().is_none() {
            problems.push(format!(
                "Level '{}' is not one of FATAL, ERROR, WARN, INFO, DEBUG, TRACE",
                self.level
            ));
        }

        problems
    }
}
