//! The leveled logger

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use super::format::FormatFlags;
use super::writer::LineWriter;
use crate::config::{ConfigError, ConfigResult, Configuration, Validate};
use crate::level::Severity;

/// Name used when a logger is created with an empty one
pub const UNNAMED_LOGGER: &str = "UnnamedLogger";

/// Leveled logger writing one line per call
///
/// Fatal, error and warning lines go to the configuration's error stream; the
/// rest go to its standard stream. When the threshold is `DEBUG` or `TRACE`,
/// every line is annotated with the caller's `file:line`.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use tierlog_core::{log_info, Configuration, Logger};
///
/// let config = Arc::new(Configuration::new("info"));
/// let logger = Logger::new("worker", config)?;
/// log_info!(logger, "started {} threads", 4);
/// # Ok::<(), tierlog_core::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct Logger {
    name: String,
    threshold: Severity,
    flags: FormatFlags,
    writers: [LineWriter; 6],
    configuration: Arc<Configuration>,
}

impl Logger {
    /// Create a logger stamping lines with date and time
    pub fn new(name: &str, configuration: Arc<Configuration>) -> ConfigResult<Self> {
        Self::with_flags(name, configuration, std::iter::empty())
    }

    /// Create a logger with the union of `flags`, or date and time if empty.
    ///
    /// Fails with [`ConfigError::Invalid`] if the configuration does not validate.
    pub fn with_flags(
        name: &str,
        configuration: Arc<Configuration>,
        flags: impl IntoIterator<Item = FormatFlags>,
    ) -> ConfigResult<Self> {
        let problems = configuration.validate();
        if !problems.is_empty() {
            return Err(ConfigError::Invalid(problems));
        }

        let name = match name.trim() {
            "" => UNNAMED_LOGGER.to_string(),
            _ => name.to_string(),
        };
        let flags = FormatFlags::combine(flags);
        let threshold = Severity::resolve(&configuration.level);

        let writers = Severity::ALL.map(|severity| {
            let stream = match severity {
                Severity::Fatal | Severity::Error | Severity::Warn => configuration.stderr(),
                Severity::Info | Severity::Debug | Severity::Trace => configuration.stdout(),
            };
            LineWriter::new(severity, &name, flags, stream.clone())
        });

        Ok(Self {
            name,
            threshold,
            flags,
            writers,
            configuration,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn flags(&self) -> FormatFlags {
        self.flags
    }

    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.configuration
    }

    /// The writer for a severity
    pub fn writer(&self, severity: Severity) -> &LineWriter {
        &self.writers[severity as usize]
    }

    /// Whether a message at `severity` would be written
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.passes(self.threshold)
    }

    fn annotates_location(&self) -> bool {
        self.flags.source_location || self.threshold.is_verbose()
    }

    /// Write at an arbitrary severity. `Fatal` goes through [`Logger::fatal`]
    /// and exits the process.
    #[track_caller]
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if severity == Severity::Fatal {
            self.fatal(args);
        }
        self.emit(severity, Location::caller(), args);
    }

    fn emit(&self, severity: Severity, caller: &Location<'_>, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }
        let location = self.annotates_location().then_some(caller);
        self.writer(severity).write(location, args);
    }

    /// Write a fatal line, flush, and exit the process with status 1
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let caller = Location::caller();
        let writer = self.writer(Severity::Fatal);
        writer.write(self.annotates_location().then_some(caller), args);
        writer.stream().flush();
        std::process::exit(1)
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Error, Location::caller(), args);
    }

    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warn, Location::caller(), args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, Location::caller(), args);
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Debug, Location::caller(), args);
    }

    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Trace, Location::caller(), args);
    }
}
