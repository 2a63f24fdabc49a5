//! tierlog core
//!
//! A small leveled line logger. A [`Configuration`] names the threshold level
//! and optional files for the standard and error streams; a [`Logger`] writes
//! prefixed lines at or above that threshold.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tierlog_core::{log_info, log_warn, Configuration, Logger};
//!
//! let config = Arc::new(Configuration::from_file("logger.yaml")?);
//! let logger = Logger::new("ingest", config)?;
//!
//! log_info!(logger, "loaded {} records", 120);
//! log_warn!(logger, "skipped {} malformed rows", 2);
//! # Ok::<(), tierlog_core::ConfigError>(())
//! ```
//!
//! Lines look like `2024/01/02 03:04:05   INFO [ingest] loaded 120 records`.
//! At `DEBUG` and `TRACE` thresholds each line also carries the caller's
//! `file:line`.

pub mod level;
pub mod config;
pub mod stream;
pub mod logging;

pub use level::{Severity, ParseSeverityError};

pub use config::{Configuration, DefaultStreams, Validate, ConfigError, ConfigResult};

pub use stream::{SharedStream, MemoryStream, StreamTarget};

pub use logging::{Logger, LineWriter, FormatFlags, UNNAMED_LOGGER};
