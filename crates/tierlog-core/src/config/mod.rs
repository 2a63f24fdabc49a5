//! Logger configuration
//!
//! A [`Configuration`] names the threshold level and the optional files that
//! back the standard and error streams. It can be built in code, loaded from a
//! YAML file, or read from environment variables.

mod traits;
mod configuration;
mod file;

pub use traits::{Validate, ConfigError, ConfigResult};
pub use configuration::{Configuration, DefaultStreams};
