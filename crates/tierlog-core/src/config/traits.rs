//! Validation trait and configuration errors

/// Validation for configuration values
///
/// Implementations report every problem they find rather than stopping at the
/// first one.
pub trait Validate {
    /// Describe every problem with this value; empty when valid
    fn validate(&self) -> Vec<String>;

    /// Whether [`Validate::validate`] found nothing
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Errors that can occur while loading or checking a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid logger configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
