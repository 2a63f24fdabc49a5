//! Loading configurations from YAML files and the environment
//!
//! Loading never validates; [`crate::Logger::new`] does that.

use std::fs;
use std::path::Path;

use super::configuration::Configuration;
use super::traits::ConfigResult;

impl Configuration {
    /// Parse a YAML document such as:
    ///
    /// ```yaml
    /// Level: DEBUG
    /// StdOutFile: /var/log/app/out.log
    /// StdErrFile: /var/log/app/err.log
    /// ```
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: Configuration = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Read and parse a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Serialize the textual fields back to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Read `<PREFIX>_LEVEL`, `<PREFIX>_STDOUT_FILE` and `<PREFIX>_STDERR_FILE`.
    ///
    /// Unset variables leave the corresponding field empty.
    pub fn from_env(prefix: &str) -> Self {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    fn from_lookup(prefix: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |suffix: &str| lookup(format!("{}_{}", prefix, suffix).as_str());

        let mut config = Configuration::new(var("LEVEL").unwrap_or_default());
        if let Some(path) = var("STDOUT_FILE") {
            config = config.with_stdout_file(path);
        }
        if let Some(path) = var("STDERR_FILE") {
            config = config.with_stderr_file(path);
        }
        config
    }
}
