//! Severity levels and level-name parsing

use std::fmt;
use std::str::FromStr;

/// Log severity, most severe first.
///
/// The ordering follows the declaration order, so `Fatal < Error < ... < Trace`.
/// A message is emitted when its severity is less than or equal to the
/// logger's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Fatal = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Severity {
    /// All severities, most severe first
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }

    /// Look up a severity by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Severity> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(name))
    }

    /// Resolve a level name, falling back to [`Severity::Error`] for
    /// anything unrecognized.
    pub fn resolve(name: &str) -> Severity {
        Self::from_name(name).unwrap_or(Severity::Error)
    }

    /// Whether a message at `self` passes a logger configured at `threshold`
    pub fn passes(&self, threshold: Severity) -> bool {
        *self <= threshold
    }

    /// Whether this severity, used as a threshold, turns on caller locations
    pub fn is_verbose(&self) -> bool {
        *self >= Severity::Debug
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing an unrecognized level name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized log level '{0}', expected one of FATAL, ERROR, WARN, INFO, DEBUG, TRACE")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::from_name(s).ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::Fatal < Severity::Error);
        assert!(Severity::Error < Severity::Warn);
        assert!(Severity::Warn < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
        assert!(Severity::Debug < Severity::Trace);
    }

    #[test]
    fn test_resolve_any_casing() {
        assert_eq!(Severity::resolve("Error"), Severity::Error);
        assert_eq!(Severity::resolve("wArn"), Severity::Warn);
        assert_eq!(Severity::resolve("infO"), Severity::Info);
        assert_eq!(Severity::resolve("DEBUG"), Severity::Debug);
        assert_eq!(Severity::resolve("trace"), Severity::Trace);
        assert_eq!(Severity::resolve("fatal"), Severity::Fatal);
    }

    #[test]
    fn test_resolve_unknown_is_error() {
        assert_eq!(Severity::resolve("blabla"), Severity::Error);
        assert_eq!(Severity::resolve(""), Severity::Error);
        assert!(Severity::from_name("AA").is_none());
        assert!(Severity::from_name(" info ").is_none());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warn));
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_passes_is_inclusive() {
        assert!(Severity::Info.passes(Severity::Info));
        assert!(Severity::Error.passes(Severity::Info));
        assert!(!Severity::Debug.passes(Severity::Info));
        assert!(Severity::Fatal.passes(Severity::Fatal));
        assert!(!Severity::Error.passes(Severity::Fatal));
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:>6}", Severity::Warn), "  WARN");
        assert_eq!(format!("{:>6}", Severity::Error), " ERROR");
        assert_eq!(Severity::Debug.to_string(), "DEBUG");
    }
}
