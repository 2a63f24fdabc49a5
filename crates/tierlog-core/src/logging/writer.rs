//! Prefixed line writer bound to one stream

use std::fmt::{self, Write as _};
use std::panic::Location;

use time::OffsetDateTime;

use super::format::FormatFlags;
use crate::level::Severity;
use crate::stream::SharedStream;

/// Formats single lines with a fixed prefix and appends them to a stream
#[derive(Debug, Clone)]
pub struct LineWriter {
    severity: Severity,
    prefix: String,
    flags: FormatFlags,
    stream: SharedStream,
}

/// Fixed-width tag and logger name, e.g. `" ERROR [db]"`
pub fn create_prefix(severity: Severity, name: &str) -> String {
    format!("{:>6} [{}]", severity, name)
}

impl LineWriter {
    pub fn new(severity: Severity, name: &str, flags: FormatFlags, stream: SharedStream) -> Self {
        Self {
            severity,
            prefix: create_prefix(severity, name),
            flags,
            stream,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn stream(&self) -> &SharedStream {
        &self.stream
    }

    /// Build the full line, newline included
    pub fn format_line(
        &self,
        at: OffsetDateTime,
        location: Option<&Location<'_>>,
        args: fmt::Arguments<'_>,
    ) -> String {
        let mut line = self.flags.stamp(at);
        line.push_str(&self.prefix);
        line.push(' ');
        if let Some(location) = location {
            let _ = write!(line, "{}:{} ", location.file(), location.line());
        }
        let _ = write!(line, "{}", args);
        line.push('\n');
        line
    }

    /// Format and append one line
    pub fn write(&self, location: Option<&Location<'_>>, args: fmt::Arguments<'_>) {
        let at = if self.flags.has_stamp() {
            self.flags.now()
        } else {
            OffsetDateTime::UNIX_EPOCH
        };
        self.stream.write_line(&self.format_line(at, location, args));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::MemoryStream;
    use time::macros::datetime;

    #[test]
    fn test_prefix_is_right_aligned() {
        assert_eq!(create_prefix(Severity::Error, "db"), " ERROR [db]");
        assert_eq!(create_prefix(Severity::Warn, "db"), "  WARN [db]");
        assert_eq!(create_prefix(Severity::Info, "db"), "  INFO [db]");
        assert_eq!(create_prefix(Severity::Trace, "db"), " TRACE [db]");
    }

    #[test]
    fn test_format_line() {
        let memory = MemoryStream::new();
        let writer = LineWriter::new(Severity::Info, "api", FormatFlags::STANDARD, memory.stream());
        let at = datetime!(2024-05-06 07:08:09 UTC);

        let line = writer.format_line(at, None, format_args!("served {} requests", 3));
        assert_eq!(line, "2024/05/06 07:08:09   INFO [api] served 3 requests\n");
    }

    #[test]
    fn test_format_line_with_location() {
        let writer = LineWriter::new(
            Severity::Debug,
            "api",
            FormatFlags::NONE,
            MemoryStream::new().stream(),
        );
        let location = Location::caller();

        let line =
            writer.format_line(OffsetDateTime::UNIX_EPOCH, Some(location), format_args!("x"));
        assert_eq!(line, format!(" DEBUG [api] {}:{} x\n", location.file(), location.line()));
    }

    #[test]
    fn test_write_appends_one_line() {
        let memory = MemoryStream::new();
        let writer = LineWriter::new(Severity::Warn, "w", FormatFlags::NONE, memory.stream());

        writer.write(None, format_args!("one"));
        writer.write(None, format_args!("two"));

        assert_eq!(memory.lines(), vec!["  WARN [w] one", "  WARN [w] two"]);
    }
}
