//! Per-line metadata flags and date/time stamps

use std::ops::{BitOr, BitOrAssign};

use time::macros::format_description;
use time::OffsetDateTime;

/// Which metadata each emitted line carries
///
/// Flags combine with `|`. [`FormatFlags::default`] is date plus time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatFlags {
    /// `YYYY/MM/DD`
    pub date: bool,
    /// `HH:MM:SS`
    pub time: bool,
    /// Append `.ffffff` to the time; implies `time`
    pub microseconds: bool,
    /// Stamp in UTC instead of local time
    pub utc: bool,
    /// Always annotate lines with the caller's `file:line`
    pub source_location: bool,
}

impl FormatFlags {
    pub const NONE: FormatFlags = FormatFlags {
        date: false,
        time: false,
        microseconds: false,
        utc: false,
        source_location: false,
    };
    pub const DATE: FormatFlags = FormatFlags { date: true, ..Self::NONE };
    pub const TIME: FormatFlags = FormatFlags { time: true, ..Self::NONE };
    pub const MICROSECONDS: FormatFlags = FormatFlags { microseconds: true, ..Self::NONE };
    pub const UTC: FormatFlags = FormatFlags { utc: true, ..Self::NONE };
    pub const SOURCE_LOCATION: FormatFlags = FormatFlags { source_location: true, ..Self::NONE };
    pub const STANDARD: FormatFlags = FormatFlags { date: true, time: true, ..Self::NONE };

    /// Union of all supplied flags, or [`FormatFlags::STANDARD`] if none are given.
    pub fn combine(flags: impl IntoIterator<Item = FormatFlags>) -> FormatFlags {
        let mut flags = flags.into_iter().peekable();
        if flags.peek().is_none() {
            return Self::STANDARD;
        }
        flags.fold(Self::NONE, |acc, flag| acc | flag)
    }

    /// Whether lines carry any date or time stamp
    pub fn has_stamp(&self) -> bool {
        self.date || self.time || self.microseconds
    }

    /// Current time in the configured zone.
    ///
    /// Falls back to UTC when the local offset cannot be determined.
    pub fn now(&self) -> OffsetDateTime {
        if self.utc {
            OffsetDateTime::now_utc()
        } else {
            OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
        }
    }

    /// Render the stamp for `at`, each part followed by a space
    pub fn stamp(&self, at: OffsetDateTime) -> String {
        let mut stamp = String::new();

        if self.date {
            if let Ok(date) = at.format(format_description!("[year]/[month]/[day]")) {
                stamp.push_str(&date);
                stamp.push(' ');
            }
        }

        let time = if self.microseconds {
            at.format(format_description!("[hour]:[minute]:[second].[subsecond digits:6]"))
        } else if self.time {
            at.format(format_description!("[hour]:[minute]:[second]"))
        } else {
            return stamp;
        };
        if let Ok(time) = time {
            stamp.push_str(&time);
            stamp.push(' ');
        }

        stamp
    }
}

impl Default for FormatFlags {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl BitOr for FormatFlags {
    type Output = FormatFlags;

    fn bitor(self, rhs: FormatFlags) -> FormatFlags {
        FormatFlags {
            date: self.date || rhs.date,
            time: self.time || rhs.time,
            microseconds: self.microseconds || rhs.microseconds,
            utc: self.utc || rhs.utc,
            source_location: self.source_location || rhs.source_location,
        }
    }
}

impl BitOrAssign for FormatFlags {
    fn bitor_assign(&mut self, rhs: FormatFlags) {
        *self = *self | rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_combine() {
        assert_eq!(FormatFlags::combine(std::iter::empty()), FormatFlags::STANDARD);
        assert_eq!(FormatFlags::combine([FormatFlags::NONE]), FormatFlags::NONE);

        let combined = FormatFlags::combine([FormatFlags::DATE, FormatFlags::UTC]);
        assert!(combined.date && combined.utc);
        assert!(!combined.time);
    }

    #[test]
    fn test_bitor_assign() {
        let mut flags = FormatFlags::TIME;
        flags |= FormatFlags::SOURCE_LOCATION;
        assert!(flags.time && flags.source_location);
        assert!(!flags.date);
    }

    #[test]
    fn test_stamp() {
        let at = datetime!(2024-01-02 03:04:05.123456 UTC);

        assert_eq!(FormatFlags::STANDARD.stamp(at), "2024/01/02 03:04:05 ");
        assert_eq!(FormatFlags::DATE.stamp(at), "2024/01/02 ");
        assert_eq!(FormatFlags::MICROSECONDS.stamp(at), "03:04:05.123456 ");
        assert_eq!((FormatFlags::TIME | FormatFlags::MICROSECONDS).stamp(at), "03:04:05.123456 ");
        assert_eq!(FormatFlags::NONE.stamp(at), "");
        assert_eq!(FormatFlags::SOURCE_LOCATION.stamp(at), "");
    }

    #[test]
    fn test_has_stamp() {
        assert!(FormatFlags::STANDARD.has_stamp());
        assert!(FormatFlags::MICROSECONDS.has_stamp());
        assert!(!(FormatFlags::UTC | FormatFlags::SOURCE_LOCATION).has_stamp());
    }
}
