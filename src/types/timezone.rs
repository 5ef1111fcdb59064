use chrono::{FixedOffset, MappedLocalTime, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use derive_more::{Display, From};

/// The zone a date value lives in.
///
/// `Local` is floating time: the wall clock is kept as-is and treated as UTC
/// for arithmetic, so no host timezone ever leaks into parsed values.
#[derive(Debug, Clone, Copy, From, PartialEq, Eq)]
pub enum Tz {
    Local,
    Olson(chrono_tz::Tz),
    /// A bare offset, e.g. from a `(UTC+05:00) ...` label.
    Fixed(FixedOffset),
}

impl Tz {
    pub const UTC: Self = Self::Olson(chrono_tz::UTC);

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    fn local_offset(
        &self,
        lookup: impl FnOnce(&chrono_tz::Tz) -> MappedLocalTime<chrono_tz::TzOffset>,
    ) -> MappedLocalTime<ZoneOffset> {
        match self {
            Self::Local => MappedLocalTime::Single(ZoneOffset::Floating),
            Self::Olson(tz) => lookup(tz).map(ZoneOffset::Olson),
            Self::Fixed(offset) => MappedLocalTime::Single(ZoneOffset::Fixed(*offset)),
        }
    }

    fn utc_offset(&self, lookup: impl FnOnce(&chrono_tz::Tz) -> chrono_tz::TzOffset) -> ZoneOffset {
        match self {
            Self::Local => ZoneOffset::Floating,
            Self::Olson(tz) => ZoneOffset::Olson(lookup(tz)),
            Self::Fixed(offset) => ZoneOffset::Fixed(*offset),
        }
    }
}

/// Offset of a [`Tz`] at some instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ZoneOffset {
    /// Floating time counts as UTC.
    Floating,
    Olson(chrono_tz::TzOffset),
    Fixed(FixedOffset),
}

impl Offset for ZoneOffset {
    fn fix(&self) -> FixedOffset {
        match self {
            Self::Floating => Utc.fix(),
            Self::Olson(offset) => offset.fix(),
            Self::Fixed(offset) => *offset,
        }
    }
}

impl TimeZone for Tz {
    type Offset = ZoneOffset;

    fn from_offset(offset: &ZoneOffset) -> Self {
        match offset {
            ZoneOffset::Floating => Self::Local,
            ZoneOffset::Olson(offset) => Self::Olson(chrono_tz::Tz::from_offset(offset)),
            ZoneOffset::Fixed(offset) => Self::Fixed(*offset),
        }
    }

    #[cfg(not(tarpaulin_include))] // Only used by deprecated chrono::Date type
    fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<ZoneOffset> {
        self.local_offset(|tz| tz.offset_from_local_date(local))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> MappedLocalTime<ZoneOffset> {
        self.local_offset(|tz| tz.offset_from_local_datetime(local))
    }

    #[cfg(not(tarpaulin_include))] // Only used by deprecated chrono::Date type
    fn offset_from_utc_date(&self, utc: &NaiveDate) -> ZoneOffset {
        self.utc_offset(|tz| tz.offset_from_utc_date(utc))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> ZoneOffset {
        self.utc_offset(|tz| tz.offset_from_utc_datetime(utc))
    }
}
