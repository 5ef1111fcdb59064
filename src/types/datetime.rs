use chrono::{
    DateTime, Duration, MappedLocalTime, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Timelike, Utc,
};

use super::Tz;

/// A parsed DATE or DATE-TIME value.
///
/// Besides the instant it remembers the zone identifier the source attached
/// to it (`Etc/UTC` for a trailing `Z`, the unquoted `TZID` otherwise) and
/// whether it was a date without time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalDateTime {
    dt: DateTime<Tz>,
    tzid: Option<String>,
    all_day: bool,
}

impl CalDateTime {
    /// A calendar date: floating midnight, flagged all-day.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            dt: Tz::Local.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
            tzid: None,
            all_day: true,
        }
    }

    /// A date-time given as UTC (trailing `Z`).
    pub fn from_utc(naive: NaiveDateTime) -> Self {
        Self {
            dt: Tz::UTC.from_utc_datetime(&naive),
            tzid: Some("Etc/UTC".to_owned()),
            all_day: false,
        }
    }

    /// A wall-clock date-time without a resolvable zone.
    pub fn floating(naive: NaiveDateTime, tzid: Option<String>) -> Self {
        Self {
            dt: Tz::Local.from_utc_datetime(&naive),
            tzid,
            all_day: false,
        }
    }

    /// A wall-clock date-time localized in `tz`.
    ///
    /// Times inside a DST gap move one hour forward, ambiguous ones take the
    /// earlier instant.
    pub fn zoned(naive: NaiveDateTime, tz: Tz, tzid: Option<String>) -> Option<Self> {
        let dt = match tz.from_local_datetime(&naive) {
            MappedLocalTime::Single(dt) | MappedLocalTime::Ambiguous(dt, _) => dt,
            MappedLocalTime::None => tz
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()?,
        };
        Some(Self {
            dt,
            tzid,
            all_day: false,
        })
    }

    #[inline]
    pub fn as_datetime(&self) -> &DateTime<Tz> {
        &self.dt
    }

    #[inline]
    pub fn timezone(&self) -> Tz {
        self.dt.timezone()
    }

    #[inline]
    pub fn tzid(&self) -> Option<&str> {
        self.tzid.as_deref()
    }

    #[inline]
    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    pub fn naive_local(&self) -> NaiveDateTime {
        self.dt.naive_local()
    }

    pub fn naive_utc(&self) -> NaiveDateTime {
        self.dt.naive_utc()
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.dt.with_timezone(&Utc)
    }

    /// Seconds the zone is ahead of UTC at this instant.
    pub fn offset_seconds(&self) -> i32 {
        self.dt.offset().fix().local_minus_utc()
    }

    pub fn is_midnight(&self) -> bool {
        self.dt.num_seconds_from_midnight() == 0
    }

    /// `YYYY-MM-DD` used to index exception dates and recurrence overrides.
    ///
    /// Floating values use their wall-clock date, zoned ones their UTC date.
    pub fn date_key(&self) -> String {
        let date = if self.dt.timezone().is_local() {
            self.naive_local().date()
        } else {
            self.naive_utc().date()
        };
        date.format("%Y-%m-%d").to_string()
    }

    /// Shift by an absolute amount, keeping zone and flags.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        Some(Self {
            dt: self.dt.clone().checked_add_signed(duration)?,
            tzid: self.tzid.clone(),
            all_day: self.all_day,
        })
    }
}
