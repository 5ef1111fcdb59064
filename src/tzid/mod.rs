//! Resolve raw `TZID` tokens.
//!
//! Feeds in the wild carry IANA names, quoted names, Microsoft display names,
//! `(UTC+01:00) City` labels and the Outlook custom timezone marker. All of
//! them are narrowed down to an IANA zone, a fixed offset or, failing that,
//! the token itself.

use std::fmt;
use std::str::FromStr;

use chrono::FixedOffset;
use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Tz;

mod windows;
pub use windows::lookup_windows_zone;

/// TZID Outlook writes for timezones it defines itself.
pub const OUTLOOK_CUSTOM_TZID: &str = "tzone://Microsoft/Custom";

lazy_static! {
    static ref RE_OFFSET: Regex = Regex::new(r"[+-](\d{1,2}):(\d{2})").unwrap();
}

/// Outcome of resolving a TZID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTz {
    /// A zone known to the IANA database.
    Olson(chrono_tz::Tz),
    /// An offset taken from a `(UTC+HH:MM) ...` label, with its source text.
    Offset(FixedOffset, String),
    /// Nothing matched; the cleaned-up token is passed through.
    Unresolved(String),
}

impl ResolvedTz {
    pub fn to_tz(&self) -> Option<Tz> {
        match self {
            Self::Olson(tz) => Some(Tz::Olson(*tz)),
            Self::Offset(offset, _) => Some(Tz::Fixed(*offset)),
            Self::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved(_))
    }
}

impl fmt::Display for ResolvedTz {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Olson(tz) => f.write_str(tz.name()),
            Self::Offset(_, text) | Self::Unresolved(text) => f.write_str(text),
        }
    }
}

/// Remove one pair of surrounding double quotes.
pub fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

/// Best guess at the host timezone.
pub fn guess_local_timezone() -> Option<chrono_tz::Tz> {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| chrono_tz::Tz::from_str(&name).ok())
}

/// Zone used in place of [`OUTLOOK_CUSTOM_TZID`].
pub fn custom_timezone_substitute(local: Option<chrono_tz::Tz>) -> chrono_tz::Tz {
    local
        .or_else(guess_local_timezone)
        .unwrap_or(chrono_tz::UTC)
}

fn parse_offset(label: &str) -> Option<(FixedOffset, String)> {
    let caps = RE_OFFSET.captures(label)?;
    let text = caps.get(0)?.as_str();
    let hours: i32 = caps[1].parse().ok()?;
    let minutes: i32 = caps[2].parse().ok()?;
    let seconds = (hours * 3600 + minutes * 60) * if text.starts_with('-') { -1 } else { 1 };
    Some((FixedOffset::east_opt(seconds)?, text.to_owned()))
}

/// Resolve a raw TZID token.
///
/// `local` replaces the Outlook custom marker; when `None` the host zone is
/// guessed.
pub fn resolve_tzid(raw: &str, local: Option<chrono_tz::Tz>) -> ResolvedTz {
    let mut tzid = raw;
    if tzid == OUTLOOK_CUSTOM_TZID {
        tzid = custom_timezone_substitute(local).name();
    }
    tzid = unquote(tzid);

    if tzid.contains(char::is_whitespace)
        && let Some(Some(iana)) = lookup_windows_zone(tzid)
    {
        tzid = iana;
    }

    if tzid.starts_with('(') {
        // An offset label nobody maps to a zone: the offset is all we have
        return match parse_offset(tzid) {
            Some((offset, text)) => ResolvedTz::Offset(offset, text),
            None => ResolvedTz::Unresolved(tzid.to_owned()),
        };
    }

    match chrono_tz::Tz::from_str(tzid) {
        Ok(tz) => ResolvedTz::Olson(tz),
        Err(_) => ResolvedTz::Unresolved(tzid.to_owned()),
    }
}
