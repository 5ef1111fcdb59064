//! DATE and DATE-TIME handling.
//!
//! Values are matched against `YYYYMMDD` and `YYYYMMDDTHHMMSS[Z]`. Anything
//! else is kept as text. A `TZID` is resolved through [`crate::tzid`]; when it
//! stays unresolved the wall clock is kept as floating time.

use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use super::text::unescape;
use crate::component::Properties;
use crate::parser::{ContentLineParams, ParserError};
use crate::types::{CalDateTime, Value};
use crate::tzid::{OUTLOOK_CUSTOM_TZID, resolve_tzid, unquote};

lazy_static! {
    static ref RE_DATE_ONLY: Regex = Regex::new(r"^\d{8}$").unwrap();
    static ref RE_DATE: Regex = Regex::new(r"^(\d{4})(\d{2})(\d{2})").unwrap();
    static ref RE_DATE_TIME: Regex =
        Regex::new(r"^(\d{4})(\d{2})(\d{2})T(\d{2})(\d{2})(\d{2})(Z)?$").unwrap();
    pub(crate) static ref RE_LIST_SEPARATOR: Regex = Regex::new(r"\s*,\s*").unwrap();
}

/// What a date handler needs to know about the line's parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParams<'a> {
    pub tzid: Option<Cow<'a, str>>,
    /// `VALUE=DATE` without a `VALUE=DATE-TIME` next to it.
    pub date_hint: bool,
}

impl<'a> DateParams<'a> {
    /// Read the parameters of a date line.
    ///
    /// Outlook writes `TZID=tzone://Microsoft/Custom:...`, which tokenizes as
    /// `TZID=tzone` with the rest of the marker in front of the value. The
    /// two halves are put back together and the value is returned without
    /// the marker.
    pub fn extract(params: &'a ContentLineParams, value: &'a str) -> (Self, &'a str) {
        let date_hint = params.has_value_type("DATE") && !params.has_value_type("DATE-TIME");
        let mut tzid = params.get_tzid().map(Cow::Borrowed);
        let mut value = value;
        if tzid.as_deref() == Some("tzone")
            && let Some((marker, rest)) = value.split_once(':')
        {
            tzid = Some(Cow::Owned(format!("tzone:{marker}")));
            value = rest;
        }
        (Self { tzid, date_hint }, value)
    }
}

pub fn is_date_only(value: &str, params: &DateParams) -> bool {
    params.date_hint || RE_DATE_ONLY.is_match(value)
}

fn number<T: std::str::FromStr>(caps: &Captures, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}

fn parse_naive_date(caps: &Captures) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(number(caps, 1)?, number(caps, 2)?, number(caps, 3)?)
}

fn parse_naive_datetime(caps: &Captures) -> Option<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(number(caps, 4)?, number(caps, 5)?, number(caps, 6)?)?;
    Some(parse_naive_date(caps)?.and_time(time))
}

fn zoned(naive: NaiveDateTime, tzid: &str, local: Option<chrono_tz::Tz>) -> CalDateTime {
    let resolved = resolve_tzid(tzid, local);
    // The custom marker is tagged with the zone that replaced it
    let tag = if tzid == OUTLOOK_CUSTOM_TZID {
        resolved.to_string()
    } else {
        unquote(tzid).to_owned()
    };
    match resolved.to_tz() {
        Some(tz) => CalDateTime::zoned(naive, tz, Some(tag.clone()))
            .unwrap_or_else(|| CalDateTime::floating(naive, Some(tag))),
        None => {
            debug!(tzid, "unresolved timezone, keeping floating time");
            CalDateTime::floating(naive, Some(tag))
        }
    }
}

/// Parse one date value. Falls back to unescaped text.
pub fn parse_date(value: &str, params: &DateParams, local: Option<chrono_tz::Tz>) -> Value {
    if is_date_only(value, params)
        && let Some(date) = RE_DATE.captures(value).as_ref().and_then(parse_naive_date)
    {
        return Value::Date(CalDateTime::from_date(date));
    }

    let Some(naive) = RE_DATE_TIME
        .captures(value)
        .as_ref()
        .and_then(parse_naive_datetime)
    else {
        return Value::Text(unescape(value));
    };

    let date = if value.ends_with('Z') {
        CalDateTime::from_utc(naive)
    } else if let Some(tzid) = params.tzid.as_deref() {
        zoned(naive, tzid, local)
    } else {
        CalDateTime::floating(naive, None)
    };
    Value::Date(date)
}

pub fn store_date(
    props: &mut Properties,
    key: &str,
    params: &ContentLineParams,
    value: &str,
    local: Option<chrono_tz::Tz>,
) {
    let (date_params, value) = DateParams::extract(params, value);
    props.store(key, parse_date(value, &date_params, local));
}

/// `DTSTART`: the date itself plus its `datetype` classification.
pub fn store_start(
    props: &mut Properties,
    params: &ContentLineParams,
    value: &str,
    local: Option<chrono_tz::Tz>,
) {
    let (date_params, value) = DateParams::extract(params, value);
    let datetype = if is_date_only(value, &date_params) {
        "date"
    } else {
        "date-time"
    };
    props.store("start", parse_date(value, &date_params, local));
    props.store("datetype", Value::Text(datetype.to_owned()));
}

/// `EXDATE`: every listed date indexed by its calendar date.
///
/// The first date seen for a day is kept.
pub fn store_exdate(
    props: &mut Properties,
    params: &ContentLineParams,
    value: &str,
    local: Option<chrono_tz::Tz>,
) -> Result<(), ParserError> {
    let (date_params, value) = DateParams::extract(params, value);

    let mut dates = match props.remove("exdate") {
        Some(Value::ExDates(dates)) => dates,
        _ => BTreeMap::new(),
    };
    let entries = RE_LIST_SEPARATOR
        .split(value)
        .filter(|entry| !entry.is_empty());
    for entry in entries {
        match parse_date(entry, &date_params, local) {
            Value::Date(date) => {
                dates.entry(date.date_key()).or_insert(date);
            }
            _ => {
                return Err(ParserError::NotADate {
                    property: "EXDATE".to_owned(),
                    value: entry.to_owned(),
                });
            }
        }
    }
    props.insert("exdate".to_owned(), Value::ExDates(dates));
    Ok(())
}
