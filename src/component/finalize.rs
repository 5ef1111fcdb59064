//! Post-processing run when a block closes.

use std::borrow::Cow;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use rrule::{RRule, RRuleSet, Unvalidated};

use super::Properties;
use crate::parser::ParserError;
use crate::types::{CalDateTime, RecurrenceRule, Tz, Value, parse_duration};
use crate::tzid::resolve_tzid;

lazy_static! {
    static ref RE_EMBEDDED_DTSTART: Regex =
        Regex::new(r";?DTSTART(;TZID=[^:;]+)?[:=]([0-9]{8}T[0-9]{6}Z?)").unwrap();
    static ref RE_UNTIL: Regex = Regex::new(r"UNTIL=([0-9]{8})(?:T([0-9]{6}))?(Z)?").unwrap();
}

/// Fill in `end` when the block has none (RFC 5545 3.6.1).
///
/// A date-time start ends at the start itself, a date start one day later
/// unless a `DURATION` says otherwise. Nothing happens without a start.
pub(crate) fn synthesize_end(props: &mut Properties) {
    if props.contains_key("end") {
        return;
    }
    let Some(start) = props.date("start") else {
        return;
    };

    let end = if props.text("datetype") == Some("date-time") {
        start.clone()
    } else {
        let offset = match props.text("duration") {
            None => Duration::days(1),
            Some(duration) => parse_duration(duration).unwrap_or_else(Duration::zero),
        };
        start.checked_add(offset).unwrap_or_else(|| start.clone())
    };
    props.insert("end".to_owned(), Value::Date(end));
}

/// The instant rendered into a synthesized `DTSTART`.
///
/// A start at local midnight east of UTC is shifted by its offset so that
/// the UTC stamp still names the intended calendar day.
fn dtstart_stamp(start: &CalDateTime) -> String {
    let offset = start.offset_seconds();
    let instant = if start.is_midnight() && offset > 0 {
        start.naive_utc() + Duration::seconds(offset.into())
    } else {
        start.naive_utc()
    };
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

fn dtstart_suffix(start: &CalDateTime, local: Option<chrono_tz::Tz>) -> String {
    let stamp = dtstart_stamp(start);
    match start.tzid() {
        Some(tzid) => format!(";DTSTART;TZID={}:{stamp}", resolve_tzid(tzid, local)),
        None => format!(";DTSTART={stamp}"),
    }
}

/// Start handed to `rrule`: IANA zones are kept, floating and all-day
/// values use their wall clock as UTC, fixed offsets their UTC instant.
fn rrule_start(start: &CalDateTime) -> DateTime<rrule::Tz> {
    match start.timezone() {
        Tz::Olson(tz) if !start.is_all_day() => {
            start.as_datetime().with_timezone(&rrule::Tz::Tz(tz))
        }
        Tz::Fixed(_) => rrule::Tz::UTC.from_utc_datetime(&start.naive_utc()),
        Tz::Olson(_) | Tz::Local => rrule::Tz::UTC.from_utc_datetime(&start.naive_local()),
    }
}

/// Render a floating or date-only `UNTIL` as a UTC stamp.
///
/// The wall clock is read in the zone of `start`, so it lines up with the
/// start handed to `rrule`. A date-only bound includes its whole day.
fn until_as_utc<'a>(rule: &'a str, start: &CalDateTime) -> Cow<'a, str> {
    RE_UNTIL.replace(rule, |caps: &Captures| {
        let utc = if caps.get(3).is_some() {
            None
        } else {
            until_instant(caps, start)
        };
        match utc {
            Some(utc) => format!("UNTIL={}", utc.format("%Y%m%dT%H%M%SZ")),
            None => caps[0].to_owned(),
        }
    })
}

fn until_instant(caps: &Captures, start: &CalDateTime) -> Option<chrono::NaiveDateTime> {
    let date = NaiveDate::parse_from_str(&caps[1], "%Y%m%d").ok()?;
    let time = match caps.get(2) {
        Some(time) => NaiveTime::parse_from_str(time.as_str(), "%H%M%S").ok()?,
        None => NaiveTime::from_hms_opt(23, 59, 59)?,
    };
    let naive = date.and_time(time);
    match start.timezone() {
        tz @ (Tz::Olson(_) | Tz::Fixed(_)) if !start.is_all_day() => {
            CalDateTime::zoned(naive, tz, None).map(|until| until.naive_utc())
        }
        _ => Some(naive),
    }
}

/// Build a rule whose text brings its own `DTSTART`.
fn with_embedded_start(rule: &str) -> Result<RecurrenceRule, ParserError> {
    let (dtstart, rest) = match RE_EMBEDDED_DTSTART.captures(rule) {
        Some(caps) => (
            format!(
                "DTSTART{}:{}",
                caps.get(1).map_or("", |m| m.as_str()),
                &caps[2]
            ),
            RE_EMBEDDED_DTSTART.replace(rule, ""),
        ),
        None => (String::new(), Cow::Borrowed(rule)),
    };
    let set = RRuleSet::from_str(&format!("{dtstart}\nRRULE:{rest}"))?;
    let dt_start = set.get_dt_start().clone();
    let parsed = RRule::<Unvalidated>::from_str(&rest)?.validate(dt_start.clone())?;
    Ok(RecurrenceRule::new(rule.to_owned(), parsed, dt_start))
}

/// Turn the raw `RRULE` line of an event, to-do or journal into a rule.
///
/// The text is cut down to start at its last `FREQ=`. Unless it already
/// names one, the block's start is appended as `DTSTART` and a floating
/// `UNTIL` is rewritten in UTC to match it.
pub(crate) fn finalize_recurrence(
    kind: &str,
    props: &mut Properties,
    local: Option<chrono_tz::Tz>,
) -> Result<(), ParserError> {
    if !matches!(kind, "VEVENT" | "VTODO" | "VJOURNAL") {
        return Ok(());
    }
    let Some(Value::Text(raw)) = props.get("rrule") else {
        return Ok(());
    };

    let rule = raw.replacen("RRULE:", "", 1);
    let rule = &rule[rule.rfind("FREQ=").unwrap_or(0)..];

    let recurrence = if rule.contains("DTSTART") {
        with_embedded_start(rule)?
    } else {
        let start = props
            .date("start")
            .ok_or_else(|| ParserError::MissingStart(rule.to_owned()))?;
        let dt_start = rrule_start(start);
        let rule = until_as_utc(rule, start);
        let parsed = RRule::<Unvalidated>::from_str(&rule)?.validate(dt_start.clone())?;
        let text = format!("{rule}{}", dtstart_suffix(start, local));
        RecurrenceRule::new(text, parsed, dt_start)
    };
    props.insert("rrule".to_owned(), Value::Recurrence(recurrence));
    Ok(())
}
