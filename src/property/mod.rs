//! Per-property value coercion.
//!
//! Every known property name maps to a [`Handler`] that turns the raw value
//! into a [`Value`](crate::Value) and stores it on the open component under a
//! lowercase key. Unknown properties are stored as text.

use phf::phf_map;

use crate::component::Properties;
use crate::parser::{ContentLine, ParserError};
use crate::types::Value;

mod date;
pub use date::{DateParams, is_date_only, parse_date};

mod structured;

mod text;
pub use text::{text_value, unescape};

/// How a property value is coerced and under which key it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Unescaped text, wrapped with its parameters if they matter.
    Text(&'static str),
    Date(&'static str),
    /// `DTSTART`, which also records `datetype`.
    Start,
    ExDate,
    Geo,
    Categories,
    FreeBusy,
    /// The raw line is kept until the component closes.
    RRule,
}

static HANDLERS: phf::Map<&'static str, Handler> = phf_map! {
    "SUMMARY" => Handler::Text("summary"),
    "DESCRIPTION" => Handler::Text("description"),
    "URL" => Handler::Text("url"),
    "UID" => Handler::Text("uid"),
    "LOCATION" => Handler::Text("location"),
    "DTSTART" => Handler::Start,
    "DTEND" => Handler::Date("end"),
    "DUE" => Handler::Date("due"),
    "EXDATE" => Handler::ExDate,
    "CLASS" => Handler::Text("class"),
    "TRANSP" => Handler::Text("transparency"),
    "GEO" => Handler::Geo,
    "PERCENT-COMPLETE" => Handler::Text("completion"),
    "COMPLETED" => Handler::Date("completed"),
    "CATEGORIES" => Handler::Categories,
    "FREEBUSY" => Handler::FreeBusy,
    "DTSTAMP" => Handler::Date("dtstamp"),
    "CREATED" => Handler::Date("created"),
    "LAST-MODIFIED" => Handler::Date("lastmodified"),
    "RECURRENCE-ID" => Handler::Date("recurrenceid"),
    "RRULE" => Handler::RRule,
};

pub fn lookup_handler(name: &str) -> Option<Handler> {
    HANDLERS.get(name).copied()
}

/// Key an unregistered property is stored under.
///
/// Inside a component `X-FOO` becomes `FOO`, everything else is lowercased.
pub fn fallback_key(name: &str, in_component: bool) -> String {
    match name.strip_prefix("X-") {
        Some(rest) if in_component && !rest.is_empty() => rest.to_owned(),
        _ => name.to_lowercase(),
    }
}

impl Handler {
    pub fn apply(
        self,
        line: &ContentLine,
        props: &mut Properties,
        local: Option<chrono_tz::Tz>,
    ) -> Result<(), ParserError> {
        let (params, value) = (&line.params, line.value.as_str());
        match self {
            Self::Text(key) => text::store_text(props, key, params, value),
            Self::Date(key) => date::store_date(props, key, params, value, local),
            Self::Start => date::store_start(props, params, value, local),
            Self::ExDate => date::store_exdate(props, params, value, local)?,
            Self::Geo => structured::store_geo(props, params, value),
            Self::Categories => structured::store_categories(props, value),
            Self::FreeBusy => structured::store_freebusy(props, params, value, local),
            Self::RRule => {
                props.insert("rrule".to_owned(), Value::Text(line.raw.clone()));
            }
        }
        Ok(())
    }
}

/// Coerce one property line into `props`.
pub fn dispatch(
    line: &ContentLine,
    props: &mut Properties,
    in_component: bool,
    local: Option<chrono_tz::Tz>,
) -> Result<(), ParserError> {
    match lookup_handler(&line.name) {
        Some(handler) => handler.apply(line, props, local),
        None => {
            let key = fallback_key(&line.name, in_component);
            text::store_text(props, &key, &line.params, &line.value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Handler, dispatch, fallback_key, lookup_handler};
    use crate::component::Properties;
    use crate::parser::{ContentLineParser, Line};
    use crate::types::Value;
    use rstest::rstest;

    fn feed(props: &mut Properties, raw: &str, in_component: bool) {
        let line = ContentLineParser::parse(&Line::new(raw.to_owned(), 1)).unwrap();
        dispatch(&line, props, in_component, None).unwrap();
    }

    #[rstest]
    #[case("SUMMARY", Some(Handler::Text("summary")))]
    #[case("TRANSP", Some(Handler::Text("transparency")))]
    #[case("LAST-MODIFIED", Some(Handler::Date("lastmodified")))]
    #[case("X-WR-CALNAME", None)]
    fn registry(#[case] name: &str, #[case] expected: Option<Handler>) {
        assert_eq!(lookup_handler(name), expected);
    }

    #[rstest]
    #[case("X-MICROSOFT-CDO-BUSYSTATUS", true, "MICROSOFT-CDO-BUSYSTATUS")]
    #[case("X-WR-CALNAME", false, "x-wr-calname")]
    #[case("ORGANIZER", true, "organizer")]
    #[case("X-", true, "x-")]
    fn fallback_keys(#[case] name: &str, #[case] in_component: bool, #[case] expected: &str) {
        assert_eq!(fallback_key(name, in_component), expected);
    }

    #[test]
    fn rrule_keeps_raw_line() {
        let mut props = Properties::default();
        feed(&mut props, "RRULE:FREQ=DAILY;COUNT=2", true);
        feed(&mut props, "RRULE:FREQ=WEEKLY;COUNT=3", true);
        assert_eq!(
            props.get("rrule"),
            Some(&Value::Text("RRULE:FREQ=WEEKLY;COUNT=3".to_owned()))
        );
    }

    #[test]
    fn unknown_properties_are_text() {
        let mut props = Properties::default();
        feed(&mut props, "ORGANIZER;CN=Jane:mailto:jane@example.com", true);
        feed(&mut props, "SEQUENCE:2", true);
        assert_eq!(props.text("organizer"), Some("mailto:jane@example.com"));
        assert_eq!(props.get("sequence"), Some(&Value::Text("2".to_owned())));
    }
}
