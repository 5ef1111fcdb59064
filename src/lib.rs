//! A tolerant iCalendar (RFC 5545) parser.
//!
//! Text goes in, a [`Calendar`] comes out: a map from UID to finished
//! [`Component`], with property values coerced into typed [`Value`]s.
//! Malformed lines are skipped, repeated UIDs are merged and `RECURRENCE-ID`
//! overrides are attached to their parent under `recurrences`.
//!
//! ```rust
//! let cal = lenient_ical::parse_ics(
//!     "BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:1\nSUMMARY:Hello\nEND:VEVENT\nEND:VCALENDAR\n",
//! )
//! .unwrap();
//! assert_eq!(cal.get("1").unwrap().summary(), Some("Hello"));
//! ```

const VALUE_DELIMITER: char = ':';
const PARAM_DELIMITER: char = ';';
const PARAM_NAME_DELIMITER: char = '=';
const PARAM_QUOTE: char = '"';

pub mod component;
pub use component::{Calendar, Component, Properties, merge};

pub mod parser;
pub use parser::{
    ChunkedParser, ContentLineParser, IcalParser, LineReader, ParserError, ParserOptions, Resume,
    Scheduler, parse_ics,
};

pub mod property;

pub mod types;
pub use types::{CalDateTime, Value};

pub mod tzid;
