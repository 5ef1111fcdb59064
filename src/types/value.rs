use std::collections::BTreeMap;
use std::fmt;

use chrono::DateTime;
use derive_more::{Display, From};

use super::CalDateTime;

/// A coerced parameter value.
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// `TRUE`/`FALSE` become booleans, numeric strings numbers.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "TRUE" => Self::Bool(true),
            "FALSE" => Self::Bool(false),
            _ => match raw.trim().parse::<f64>() {
                Ok(number) if number.is_finite() && !raw.trim().is_empty() => Self::Number(number),
                _ => Self::Text(raw.to_owned()),
            },
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Ordered, coerced parameters of a property.
#[derive(Debug, Clone, Default, PartialEq, From)]
pub struct Params(pub Vec<(String, ParamValue)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geo {
    pub lat: f64,
    pub lon: f64,
}

/// One period of a FREEBUSY property.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeBusy {
    /// `FBTYPE` parameter, `BUSY` when absent.
    pub fb_type: String,
    pub start: Value,
    /// A date value, or text when the period ends with a duration.
    pub end: Option<Value>,
}

/// A finalized RRULE.
///
/// `text` is the rule as written plus the synthesized `DTSTART`, `rule` the
/// validated rule that `rrule` built from it.
#[derive(Debug, Clone)]
pub struct RecurrenceRule {
    text: String,
    rule: rrule::RRule,
    dt_start: DateTime<rrule::Tz>,
}

impl RecurrenceRule {
    pub fn new(text: String, rule: rrule::RRule, dt_start: DateTime<rrule::Tz>) -> Self {
        Self {
            text,
            rule,
            dt_start,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rule(&self) -> &rrule::RRule {
        &self.rule
    }

    pub fn dt_start(&self) -> &DateTime<rrule::Tz> {
        &self.dt_start
    }

    /// Hand the rule to `rrule` for expansion.
    pub fn to_rrule_set(&self) -> rrule::RRuleSet {
        rrule::RRuleSet::new(self.dt_start.clone()).rrule(self.rule.clone())
    }
}

impl PartialEq for RecurrenceRule {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Every shape a stored property can take.
#[derive(Debug, Clone, PartialEq, From)]
pub enum Value {
    /// Unescaped text.
    Text(String),
    /// Text whose source line carried parameters worth keeping.
    #[from(ignore)]
    Wrapped { params: Params, value: String },
    /// A property that occurred more than once.
    List(Vec<Value>),
    Date(CalDateTime),
    Geo(Geo),
    #[from(ignore)]
    Categories(Vec<String>),
    FreeBusy(Vec<FreeBusy>),
    /// Exception dates keyed by `YYYY-MM-DD`.
    ExDates(BTreeMap<String, CalDateTime>),
    Recurrence(RecurrenceRule),
}

impl Value {
    /// The text of a plain or wrapped value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Wrapped { value: text, .. } => Some(text),
            _ => None,
        }
    }

    /// The first text of a value, looking into lists.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            Self::List(values) => values.iter().find_map(Self::first_text),
            _ => self.as_text(),
        }
    }

    pub fn as_date(&self) -> Option<&CalDateTime> {
        match self {
            Self::Date(date) => Some(date),
            _ => None,
        }
    }

    /// The first date of a value, looking into lists.
    pub fn first_date(&self) -> Option<&CalDateTime> {
        match self {
            Self::List(values) => values.iter().find_map(Self::first_date),
            _ => self.as_date(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}
