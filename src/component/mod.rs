//! The result tree.
//!
//! A [`Calendar`] maps UIDs to finished [`Component`]s. Every component keeps
//! its coerced properties by lowercase handler key, the blocks nested inside
//! it and, for recurring entries, the overrides keyed by the calendar date of
//! their `RECURRENCE-ID`.

use std::collections::BTreeMap;

use derive_more::{Deref, DerefMut, From};

use crate::types::{CalDateTime, FreeBusy, Geo, RecurrenceRule, Value};

mod finalize;
pub(crate) use finalize::{finalize_recurrence, synthesize_end};

mod stack;
pub(crate) use stack::ComponentStack;

/// Property values of a component, keyed by handler key.
#[derive(Debug, Clone, Default, PartialEq, Deref, DerefMut, From)]
pub struct Properties(BTreeMap<String, Value>);

impl Properties {
    /// Store a value, turning the field into a list once it repeats.
    pub fn store(&mut self, key: &str, value: Value) {
        match self.0.get_mut(key) {
            None => {
                self.0.insert(key.to_owned(), value);
            }
            Some(Value::List(values)) => values.push(value),
            Some(current) => {
                let previous = std::mem::replace(current, Value::List(Vec::with_capacity(2)));
                if let Value::List(values) = current {
                    values.push(previous);
                    values.push(value);
                }
            }
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::first_text)
    }

    pub fn date(&self, key: &str) -> Option<&CalDateTime> {
        self.0.get(key).and_then(Value::first_date)
    }

    /// Drop plain text values, keeping structured ones.
    pub(crate) fn retain_structured(&mut self) {
        self.0.retain(|_, value| !value.is_text());
    }
}

/// One `BEGIN`...`END` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Component {
    kind: String,
    pub properties: Properties,
    /// Blocks nested inside this one, such as `VALARM` or `STANDARD`.
    pub components: Vec<Component>,
    /// Overrides keyed by the `YYYY-MM-DD` of their `RECURRENCE-ID`.
    pub recurrences: BTreeMap<String, Component>,
}

impl Component {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Uppercase block name, e.g. `VEVENT`.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn uid(&self) -> Option<&str> {
        self.properties.text("uid")
    }

    pub fn summary(&self) -> Option<&str> {
        self.properties.text("summary")
    }

    pub fn description(&self) -> Option<&str> {
        self.properties.text("description")
    }

    pub fn location(&self) -> Option<&str> {
        self.properties.text("location")
    }

    pub fn method(&self) -> Option<&str> {
        self.properties.text("method")
    }

    pub fn start(&self) -> Option<&CalDateTime> {
        self.properties.date("start")
    }

    pub fn end(&self) -> Option<&CalDateTime> {
        self.properties.date("end")
    }

    /// `date` or `date-time`, as classified from `DTSTART`.
    pub fn datetype(&self) -> Option<&str> {
        self.properties.text("datetype")
    }

    pub fn recurrence_id(&self) -> Option<&CalDateTime> {
        self.properties.date("recurrenceid")
    }

    pub fn rrule(&self) -> Option<&RecurrenceRule> {
        match self.properties.get("rrule")? {
            Value::Recurrence(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn exdates(&self) -> Option<&BTreeMap<String, CalDateTime>> {
        match self.properties.get("exdate")? {
            Value::ExDates(dates) => Some(dates),
            _ => None,
        }
    }

    pub fn categories(&self) -> Option<&[String]> {
        match self.properties.get("categories")? {
            Value::Categories(categories) => Some(categories),
            _ => None,
        }
    }

    pub fn geo(&self) -> Option<&Geo> {
        match self.properties.get("geo")? {
            Value::Geo(geo) => Some(geo),
            _ => None,
        }
    }

    pub fn freebusy(&self) -> Option<&[FreeBusy]> {
        match self.properties.get("freebusy")? {
            Value::FreeBusy(periods) => Some(periods),
            _ => None,
        }
    }

    /// A copy without the `recurrences` of its own.
    pub fn snapshot(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            properties: self.properties.clone(),
            components: self.components.clone(),
            recurrences: BTreeMap::new(),
        }
    }
}

/// Fold a repeated sighting of a UID into the stored entry.
///
/// Fields of `incoming` overwrite those of `existing`, everything else stays.
/// Nested blocks are taken from `incoming` only if it has any.
pub fn merge(mut existing: Component, incoming: Component) -> Component {
    existing.kind = incoming.kind;
    existing.properties.extend(incoming.properties.0);
    if !incoming.components.is_empty() {
        existing.components = incoming.components;
    }
    existing.recurrences.extend(incoming.recurrences);
    existing
}

/// Finished components keyed by UID, or a generated id for those without.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calendar {
    components: BTreeMap<String, Component>,
    /// Calendar-level values other than plain text, e.g. a parameterized
    /// `X-WR-CALNAME`.
    pub properties: Properties,
}

impl Calendar {
    #[inline]
    pub fn get(&self, uid: &str) -> Option<&Component> {
        self.components.get(uid)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Component)> {
        self.components.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.components.keys()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components of one kind, e.g. every `VEVENT`.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Component> + 'a {
        self.components.values().filter(move |comp| comp.kind() == kind)
    }

    pub(crate) fn entries_mut(&mut self) -> &mut BTreeMap<String, Component> {
        &mut self.components
    }
}

impl IntoIterator for Calendar {
    type Item = (String, Component);
    type IntoIter = std::collections::btree_map::IntoIter<String, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}
