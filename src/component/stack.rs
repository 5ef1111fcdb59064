use std::collections::btree_map::Entry;
use std::mem;

use tracing::debug;
use uuid::Uuid;

use super::{Calendar, Component, finalize_recurrence, merge, synthesize_end};
use crate::parser::{ContentLine, ParserError};
use crate::property;
use crate::types::{CalDateTime, Value};

/// What a `BEGIN` opened.
#[derive(Debug, Clone)]
enum Frame {
    /// Nothing open.
    Root,
    Calendar(Component),
    Component(Component),
}

impl Frame {
    fn open(kind: &str) -> Self {
        let comp = Component::new(kind.trim().to_uppercase());
        if comp.kind() == "VCALENDAR" {
            Self::Calendar(comp)
        } else {
            Self::Component(comp)
        }
    }

    fn kind(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Calendar(comp) | Self::Component(comp) => Some(comp.kind()),
        }
    }
}

/// Turns a flat stream of content lines into a [`Calendar`].
///
/// Open blocks live on an explicit stack, so nesting depth never grows the
/// call stack and the machine can be paused between any two lines.
#[derive(Debug, Clone)]
pub(crate) struct ComponentStack {
    curr: Frame,
    stack: Vec<Frame>,
    calendar: Calendar,
    local: Option<chrono_tz::Tz>,
}

impl ComponentStack {
    pub fn new(local: Option<chrono_tz::Tz>) -> Self {
        Self {
            curr: Frame::Root,
            stack: Vec::new(),
            calendar: Calendar::default(),
            local,
        }
    }

    pub fn feed(&mut self, line: ContentLine) -> Result<(), ParserError> {
        match line.name.as_str() {
            "BEGIN" => {
                let parent = mem::replace(&mut self.curr, Frame::open(&line.value));
                self.stack.push(parent);
                Ok(())
            }
            "END" => self.end(&line.value),
            _ => self.property(&line),
        }
    }

    fn property(&mut self, line: &ContentLine) -> Result<(), ParserError> {
        let (props, in_component) = match &mut self.curr {
            Frame::Root => (&mut self.calendar.properties, false),
            Frame::Calendar(comp) | Frame::Component(comp) => (&mut comp.properties, true),
        };
        property::dispatch(line, props, in_component, self.local)
    }

    fn end(&mut self, name: &str) -> Result<(), ParserError> {
        if let Some(kind) = self.curr.kind()
            && !kind.eq_ignore_ascii_case(name.trim())
        {
            debug!(open = kind, end = name, "END does not match the open block");
        }

        match mem::replace(&mut self.curr, Frame::Root) {
            Frame::Root => {
                debug!(end = name, "END without an open block");
            }
            Frame::Calendar(mut cal) => {
                cal.properties.retain_structured();
                self.calendar.properties.extend(cal.properties.0);
                self.curr = self.stack.pop().unwrap_or(Frame::Root);
            }
            Frame::Component(mut comp) => {
                let kind = comp.kind().to_owned();
                finalize_recurrence(&kind, &mut comp.properties, self.local)?;
                synthesize_end(&mut comp.properties);
                let parent = self.stack.pop().unwrap_or(Frame::Root);
                self.curr = self.attach(parent, comp)?;
            }
        }
        Ok(())
    }

    /// Hand a closed block to the frame below it.
    fn attach(&mut self, parent: Frame, comp: Component) -> Result<Frame, ParserError> {
        match parent {
            Frame::Component(mut owner) => {
                owner.components.push(comp);
                Ok(Frame::Component(owner))
            }
            Frame::Calendar(cal) => {
                let method = cal.properties.get("method").cloned();
                self.reconcile(comp, method)?;
                Ok(Frame::Calendar(cal))
            }
            Frame::Root => {
                let method = self.calendar.properties.get("method").cloned();
                self.reconcile(comp, method)?;
                Ok(Frame::Root)
            }
        }
    }

    /// Store a top-level block by UID.
    ///
    /// A repeated UID is merged into the stored entry, unless the block
    /// overrides a single occurrence: then it is filed under the parent's
    /// `recurrences` instead.
    fn reconcile(&mut self, comp: Component, method: Option<Value>) -> Result<(), ParserError> {
        let Some(uid) = comp.uid().filter(|uid| !uid.is_empty()).map(str::to_owned) else {
            let mut comp = comp;
            if let Some(method) = method {
                comp.properties.insert("method".to_owned(), method);
            }
            self.calendar
                .entries_mut()
                .insert(Uuid::new_v4().to_string(), comp);
            return Ok(());
        };

        let override_key = match comp.properties.get("recurrenceid") {
            None => None,
            Some(value) => Some(value.first_date().map(CalDateTime::date_key).ok_or_else(
                || ParserError::NotADate {
                    property: "RECURRENCE-ID".to_owned(),
                    value: value.first_text().unwrap_or_default().to_owned(),
                },
            )?),
        };
        let snapshot = override_key.as_ref().map(|_| comp.snapshot());

        let parent = match self.calendar.entries_mut().entry(uid) {
            Entry::Vacant(entry) => {
                let mut comp = comp;
                if let Some(method) = method {
                    comp.properties.insert("method".to_owned(), method);
                }
                entry.insert(comp)
            }
            Entry::Occupied(entry) => {
                let stored = entry.into_mut();
                if override_key.is_none() {
                    *stored = merge(mem::take(stored), comp);
                }
                stored
            }
        };

        if let (Some(key), Some(snapshot)) = (override_key, snapshot) {
            parent.recurrences.insert(key, snapshot);
        }
        // An override that arrived before its base was stored as the parent
        if parent.properties.contains_key("rrule") && parent.properties.contains_key("recurrenceid")
        {
            parent.properties.remove("recurrenceid");
        }
        Ok(())
    }

    /// Unwind what is left and hand out the tree.
    pub fn finish(self) -> Calendar {
        let dangling = self
            .stack
            .iter()
            .chain(std::iter::once(&self.curr))
            .filter(|frame| !matches!(frame, Frame::Root))
            .count();
        if dangling > 0 {
            debug!(dangling, "discarding blocks left open at end of input");
        }
        self.calendar
    }
}
