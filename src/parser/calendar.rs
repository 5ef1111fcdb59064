use tracing::{debug, trace};

use super::{ContentLineParser, ParserError, ParserOptions};
use crate::component::{Calendar, ComponentStack};

/// Something that lets other work run between two batches.
pub trait Scheduler {
    fn yield_now(&mut self);
}

impl<F: FnMut()> Scheduler for F {
    fn yield_now(&mut self) {
        self()
    }
}

/// Parses a whole buffer in one go.
#[derive(Debug, Clone)]
pub struct IcalParser<'a> {
    line_parser: ContentLineParser<'a>,
    options: ParserOptions,
}

impl<'a> IcalParser<'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Self {
            line_parser: ContentLineParser::from_str(input),
            options: ParserOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    #[tracing::instrument(skip_all)]
    pub fn parse(self) -> Result<Calendar, ParserError> {
        let mut task = self.chunked();
        task.run(usize::MAX)?;
        Ok(task.finish())
    }

    /// Parse in batches of [`ParserOptions::batch_size`] lines instead.
    pub fn chunked(self) -> ChunkedParser<'a> {
        ChunkedParser {
            line_parser: self.line_parser,
            stack: ComponentStack::new(self.options.local_timezone),
            batch_size: self.options.batch_size.max(1),
        }
    }
}

/// Outcome of one [`ChunkedParser::resume`].
#[derive(Debug)]
pub enum Resume<'a> {
    /// More lines are left; resume the task later.
    Yield(ChunkedParser<'a>),
    Done(Result<Calendar, ParserError>),
}

/// A parse that hands control back after every batch of lines.
///
/// Dropping the task abandons the parse.
#[derive(Debug, Clone)]
pub struct ChunkedParser<'a> {
    line_parser: ContentLineParser<'a>,
    stack: ComponentStack,
    batch_size: usize,
}

impl<'a> ChunkedParser<'a> {
    /// Feed up to `limit` lines. Returns whether the input is exhausted.
    fn run(&mut self, limit: usize) -> Result<bool, ParserError> {
        for _ in 0..limit {
            match self.line_parser.next() {
                None => return Ok(true),
                Some(Ok(line)) => self.stack.feed(line)?,
                Some(Err(err)) => trace!(%err, "skipping malformed line"),
            }
        }
        Ok(false)
    }

    fn finish(self) -> Calendar {
        let calendar = self.stack.finish();
        debug!(components = calendar.len(), "parsed calendar");
        calendar
    }

    /// Process one batch.
    pub fn resume(mut self) -> Resume<'a> {
        match self.run(self.batch_size) {
            Ok(false) => Resume::Yield(self),
            Ok(true) => Resume::Done(Ok(self.finish())),
            Err(err) => Resume::Done(Err(err)),
        }
    }

    /// Run batches until done, yielding to `scheduler` in between, then call
    /// `on_complete` with the outcome.
    #[tracing::instrument(skip_all)]
    pub fn drive<S, F>(self, scheduler: &mut S, on_complete: F)
    where
        S: Scheduler + ?Sized,
        F: FnOnce(Result<Calendar, ParserError>),
    {
        let mut task = self;
        loop {
            match task.resume() {
                Resume::Yield(next) => {
                    scheduler.yield_now();
                    task = next;
                }
                Resume::Done(result) => return on_complete(result),
            }
        }
    }
}

/// Parse a complete buffer with default options.
#[tracing::instrument(skip_all, fields(input_len = input.len()))]
pub fn parse_ics(input: &str) -> Result<Calendar, ParserError> {
    IcalParser::from_str(input).parse()
}
