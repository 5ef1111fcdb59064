mod error;
pub use error::ParserError;

mod line;
pub use line::{Line, LineEnding, LineReader};

mod content_line;
pub use content_line::{ContentLine, ContentLineError, ContentLineParams, ContentLineParser};

mod calendar;
pub use calendar::{ChunkedParser, IcalParser, Resume, Scheduler, parse_ics};

/// Lines handled per batch in chunked mode.
pub const DEFAULT_BATCH_SIZE: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Number of lines a [`ChunkedParser`] handles before yielding.
    pub batch_size: usize,
    /// Zone standing in for Outlook's custom timezone marker.
    /// When unset the host zone is guessed, then UTC is used.
    pub local_timezone: Option<chrono_tz::Tz>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            local_timezone: None,
        }
    }
}
