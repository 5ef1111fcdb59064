/// Fatal parse failures.
///
/// Malformed lines, unbalanced BEGIN/END blocks and unknown timezones are
/// tolerated and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error(transparent)]
    RRule(#[from] rrule::RRuleError),
    #[error("{property} value has no calendar date: {value}")]
    NotADate { property: String, value: String },
    #[error("cannot build a recurrence rule without a start date: {0}")]
    MissingStart(String),
}
