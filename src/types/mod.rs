mod timezone;
pub use timezone::{ZoneOffset, Tz};

mod datetime;
pub use datetime::CalDateTime;

mod duration;
pub use duration::parse_duration;

mod value;
pub use value::{FreeBusy, Geo, ParamValue, Params, RecurrenceRule, Value};
