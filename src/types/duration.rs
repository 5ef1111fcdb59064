use chrono::Duration;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_DURATION_PART: Regex = Regex::new(r"-?(\d+)([YMWDHS])").unwrap();
}

/// Turn a DURATION value such as `P1DT2H` or `-PT15M` into a signed offset.
///
/// A leading `-` negates every part. Weeks, days, hours, minutes and seconds
/// are summed; years and months have no fixed length and are skipped. `M`
/// means minutes after the `T` separator and months before it.
///
/// Returns `None` when no part could be recognized or the sum overflows.
pub fn parse_duration(value: &str) -> Option<Duration> {
    let sign = if value.trim_start().starts_with('-') {
        -1
    } else {
        1
    };
    let time_start = value.find('T').unwrap_or(value.len());

    let mut total = Duration::zero();
    let mut matched = false;
    for part in RE_DURATION_PART.captures_iter(value) {
        matched = true;
        let Ok(amount) = part[1].parse::<i64>() else {
            continue;
        };
        let in_time = part.get(0).is_some_and(|m| m.start() > time_start);
        let step = match &part[2] {
            "W" => Duration::try_weeks(amount),
            "D" => Duration::try_days(amount),
            "H" => Duration::try_hours(amount),
            "M" if in_time => Duration::try_minutes(amount),
            "S" => Duration::try_seconds(amount),
            _ => None,
        };
        if let Some(step) = step {
            total = total.checked_add(&(step * sign))?;
        }
    }
    matched.then_some(total)
}
