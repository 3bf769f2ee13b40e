//! Time source: wall-clock reads and time string parsing.

use chrono::{Local, Timelike};
pub use svgclock_proto::config::{TimeOfDay, TimeParseError};

/// Reads the local wall clock.
pub fn current_time() -> TimeOfDay {
    let now = Local::now();

    // chrono keeps leap seconds in the nanosecond field, so second() < 60
    TimeOfDay::new(now.hour(), now.minute(), now.second()).unwrap_or(TimeOfDay::MIDNIGHT)
}

/// Current local time formatted as `H:M:S` without zero padding.
pub fn current_time_string() -> String {
    let now = Local::now();
    format!("{}:{}:{}", now.hour(), now.minute(), now.second())
}

/// Parses a `h:m:s` string. Missing trailing components are zero.
///
/// # Errors
///
/// Returns [`TimeParseError`] when the string is empty, has more than three
/// components, contains a non-numeric component, or a field is out of range.
pub fn convert_time_string_to_hash(value: &str) -> Result<TimeOfDay, TimeParseError> {
    value.parse()
}
