use chrono::{Local, NaiveDateTime, Timelike};

/// Time source for request handlers.
///
/// `System` reads the local system clock. `Fixed` always returns the same
/// instant so tests can pin the response to a known value.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Current instant as naive local time (no timezone offset).
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(instant) => *instant,
        }
    }
}

/// Format a timestamp as an ISO-8601 string, e.g. `2024-01-15T10:30:00.123456`.
///
/// The fractional part carries microsecond precision and is omitted entirely
/// when the sub-second component is zero.
pub fn format_iso8601(timestamp: &NaiveDateTime) -> String {
    if timestamp.nanosecond() / 1_000 == 0 {
        timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
