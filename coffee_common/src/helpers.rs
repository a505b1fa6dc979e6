use std::{num::ParseIntError, time::Duration};

/// Parse a boolean flag from a string value, or return the given default value otherwise.
pub fn parse_boolean_flag(value: Option<String>, default: bool) -> bool {
    let value = match value {
        Some(v) => v,
        None => return default,
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

/// Parse a whole number of seconds, e.g. `" 10 "`, into a [`Duration`].
pub fn parse_duration_secs(value: &str) -> Result<Duration, ParseIntError> {
    value.trim().parse::<u64>().map(Duration::from_secs)
}

/// Returns the trimmed value, or `None` if the value is missing or consists only of whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
