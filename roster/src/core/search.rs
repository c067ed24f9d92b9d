//! Free-text search over a roster
//!
//! A record matches when the lower-cased query is a substring of the first
//! name, last name, department, quote or the displayed start date, or when it
//! equals the status exactly. Status never matches by substring, so
//! `"active"` does not pick up inactive employees through their status.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use shared::Employee;

use super::roster::Roster;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// True when `employee` satisfies `query`; an empty query matches everything
pub fn matches(employee: &Employee, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_lowered(employee, &query.to_lowercase())
}

/// Order-preserving filter; returns the roster unchanged for an empty query
pub fn filter(roster: &Roster, query: &str) -> Roster {
    if query.is_empty() {
        return roster.clone();
    }
    filter_refs(roster, query).into_iter().cloned().collect()
}

/// Borrowing variant of [`filter`] used on every keystroke
pub fn filter_refs<'a>(roster: &'a Roster, query: &str) -> Vec<&'a Employee> {
    if query.is_empty() {
        return roster.iter().collect();
    }
    let needle = query.to_lowercase();
    roster
        .iter()
        .filter(|employee| matches_lowered(employee, &needle))
        .collect()
}

fn matches_lowered(employee: &Employee, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&employee.first_name)
        || contains(&employee.last_name)
        || contains(&employee.department)
        || employee.effective_status().as_str() == needle
        || contains(&employee.quote)
        || format_start_date(&employee.date_started)
            .map(|formatted| contains(&formatted))
            .unwrap_or(false)
}

/// Render a start date as `Mar 3rd, 2023`; `None` when it cannot be parsed
pub fn format_start_date(raw: &str) -> Option<String> {
    let date = parse_start_date(raw)?;
    let day = date.day();
    Some(format!(
        "{} {}{}, {}",
        date.format("%b"),
        day,
        ordinal_suffix(day),
        date.format("%Y")
    ))
}

/// Date-times keep the calendar day of their own offset
fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    for format in OFFSET_FORMATS {
        if let Ok(timestamp) = DateTime::parse_from_str(raw, format) {
            return Some(timestamp.date_naive());
        }
    }

    // A trailing `Z` is UTC, so the naive date is already the UTC day
    let local = raw.strip_suffix(['Z', 'z']).unwrap_or(raw);
    for format in DATE_TIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(local, format) {
            return Some(timestamp.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
