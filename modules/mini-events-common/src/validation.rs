//! Input validation for event and attendee mutations.
//!
//! Every function here is pure: it inspects plain values, never touches the
//! store, and reports the first rule it finds violated as an `EventError`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{EventError, EventResult};
use crate::file_config::Limits;
use crate::types::{AddAttendeeInput, CreateEventInput, NewAttendee, NewEvent};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse an ISO-8601 event date. Offsets are honoured; values without one
/// are taken as UTC, and a bare date means midnight UTC.
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Trim an id argument, rejecting blanks. `field` names it in the message.
pub fn validate_id(field: &str, value: &str) -> EventResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EventError::invalid_input(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

pub fn validate_create_event(
    input: &CreateEventInput,
    limits: &Limits,
    now: DateTime<Utc>,
) -> EventResult<NewEvent> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(EventError::invalid_input("Event title is required"));
    }
    check_length("Event title", title, limits.max_event_title_length)?;

    let date = input.date.trim();
    if date.is_empty() {
        return Err(EventError::invalid_input("Event date is required"));
    }
    let when = parse_event_date(date).ok_or_else(|| {
        EventError::invalid_input(format!("Event date {date:?} is not a valid ISO-8601 date"))
    })?;
    if when < now {
        return Err(EventError::invalid_input("Event date cannot be in the past"));
    }

    Ok(NewEvent {
        title: title.to_string(),
        date: date.to_string(),
    })
}

pub fn validate_add_attendee(input: &AddAttendeeInput, limits: &Limits) -> EventResult<NewAttendee> {
    let event_id = validate_id("Event ID", &input.event_id)?;

    let name = input.name.trim();
    if name.is_empty() {
        return Err(EventError::invalid_input("Attendee name is required"));
    }
    check_length("Attendee name", name, limits.max_attendee_name_length)?;

    let email = match normalize_email(input.email.as_deref()) {
        Some(email) => {
            if !email.contains('@') {
                return Err(EventError::invalid_input("Invalid email format"));
            }
            check_length("Attendee email", &email, limits.max_attendee_email_length)?;
            Some(email)
        }
        None => None,
    };

    Ok(NewAttendee {
        event_id,
        name: name.to_string(),
        email,
        rsvp: input.rsvp,
    })
}

/// Trim and lower-case. Blank emails count as absent.
pub fn normalize_email(email: Option<&str>) -> Option<String> {
    email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_lowercase)
}

/// True when `candidate` matches any existing email, ignoring case.
/// A missing candidate never collides.
pub fn has_duplicate_email<'a, I>(candidate: Option<&str>, existing: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let Some(candidate) = candidate.map(str::trim).filter(|c| !c.is_empty()) else {
        return false;
    };
    let candidate = candidate.to_lowercase();
    existing
        .into_iter()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .any(|e| e.to_lowercase() == candidate)
}

fn check_length(field: &str, value: &str, max: usize) -> EventResult<()> {
    if value.chars().count() > max {
        return Err(EventError::invalid_input(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
