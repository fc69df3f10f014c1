use chrono::{NaiveDate, Utc};

use crate::error::CoreError;
use crate::models::{Address, EventPatch, Locality, NewEvent};

/// Validate a creation payload. Fails fast: the first violated rule is
/// reported and the rest are not evaluated.
///
/// Enforces the strict rule set: the date must be strictly in the future
/// and the start time must come strictly before the end time.
pub fn validate_new_event(event: &NewEvent) -> Result<(), CoreError> {
    if let Some(id) = event.id {
        check_positive_int("id", id)?;
    }
    check_name(&event.name)?;
    check_description(&event.description)?;
    check_ticket_price(event.ticket_price)?;
    check_positive_int("totalCapacity", event.total_capacity)?;
    check_date(event.date)?;
    check_time("startTime", &event.start_time)?;
    check_time("endTime", &event.end_time)?;
    if let Some(age) = event.min_age {
        check_min_age(age)?;
    }
    check_positive_int("categoryId", event.category_id)?;
    check_address(&event.address)?;
    check_locality(&event.locality)?;
    check_time_order(&event.start_time, &event.end_time)
}

/// Validate a partial update payload. Each field present is subject to the
/// same rule as on creation; absent fields are always accepted. The
/// time-order rule only applies when both times are present in the patch.
pub fn validate_event_patch(patch: &EventPatch) -> Result<(), CoreError> {
    if let Some(name) = &patch.name {
        check_name(name)?;
    }
    if let Some(description) = &patch.description {
        check_description(description)?;
    }
    if let Some(price) = patch.ticket_price {
        check_ticket_price(price)?;
    }
    if let Some(capacity) = patch.total_capacity {
        check_positive_int("totalCapacity", capacity)?;
    }
    if let Some(date) = patch.date {
        check_date(date)?;
    }
    if let Some(start) = &patch.start_time {
        check_time("startTime", start)?;
    }
    if let Some(end) = &patch.end_time {
        check_time("endTime", end)?;
    }
    if let Some(age) = patch.min_age {
        check_min_age(age)?;
    }
    if let Some(category) = patch.category_id {
        check_positive_int("categoryId", category)?;
    }
    if let Some(address) = &patch.address {
        check_address(address)?;
    }
    if let Some(locality) = &patch.locality {
        check_locality(locality)?;
    }
    if let (Some(start), Some(end)) = (&patch.start_time, &patch.end_time) {
        check_time_order(start, end)?;
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if !(3..=100).contains(&len) {
        return Err(CoreError::Validation(
            "name must be between 3 and 100 characters".into(),
        ));
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), CoreError> {
    let len = description.chars().count();
    if !(10..=500).contains(&len) {
        return Err(CoreError::Validation(
            "description must be between 10 and 500 characters".into(),
        ));
    }
    Ok(())
}

fn check_ticket_price(price: f64) -> Result<(), CoreError> {
    if price.is_nan() || price <= 0.0 {
        return Err(CoreError::Validation(
            "ticketPrice must be a positive number".into(),
        ));
    }
    Ok(())
}

fn check_positive_int(field: &str, value: i64) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(())
}

fn check_date(date: NaiveDate) -> Result<(), CoreError> {
    if date <= Utc::now().date_naive() {
        return Err(CoreError::Validation(
            "date must be strictly in the future".into(),
        ));
    }
    Ok(())
}

fn check_min_age(age: i64) -> Result<(), CoreError> {
    if !(0..=99).contains(&age) {
        return Err(CoreError::Validation(
            "minAge must be an integer between 0 and 99".into(),
        ));
    }
    Ok(())
}

fn check_time(field: &str, value: &str) -> Result<(), CoreError> {
    if minutes_since_midnight(value).is_none() {
        return Err(CoreError::Validation(format!(
            "{field} must be a 24-hour time in HH:MM format"
        )));
    }
    Ok(())
}

fn check_time_order(start: &str, end: &str) -> Result<(), CoreError> {
    // Both sides were already matched against the HH:MM pattern.
    if let (Some(start), Some(end)) = (minutes_since_midnight(start), minutes_since_midnight(end))
        && start >= end
    {
        return Err(CoreError::Validation(
            "startTime must be earlier than endTime".into(),
        ));
    }
    Ok(())
}

fn check_address(address: &Address) -> Result<(), CoreError> {
    if address.street.trim().is_empty() {
        return Err(CoreError::Validation(
            "address.street must not be empty".into(),
        ));
    }
    check_positive_int("address.number", address.number)
}

fn check_locality(locality: &Locality) -> Result<(), CoreError> {
    if locality.name.trim().is_empty() {
        return Err(CoreError::Validation(
            "locality.name must not be empty".into(),
        ));
    }
    if locality.postal_code.trim().is_empty() {
        return Err(CoreError::Validation(
            "locality.postalCode must not be empty".into(),
        ));
    }
    Ok(())
}

/// Parse `H:MM`/`HH:MM` (hour 0-23, minute 00-59, minute always two
/// digits) into minutes since midnight. Returns `None` on any deviation
/// from the pattern.
fn minutes_since_midnight(value: &str) -> Option<u32> {
    let (hour, minute) = value.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().all(|b| b.is_ascii_digit()) || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}
