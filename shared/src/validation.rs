//! Validation utilities for batch and weighing input
//!
//! The schedule engine assumes validated input; callers run these checks
//! before handing values to it.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Heaviest average bird weight accepted, in grams
pub const MAX_WEIGHT_GRAMS: u32 = 10_000;

/// Longest reminder lookahead accepted, in days
pub const MAX_LOOKAHEAD_DAYS: u32 = 365;

/// Validate batch identifier (1-64 characters, no whitespace)
pub fn validate_batch_id(batch_id: &str) -> Result<(), &'static str> {
    if batch_id.is_empty() {
        return Err("Batch id cannot be empty");
    }
    if batch_id.chars().count() > 64 {
        return Err("Batch id must be at most 64 characters");
    }
    if batch_id.chars().any(char::is_whitespace) {
        return Err("Batch id cannot contain whitespace");
    }
    Ok(())
}

/// Validate production week (must be positive)
pub fn validate_week(week: u32) -> Result<(), &'static str> {
    if week == 0 {
        return Err("Week must be at least 1");
    }
    Ok(())
}

/// Validate a measured average weight in grams
pub fn validate_weight_grams(weight: Decimal) -> Result<(), &'static str> {
    if weight <= Decimal::ZERO {
        return Err("Weight must be greater than zero");
    }
    if weight > Decimal::from(MAX_WEIGHT_GRAMS) {
        return Err("Weight exceeds maximum for a single bird");
    }
    Ok(())
}

/// Validate reminder lookahead
pub fn validate_lookahead_days(days: u32) -> Result<(), &'static str> {
    if days > MAX_LOOKAHEAD_DAYS {
        return Err("Lookahead cannot exceed 365 days");
    }
    Ok(())
}

/// Validate batch entry date is in a plausible range
pub fn validate_entry_date(entry_date: NaiveDate) -> Result<(), &'static str> {
    if !(2000..=2200).contains(&entry_date.year()) {
        return Err("Entry date must be between the years 2000 and 2200");
    }
    Ok(())
}
