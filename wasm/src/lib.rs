//! WebAssembly module for the poultry weighing tracker
//!
//! Lets the browser front-end run the schedule engine client-side:
//! - Weighing calendar generation
//! - Ideal weight lookup
//! - Deviation calculation and classification
//! - Upcoming weighing selection for reminders
//!
//! Structured values cross the boundary as JSON strings.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Generate the weighing calendar for a batch
///
/// `entry_date` is `YYYY-MM-DD`; returns the events as a JSON array.
#[wasm_bindgen]
pub fn generate_weighing_schedule(
    batch_id: &str,
    entry_date: &str,
    breed: Option<String>,
) -> Result<String, JsValue> {
    let created_at = DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64)
        .unwrap_or_default();
    schedule_json(batch_id, entry_date, breed.as_deref(), created_at).map_err(|e| JsValue::from_str(&e))
}

/// Ideal weight in grams for a production week
#[wasm_bindgen]
pub fn ideal_weight_for_week(week: u32) -> Result<u32, JsValue> {
    validate_week(week).map_err(JsValue::from_str)?;
    Ok(shared::ideal_weight_grams(week))
}

/// Signed percentage deviation of a measured weight from the ideal
#[wasm_bindgen]
pub fn calculate_weight_deviation(actual: f64, ideal: f64) -> Result<f64, JsValue> {
    deviation_value(actual, ideal).map_err(|e| JsValue::from_str(&e))
}

/// Classify a deviation; returns `{ tier, color, description }` as JSON
#[wasm_bindgen]
pub fn classify_weight_deviation(deviation: f64, language: Option<String>) -> Result<String, JsValue> {
    classification_json(deviation, language.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Pending weighings due within the lookahead window from today's local date
#[wasm_bindgen]
pub fn upcoming_weighings(events_json: &str, lookahead_days: Option<u32>) -> Result<String, JsValue> {
    let now = js_sys::Date::new_0();
    let today = NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .ok_or_else(|| JsValue::from_str("Invalid current date"))?;

    upcoming_json(events_json, lookahead_days, today).map_err(|e| JsValue::from_str(&e))
}

/// Same as [`upcoming_weighings`] with an explicit `YYYY-MM-DD` day
#[wasm_bindgen]
pub fn upcoming_weighings_on(
    events_json: &str,
    lookahead_days: Option<u32>,
    today: &str,
) -> Result<String, JsValue> {
    let today = parse_date(today).map_err(|e| JsValue::from_str(&e))?;
    upcoming_json(events_json, lookahead_days, today).map_err(|e| JsValue::from_str(&e))
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("Invalid date '{}': {}", value, e))
}

fn to_decimal(field: &str, value: f64) -> Result<Decimal, String> {
    Decimal::try_from(value).map_err(|_| format!("Invalid {}: {}", field, value))
}

fn deviation_value(actual: f64, ideal: f64) -> Result<f64, String> {
    let actual = to_decimal("actual weight", actual)?;
    let ideal = to_decimal("ideal weight", ideal)?;
    let deviation = checked_deviation_percent(actual, ideal)
        .ok_or_else(|| "Deviation out of range".to_string())?;
    deviation
        .to_f64()
        .ok_or_else(|| "Deviation out of range".to_string())
}

fn schedule_json(
    batch_id: &str,
    entry_date: &str,
    breed: Option<&str>,
    created_at: DateTime<Utc>,
) -> Result<String, String> {
    validate_batch_id(batch_id)?;
    let entry_date = parse_date(entry_date)?;
    validate_entry_date(entry_date)?;

    let events = shared::generate_schedule(batch_id, entry_date, breed, created_at);
    serde_json::to_string(&events).map_err(|e| format!("Serialization error: {}", e))
}

fn classification_json(deviation: f64, language: Option<&str>) -> Result<String, String> {
    let language = match language {
        Some("en") => Language::English,
        Some("es") | None => Language::Spanish,
        Some(other) => return Err(format!("Unsupported language '{}'", other)),
    };
    let deviation = to_decimal("deviation", deviation)?;
    let classification = classify_deviation_in(deviation, language);
    serde_json::to_string(&classification).map_err(|e| format!("Serialization error: {}", e))
}

fn upcoming_json(
    events_json: &str,
    lookahead_days: Option<u32>,
    today: NaiveDate,
) -> Result<String, String> {
    let lookahead = lookahead_days.unwrap_or(shared::DEFAULT_LOOKAHEAD_DAYS);
    validate_lookahead_days(lookahead)?;

    let events: Vec<WeighingEvent> =
        serde_json::from_str(events_json).map_err(|e| format!("Invalid events JSON: {}", e))?;
    let upcoming = shared::upcoming_events(&events, lookahead, today);
    serde_json::to_string(&upcoming).map_err(|e| format!("Serialization error: {}", e))
}
