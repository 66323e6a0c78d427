//! Weighing schedule generation and upcoming-event selection

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::calendar::scheduled_weeks;
use crate::curve::{curve_for_breed, REFERENCE_BREED};
use crate::models::{weighing_event_id, WeighingEvent, WeighingStatus};
use crate::types::DateRange;

/// Default lookahead for reminders, in days
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 3;

/// Build one pending weighing event per scheduled week, in ascending week order.
///
/// `breed` defaults to the reference breed. Every breed currently resolves to
/// the reference curve. Event ids only depend on `batch_id` and the week, so
/// regenerating a schedule reproduces the same ids.
pub fn generate_schedule(
    batch_id: &str,
    entry_date: NaiveDate,
    breed: Option<&str>,
    created_at: DateTime<Utc>,
) -> Vec<WeighingEvent> {
    let curve = curve_for_breed(breed.unwrap_or(REFERENCE_BREED));

    let events: Vec<WeighingEvent> = scheduled_weeks()
        .into_iter()
        .map(|week| {
            let age_in_days = week * 7;
            WeighingEvent {
                id: weighing_event_id(batch_id, week),
                batch_id: batch_id.to_string(),
                week,
                age_in_days,
                expected_date: entry_date + Days::new(u64::from(age_in_days)),
                ideal_weight_grams: curve.ideal_weight_grams(week),
                status: WeighingStatus::Pending,
                actual_weight_grams: None,
                sample_size: None,
                deviation_percent: None,
                recorded_at: None,
                notes: None,
                created_at,
            }
        })
        .collect();

    tracing::debug!(
        "Generated {} weighing events for batch {} (entry {})",
        events.len(),
        batch_id,
        entry_date
    );

    events
}

/// Pending events due between `today` and `today + lookahead_days`, inclusive,
/// sorted by expected date. The input is left untouched.
pub fn upcoming_events(
    events: &[WeighingEvent],
    lookahead_days: u32,
    today: NaiveDate,
) -> Vec<&WeighingEvent> {
    let window = DateRange::lookahead(today, lookahead_days);

    let mut upcoming: Vec<&WeighingEvent> = events
        .iter()
        .filter(|event| event.is_pending() && window.contains(event.expected_date))
        .collect();
    upcoming.sort_by_key(|event| event.expected_date);
    upcoming
}
