//! Example data for a fresh store

use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use shared::Batch;

use crate::error::{AppError, AppResult};
use crate::services::batch::RegisterBatchInput;
use crate::services::weighing::RecordWeighingInput;
use crate::AppState;

pub const EXAMPLE_BATCH_ID: &str = "lote-ejemplo";

/// Percent offsets from the ideal weight for weeks 1 to 9
const EXAMPLE_OFFSETS: [i64; 9] = [2, -1, 4, -6, 3, -12, -2, 1, -23];

/// Register a batch entered ten weeks before `today` and record its past weighings
pub fn seed_example_data(state: &AppState, today: NaiveDate, now: DateTime<Utc>) -> AppResult<Batch> {
    let entry_date = today
        .checked_sub_days(Days::new(70))
        .ok_or_else(|| AppError::Internal(format!("cannot seed example data for {}", today)))?;

    let registered = state.batches.register_batch(
        RegisterBatchInput {
            id: Some(EXAMPLE_BATCH_ID.to_string()),
            name: "Galpón 1".to_string(),
            breed: None,
            entry_date,
            bird_count: 4800,
            notes: Some("Example batch".to_string()),
        },
        now,
    )?;

    for (event, offset) in registered.schedule.iter().zip(EXAMPLE_OFFSETS) {
        if event.expected_date >= today {
            break;
        }
        let ideal = Decimal::from(event.ideal_weight_grams);
        let weight = ideal * Decimal::from(100 + offset) / Decimal::from(100);
        state.weighings.record_weighing(
            RecordWeighingInput {
                event_id: event.id.clone(),
                average_weight_grams: weight.round_dp(1),
                sample_size: Some(50),
                notes: None,
            },
            now,
        )?;
    }

    tracing::info!("Seeded example batch {} entered {}", EXAMPLE_BATCH_ID, entry_date);
    Ok(registered.batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::Config;

    #[test]
    fn test_seed_records_past_weighings() {
        let state = AppState::new(MemoryStore::shared(), Config::default());
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let batch = seed_example_data(&state, today, Utc::now()).unwrap();
        assert_eq!(batch.id, EXAMPLE_BATCH_ID);

        let schedule = state.batches.get_schedule(EXAMPLE_BATCH_ID).unwrap();
        let completed = schedule.iter().filter(|e| !e.is_pending()).count();
        assert_eq!(completed, 9);

        // week 10 falls on today and is still pending
        let reminders = state.weighings.upcoming_reminders(None, today).unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].event.week, 10);
        assert_eq!(reminders[0].days_until, 0);
    }
}
