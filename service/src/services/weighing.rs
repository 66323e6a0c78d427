//! Weighing service: recording measurements and listing reminders

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    classify_deviation, deviation_percent, upcoming_events, Batch, DeviationClassification,
    DeviationTier, WeighingEvent, WeighingStatus,
};
use validator::Validate;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::store::{load_list, save_list, SharedStore, StoreKeys};

/// Weighing service for measurements and reminders
#[derive(Clone)]
pub struct WeighingService {
    store: SharedStore,
    keys: StoreKeys,
    config: Arc<Config>,
}

/// Input for recording a weighing
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordWeighingInput {
    #[validate(length(min = 1))]
    pub event_id: String,
    /// Average weight of the sampled birds, in grams
    pub average_weight_grams: Decimal,
    #[validate(range(min = 1))]
    pub sample_size: Option<u32>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Outcome of a recorded weighing
#[derive(Debug, Clone, Serialize)]
pub struct WeighingResult {
    pub event: WeighingEvent,
    pub deviation_percent: Decimal,
    pub classification: DeviationClassification,
}

/// Pending weighing shown in the reminder view
#[derive(Debug, Clone, Serialize)]
pub struct WeighingReminder {
    pub event: WeighingEvent,
    pub batch_name: String,
    pub days_until: i64,
}

impl WeighingService {
    /// Create a new WeighingService instance
    pub fn new(store: SharedStore, config: Arc<Config>) -> Self {
        let keys = StoreKeys::with_prefix(&config.storage.key_prefix);
        Self {
            store,
            keys,
            config,
        }
    }

    /// Record the measured average weight for a pending weighing
    pub fn record_weighing(
        &self,
        input: RecordWeighingInput,
        now: DateTime<Utc>,
    ) -> AppResult<WeighingResult> {
        input.validate()?;
        shared::validate_weight_grams(input.average_weight_grams)
            .map_err(|msg| AppError::invalid("average_weight_grams", msg))?;

        let guard = self.store.lock_writes()?;
        let mut events: Vec<WeighingEvent> = load_list(self.store.as_ref(), &self.keys.weighings)?;
        let event = events
            .iter_mut()
            .find(|e| e.id == input.event_id)
            .ok_or_else(|| AppError::NotFound(format!("Weighing {}", input.event_id)))?;

        if event.status != WeighingStatus::Pending {
            return Err(AppError::InvalidStateTransition(format!(
                "Weighing {} is already {}",
                event.id,
                event.status.to_string().to_lowercase()
            )));
        }

        let deviation = deviation_percent(
            input.average_weight_grams,
            Decimal::from(event.ideal_weight_grams),
        );
        let classification = classify_deviation(deviation);

        event.status = WeighingStatus::Completed;
        event.actual_weight_grams = Some(input.average_weight_grams);
        event.deviation_percent = Some(deviation);
        event.recorded_at = Some(now);
        event.sample_size = input.sample_size;
        event.notes = input.notes;
        let event = event.clone();

        save_list(self.store.as_ref(), &self.keys.weighings, &events)?;
        drop(guard);

        if classification.tier == DeviationTier::Critical {
            tracing::warn!(
                "Critical deviation on {} (week {}): {}g vs ideal {}g ({}%)",
                event.id,
                event.week,
                input.average_weight_grams,
                event.ideal_weight_grams,
                deviation.round_dp(2)
            );
        } else {
            tracing::info!(
                "Recorded weighing {} (week {}): {}% ({})",
                event.id,
                event.week,
                deviation.round_dp(2),
                classification.tier
            );
        }

        Ok(WeighingResult {
            event,
            deviation_percent: deviation,
            classification,
        })
    }

    /// Pending weighings due within the lookahead window, soonest first.
    ///
    /// Uses the configured lookahead when `lookahead_days` is `None`.
    pub fn upcoming_reminders(
        &self,
        lookahead_days: Option<u32>,
        today: NaiveDate,
    ) -> AppResult<Vec<WeighingReminder>> {
        let lookahead = lookahead_days.unwrap_or(self.config.schedule.lookahead_days);
        shared::validate_lookahead_days(lookahead)
            .map_err(|msg| AppError::invalid("lookahead_days", msg))?;

        let events: Vec<WeighingEvent> = load_list(self.store.as_ref(), &self.keys.weighings)?;
        let names = self.batch_names()?;

        let reminders: Vec<WeighingReminder> = upcoming_events(&events, lookahead, today)
            .into_iter()
            .map(|event| WeighingReminder {
                batch_name: names.get(&event.batch_id).cloned().unwrap_or_default(),
                days_until: (event.expected_date - today).num_days(),
                event: event.clone(),
            })
            .collect();

        tracing::debug!(
            "{} weighing reminders for {} (lookahead {} days)",
            reminders.len(),
            today,
            lookahead
        );
        Ok(reminders)
    }

    /// Pending weighings whose expected date has already passed, oldest first
    pub fn overdue_weighings(&self, today: NaiveDate) -> AppResult<Vec<WeighingEvent>> {
        let mut overdue: Vec<WeighingEvent> = load_list::<WeighingEvent>(self.store.as_ref(), &self.keys.weighings)?
            .into_iter()
            .filter(|e| e.is_pending() && e.expected_date < today)
            .collect();
        overdue.sort_by_key(|e| e.expected_date);
        Ok(overdue)
    }

    fn batch_names(&self) -> AppResult<HashMap<String, String>> {
        let batches: Vec<Batch> = load_list(self.store.as_ref(), &self.keys.batches)?;
        Ok(batches.into_iter().map(|b| (b.id, b.name)).collect())
    }
}
