//! Batch registration and weighing calendar management

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Batch, WeighingEvent};
use uuid::Uuid;
use validator::Validate;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::store::{load_list, save_list, SharedStore, StoreKeys};

/// Batch service for registering batches and materializing their schedules
#[derive(Clone)]
pub struct BatchService {
    store: SharedStore,
    keys: StoreKeys,
    config: Arc<Config>,
}

/// Input for registering a batch
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterBatchInput {
    /// Generated when absent
    #[validate(length(min = 1, max = 64))]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 80))]
    pub breed: Option<String>,
    pub entry_date: NaiveDate,
    #[validate(range(min = 1))]
    pub bird_count: u32,
    pub notes: Option<String>,
}

/// Registered batch with its weighing calendar
#[derive(Debug, Clone, Serialize)]
pub struct BatchWithSchedule {
    #[serde(flatten)]
    pub batch: Batch,
    pub schedule: Vec<WeighingEvent>,
}

impl BatchService {
    /// Create a new BatchService instance
    pub fn new(store: SharedStore, config: Arc<Config>) -> Self {
        let keys = StoreKeys::with_prefix(&config.storage.key_prefix);
        Self {
            store,
            keys,
            config,
        }
    }

    /// Register a batch and generate its full weighing calendar
    pub fn register_batch(
        &self,
        input: RegisterBatchInput,
        now: DateTime<Utc>,
    ) -> AppResult<BatchWithSchedule> {
        input.validate()?;
        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Batch name cannot be empty".to_string(),
                message_es: "El nombre del lote no puede estar vacío".to_string(),
            });
        }
        shared::validate_entry_date(input.entry_date)
            .map_err(|msg| AppError::invalid("entry_date", msg))?;

        let id = input.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        shared::validate_batch_id(&id).map_err(|msg| AppError::invalid("id", msg))?;

        let guard = self.store.lock_writes()?;
        let mut batches: Vec<Batch> = load_list(self.store.as_ref(), &self.keys.batches)?;
        if batches.iter().any(|b| b.id == id) {
            return Err(AppError::DuplicateEntry(format!("Batch {}", id)));
        }

        let breed = input
            .breed
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| self.config.schedule.default_breed.clone());

        let batch = Batch {
            id,
            name: input.name.trim().to_string(),
            breed,
            entry_date: input.entry_date,
            bird_count: input.bird_count,
            notes: input.notes,
            created_at: now,
        };

        // events first: a failed merge leaves no batch behind, and a retry
        // skips whatever was already stored
        let schedule = batch.weighing_schedule(now);
        let inserted = self.merge_events(&schedule)?;

        batches.push(batch.clone());
        save_list(self.store.as_ref(), &self.keys.batches, &batches)?;
        drop(guard);

        tracing::info!(
            "Registered batch {} ({}, {} birds) with {} weighings",
            batch.id,
            batch.breed,
            batch.bird_count,
            inserted
        );

        Ok(BatchWithSchedule { batch, schedule })
    }

    /// Get a batch by ID
    pub fn get_batch(&self, batch_id: &str) -> AppResult<Batch> {
        load_list::<Batch>(self.store.as_ref(), &self.keys.batches)?
            .into_iter()
            .find(|b| b.id == batch_id)
            .ok_or_else(|| AppError::NotFound(format!("Batch {}", batch_id)))
    }

    /// All batches, oldest entry first
    pub fn list_batches(&self) -> AppResult<Vec<Batch>> {
        let mut batches: Vec<Batch> = load_list(self.store.as_ref(), &self.keys.batches)?;
        batches.sort_by(|a, b| a.entry_date.cmp(&b.entry_date).then_with(|| a.id.cmp(&b.id)));
        Ok(batches)
    }

    /// Weighing calendar of a batch, ascending by week
    pub fn get_schedule(&self, batch_id: &str) -> AppResult<Vec<WeighingEvent>> {
        self.get_batch(batch_id)?;

        let mut events: Vec<WeighingEvent> = load_list::<WeighingEvent>(self.store.as_ref(), &self.keys.weighings)?
            .into_iter()
            .filter(|e| e.batch_id == batch_id)
            .collect();
        events.sort_by_key(|e| e.week);
        Ok(events)
    }

    /// Re-run the generator for a batch, adding only events that are missing.
    ///
    /// Recorded weighings are never replaced. Returns how many events were added.
    pub fn regenerate_schedule(&self, batch_id: &str, now: DateTime<Utc>) -> AppResult<usize> {
        let guard = self.store.lock_writes()?;
        let batch = self.get_batch(batch_id)?;
        let inserted = self.merge_events(&batch.weighing_schedule(now))?;
        drop(guard);

        tracing::info!("Regenerated schedule for batch {}: {} new events", batch_id, inserted);
        Ok(inserted)
    }

    /// Append events whose ids are not stored yet; the caller holds the write lock
    fn merge_events(&self, generated: &[WeighingEvent]) -> AppResult<usize> {
        let mut events: Vec<WeighingEvent> = load_list(self.store.as_ref(), &self.keys.weighings)?;
        let existing: HashSet<String> = events.iter().map(|e| e.id.clone()).collect();

        let before = events.len();
        for event in generated {
            if existing.contains(&event.id) {
                tracing::debug!("Weighing {} already stored, keeping it", event.id);
                continue;
            }
            events.push(event.clone());
        }
        let inserted = events.len() - before;

        if inserted > 0 {
            save_list(self.store.as_ref(), &self.keys.weighings, &events)?;
        }
        Ok(inserted)
    }
}
