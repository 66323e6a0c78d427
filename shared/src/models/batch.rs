//! Batch ("lote") models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::{phase_for_week, GrowthPhase};
use crate::models::WeighingEvent;
use crate::schedule::generate_schedule;

/// A cohort of birds entered into production together
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batch {
    pub id: String,
    pub name: String,
    pub breed: String,
    /// Day the birds arrived; week 1 ends seven days later
    pub entry_date: NaiveDate,
    pub bird_count: u32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Batch {
    /// Days since entry, zero before the entry date
    pub fn age_in_days(&self, today: NaiveDate) -> u32 {
        let days = (today - self.entry_date).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    /// Completed weeks since entry
    pub fn age_in_weeks(&self, today: NaiveDate) -> u32 {
        self.age_in_days(today) / 7
    }

    /// Phase the batch is in today, `None` during its first week
    pub fn current_phase(&self, today: NaiveDate) -> Option<GrowthPhase> {
        phase_for_week(self.age_in_weeks(today))
    }

    /// Full weighing calendar for this batch
    pub fn weighing_schedule(&self, created_at: DateTime<Utc>) -> Vec<WeighingEvent> {
        generate_schedule(&self.id, self.entry_date, Some(&self.breed), created_at)
    }
}
