//! Weighing event models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{phase_for_week, GrowthPhase};

/// One scheduled or completed weighing for a batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeighingEvent {
    /// Derived from batch id and week, see [`weighing_event_id`]
    pub id: String,
    pub batch_id: String,
    pub week: u32,
    /// Always `week * 7`
    pub age_in_days: u32,
    pub expected_date: NaiveDate,
    pub ideal_weight_grams: u32,
    pub status: WeighingStatus,
    /// Average measured weight, set when the weighing is recorded
    #[serde(default)]
    pub actual_weight_grams: Option<Decimal>,
    /// Birds weighed for the average
    #[serde(default)]
    pub sample_size: Option<u32>,
    #[serde(default)]
    pub deviation_percent: Option<Decimal>,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WeighingEvent {
    pub fn is_pending(&self) -> bool {
        self.status == WeighingStatus::Pending
    }

    pub fn phase(&self) -> Option<GrowthPhase> {
        phase_for_week(self.week)
    }
}

/// Status of a weighing event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeighingStatus {
    #[default]
    Pending,
    Completed,
}

impl std::fmt::Display for WeighingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeighingStatus::Pending => write!(f, "Pending"),
            WeighingStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Stable event identifier: the same batch and week always give the same id
pub fn weighing_event_id(batch_id: &str, week: u32) -> String {
    format!("{}-W{:02}", batch_id, week)
}
