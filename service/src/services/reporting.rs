//! Reporting service for weighing history and data export

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{deviation_tier, DeviationTier, GrowthPhase, WeighingStatus};

use crate::error::{AppError, AppResult};
use crate::services::BatchService;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    batches: BatchService,
}

/// One row per scheduled weighing of a batch
#[derive(Debug, Clone, Serialize)]
pub struct WeighingReportRow {
    pub week: u32,
    pub phase: Option<GrowthPhase>,
    pub expected_date: NaiveDate,
    pub ideal_weight_grams: u32,
    pub actual_weight_grams: Option<Decimal>,
    pub sample_size: Option<u32>,
    /// Rounded to two decimals
    pub deviation_percent: Option<Decimal>,
    pub tier: Option<DeviationTier>,
    pub status: WeighingStatus,
}

/// Batch-level summary of recorded weighings
#[derive(Debug, Clone, Serialize)]
pub struct BatchReportSummary {
    pub batch_id: String,
    pub scheduled: usize,
    pub completed: usize,
    pub needing_attention: usize,
    pub latest_tier: Option<DeviationTier>,
}

impl ReportingService {
    pub fn new(batches: BatchService) -> Self {
        Self { batches }
    }

    /// Weighing history of a batch, ascending by week
    pub fn batch_report(&self, batch_id: &str) -> AppResult<Vec<WeighingReportRow>> {
        let rows = self
            .batches
            .get_schedule(batch_id)?
            .into_iter()
            .map(|event| {
                let deviation = event.deviation_percent.map(|d| d.round_dp(2));
                WeighingReportRow {
                    week: event.week,
                    phase: event.phase(),
                    expected_date: event.expected_date,
                    ideal_weight_grams: event.ideal_weight_grams,
                    actual_weight_grams: event.actual_weight_grams,
                    sample_size: event.sample_size,
                    deviation_percent: deviation,
                    tier: event.deviation_percent.map(deviation_tier),
                    status: event.status,
                }
            })
            .collect();
        Ok(rows)
    }

    /// Completion counts and the tier of the most recent recorded weighing
    pub fn batch_summary(&self, batch_id: &str) -> AppResult<BatchReportSummary> {
        let rows = self.batch_report(batch_id)?;
        let completed: Vec<&WeighingReportRow> = rows
            .iter()
            .filter(|r| r.status == WeighingStatus::Completed)
            .collect();

        Ok(BatchReportSummary {
            batch_id: batch_id.to_string(),
            scheduled: rows.len(),
            completed: completed.len(),
            needing_attention: completed
                .iter()
                .filter(|r| r.tier.is_some_and(|t| t.needs_attention()))
                .count(),
            latest_tier: completed.last().and_then(|r| r.tier),
        })
    }

    /// Export report data as CSV
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
