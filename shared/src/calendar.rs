//! Weighing calendar: which production weeks get a scheduled weighing
//!
//! Rearing is weighed every week through week 18, growth every week from 19
//! to 22, and production every fourth week from 26 through 74.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPhase {
    Rearing,
    Growth,
    Production,
}

impl std::fmt::Display for GrowthPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthPhase::Rearing => write!(f, "Rearing"),
            GrowthPhase::Growth => write!(f, "Growth"),
            GrowthPhase::Production => write!(f, "Production"),
        }
    }
}

/// One phase of the weighing calendar
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SchedulePhase {
    pub phase: GrowthPhase,
    pub first_week: u32,
    pub last_week: u32,
    /// Weeks between two consecutive weighings
    pub interval_weeks: u32,
}

impl SchedulePhase {
    /// Weeks of this phase that carry a weighing, ascending
    pub fn weeks(&self) -> impl Iterator<Item = u32> {
        (self.first_week..=self.last_week).step_by(self.interval_weeks.max(1) as usize)
    }
}

/// Phase definitions, ordered so their weeks never overlap
pub static SCHEDULE_PHASES: [SchedulePhase; 3] = [
    SchedulePhase {
        phase: GrowthPhase::Rearing,
        first_week: 1,
        last_week: 18,
        interval_weeks: 1,
    },
    SchedulePhase {
        phase: GrowthPhase::Growth,
        first_week: 19,
        last_week: 22,
        interval_weeks: 1,
    },
    SchedulePhase {
        phase: GrowthPhase::Production,
        first_week: 26,
        last_week: 74,
        interval_weeks: 4,
    },
];

/// All scheduled weeks across every phase, ascending and without duplicates
pub fn scheduled_weeks() -> Vec<u32> {
    SCHEDULE_PHASES.iter().flat_map(SchedulePhase::weeks).collect()
}

/// Phase a batch is in at the given week.
///
/// Weeks between the end of growth and the first production weighing
/// (23 to 25) already count as production. Week 0 has no phase.
pub fn phase_for_week(week: u32) -> Option<GrowthPhase> {
    match week {
        0 => None,
        1..=18 => Some(GrowthPhase::Rearing),
        19..=22 => Some(GrowthPhase::Growth),
        _ => Some(GrowthPhase::Production),
    }
}
