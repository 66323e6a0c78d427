//! Weight deviation against the ideal curve

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Severity tier of a weight deviation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeviationTier {
    /// Up to 5%
    Excellent,
    /// Up to 10%
    Good,
    /// Up to 20%
    Attention,
    /// Above 20%
    Critical,
}

impl DeviationTier {
    /// Display color
    pub fn color(&self) -> &'static str {
        match self {
            DeviationTier::Excellent => "#16a34a",
            DeviationTier::Good => "#2563eb",
            DeviationTier::Attention => "#f59e0b",
            DeviationTier::Critical => "#dc2626",
        }
    }

    pub fn description(&self, language: Language) -> &'static str {
        match (self, language) {
            (DeviationTier::Excellent, Language::English) => "Within ideal range",
            (DeviationTier::Excellent, Language::Spanish) => "Dentro del rango ideal",
            (DeviationTier::Good, Language::English) => "Small acceptable deviation",
            (DeviationTier::Good, Language::Spanish) => "Desviación pequeña aceptable",
            (DeviationTier::Attention, Language::English) => "Deviation requires attention",
            (DeviationTier::Attention, Language::Spanish) => "La desviación requiere atención",
            (DeviationTier::Critical, Language::English) => {
                "Critical deviation - immediate action required"
            }
            (DeviationTier::Critical, Language::Spanish) => {
                "Desviación crítica - acción inmediata"
            }
        }
    }

    /// Tiers an operator has to act on
    pub fn needs_attention(&self) -> bool {
        matches!(self, DeviationTier::Attention | DeviationTier::Critical)
    }
}

impl std::fmt::Display for DeviationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviationTier::Excellent => write!(f, "Excellent"),
            DeviationTier::Good => write!(f, "Good"),
            DeviationTier::Attention => write!(f, "Attention"),
            DeviationTier::Critical => write!(f, "Critical"),
        }
    }
}

/// Classification result handed to the presentation layer
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DeviationClassification {
    pub tier: DeviationTier,
    pub color: &'static str,
    pub description: &'static str,
}

/// Signed percentage deviation of `actual` from `ideal`.
///
/// Positive means above the ideal weight. A zero ideal weight yields zero.
/// A result too large for `Decimal` saturates to `Decimal::MAX` or
/// `Decimal::MIN`, which still classifies as critical.
pub fn deviation_percent(actual: Decimal, ideal: Decimal) -> Decimal {
    checked_deviation_percent(actual, ideal).unwrap_or_else(|| {
        if (actual > ideal) == ideal.is_sign_positive() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Same as [`deviation_percent`], returning `None` when the result overflows
pub fn checked_deviation_percent(actual: Decimal, ideal: Decimal) -> Option<Decimal> {
    if ideal.is_zero() {
        return Some(Decimal::ZERO);
    }
    actual
        .checked_sub(ideal)?
        .checked_div(ideal)?
        .checked_mul(Decimal::from(100))
}

/// Tier for a deviation, judged on its absolute value (upper bounds inclusive)
pub fn deviation_tier(deviation: Decimal) -> DeviationTier {
    let magnitude = deviation.abs();
    if magnitude <= Decimal::from(5) {
        DeviationTier::Excellent
    } else if magnitude <= Decimal::from(10) {
        DeviationTier::Good
    } else if magnitude <= Decimal::from(20) {
        DeviationTier::Attention
    } else {
        DeviationTier::Critical
    }
}

/// Classify a deviation with English text
pub fn classify_deviation(deviation: Decimal) -> DeviationClassification {
    classify_deviation_in(deviation, Language::English)
}

pub fn classify_deviation_in(deviation: Decimal, language: Language) -> DeviationClassification {
    let tier = deviation_tier(deviation);
    DeviationClassification {
        tier,
        color: tier.color(),
        description: tier.description(language),
    }
}
