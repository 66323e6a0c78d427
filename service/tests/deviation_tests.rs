//! Deviation calculation and classification tests

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{classify_deviation, deviation_percent, deviation_tier, DeviationTier};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// =============================================================================
// Deviation Calculator
// =============================================================================

mod calculator {
    use super::*;

    #[test]
    fn on_ideal_weight() {
        assert_eq!(deviation_percent(dec("1660"), dec("1660")), Decimal::ZERO);
    }

    #[test]
    fn above_ideal_weight() {
        let d = deviation_percent(dec("1700"), dec("1660"));
        assert!((d - dec("2.41")).abs() < dec("0.01"), "got {}", d);
        assert!(d > Decimal::ZERO);
    }

    #[test]
    fn below_ideal_weight() {
        let d = deviation_percent(dec("1494"), dec("1660"));
        assert_eq!(d, dec("-10"));
    }

    #[test]
    fn zero_ideal_weight_gives_zero() {
        assert_eq!(deviation_percent(dec("70"), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(deviation_percent(dec("-70"), Decimal::ZERO), Decimal::ZERO);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any actual weight against a zero ideal is zero
        #[test]
        fn prop_zero_ideal_guard(actual in 0i64..1_000_000) {
            prop_assert_eq!(deviation_percent(Decimal::new(actual, 1), Decimal::ZERO), Decimal::ZERO);
        }

        /// Sign follows which side of the ideal the bird is on
        #[test]
        fn prop_sign_matches_direction(actual in 1u32..10_000, ideal in 1u32..3_000) {
            let d = deviation_percent(Decimal::from(actual), Decimal::from(ideal));
            if actual > ideal {
                prop_assert!(d > Decimal::ZERO);
            } else if actual < ideal {
                prop_assert!(d < Decimal::ZERO);
            } else {
                prop_assert_eq!(d, Decimal::ZERO);
            }
        }
    }
}

// =============================================================================
// Deviation Classifier
// =============================================================================

mod classifier {
    use super::*;

    #[test]
    fn example_values() {
        assert_eq!(classify_deviation(dec("3")).tier, DeviationTier::Excellent);
        assert_eq!(classify_deviation(dec("-8")).tier, DeviationTier::Good);
        assert_eq!(classify_deviation(dec("15")).tier, DeviationTier::Attention);
        assert_eq!(classify_deviation(dec("25")).tier, DeviationTier::Critical);
    }

    #[test]
    fn inclusive_upper_bounds() {
        assert_eq!(classify_deviation(dec("5")).tier, DeviationTier::Excellent);
        assert_eq!(classify_deviation(dec("5.01")).tier, DeviationTier::Good);
        assert_eq!(classify_deviation(dec("10")).tier, DeviationTier::Good);
        assert_eq!(classify_deviation(dec("10.01")).tier, DeviationTier::Attention);
        assert_eq!(classify_deviation(dec("20")).tier, DeviationTier::Attention);
        assert_eq!(classify_deviation(dec("20.01")).tier, DeviationTier::Critical);
    }

    #[test]
    fn negative_deviation_uses_magnitude() {
        assert_eq!(classify_deviation(dec("-5")).tier, DeviationTier::Excellent);
        assert_eq!(classify_deviation(dec("-20")).tier, DeviationTier::Attention);
        assert_eq!(classify_deviation(dec("-20.01")).tier, DeviationTier::Critical);
    }

    #[test]
    fn each_tier_has_distinct_color() {
        let tiers = [
            DeviationTier::Excellent,
            DeviationTier::Good,
            DeviationTier::Attention,
            DeviationTier::Critical,
        ];
        let colors: std::collections::HashSet<&str> = tiers.iter().map(|t| t.color()).collect();
        assert_eq!(colors.len(), tiers.len());
    }

    #[test]
    fn classification_fields_match_tier() {
        let c = classify_deviation(dec("15"));
        assert_eq!(c.color, DeviationTier::Attention.color());
        assert_eq!(c.description, "Deviation requires attention");
    }

    /// Reference tier by plain threshold comparison
    fn expected_tier(magnitude: Decimal) -> DeviationTier {
        match magnitude {
            m if m <= Decimal::from(5) => DeviationTier::Excellent,
            m if m <= Decimal::from(10) => DeviationTier::Good,
            m if m <= Decimal::from(20) => DeviationTier::Attention,
            _ => DeviationTier::Critical,
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Classification only depends on magnitude
        #[test]
        fn prop_symmetric(hundredths in 0i64..10_000) {
            let d = Decimal::new(hundredths, 2);
            prop_assert_eq!(deviation_tier(d), deviation_tier(-d));
        }

        /// Tiers are exhaustive and match the thresholds
        #[test]
        fn prop_matches_thresholds(hundredths in -10_000i64..10_000) {
            let d = Decimal::new(hundredths, 2);
            prop_assert_eq!(classify_deviation(d).tier, expected_tier(d.abs()));
        }

        /// Larger deviations never land in a milder tier
        #[test]
        fn prop_monotonic(a in 0i64..5_000, b in 0i64..5_000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(deviation_tier(Decimal::new(low, 2)) <= deviation_tier(Decimal::new(high, 2)));
        }
    }
}
