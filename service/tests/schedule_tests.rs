//! Weighing schedule tests
//!
//! Covers the ideal-weight lookup, schedule generation and upcoming-event
//! selection with unit and property-based tests.

use chrono::{Duration, NaiveDate, Utc};
use proptest::prelude::*;
use shared::{
    generate_schedule, ideal_weight_grams, scheduled_weeks, upcoming_events, WeighingEvent,
    WeighingStatus, REFERENCE_CURVE,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pending_on(id: &str, expected: NaiveDate) -> WeighingEvent {
    let mut event = generate_schedule("lote-t", date(2024, 1, 1), None, Utc::now())
        .into_iter()
        .next()
        .unwrap();
    event.id = id.to_string();
    event.expected_date = expected;
    event
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Entry dates between 2000 and roughly 2100
fn entry_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..36_500).prop_map(|offset| date(2000, 1, 1) + Duration::days(offset))
}

/// Batch identifiers without whitespace
fn batch_id_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,32}"
}

/// Events spread around a fixed day with random status
fn events_strategy() -> impl Strategy<Value = Vec<(i64, bool)>> {
    prop::collection::vec((-10i64..20, any::<bool>()), 0..40)
}

// ============================================================================
// Ideal-Weight Table
// ============================================================================

mod ideal_weight {
    use super::*;

    #[test]
    fn tabulated_weeks_return_table_value() {
        for &(week, grams) in REFERENCE_CURVE.points {
            assert_eq!(ideal_weight_grams(week), grams, "week {}", week);
        }
    }

    #[test]
    fn known_reference_weights() {
        assert_eq!(ideal_weight_grams(1), 70);
        assert_eq!(ideal_weight_grams(22), 1660);
        assert_eq!(ideal_weight_grams(74), 2070);
    }

    #[test]
    fn scheduled_weeks_all_have_a_weight() {
        for week in scheduled_weeks() {
            assert!(ideal_weight_grams(week) > 0, "week {}", week);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Weeks past the table sit on the plateau
        #[test]
        fn prop_plateau_beyond_table(week in 75u32..10_000) {
            prop_assert_eq!(ideal_weight_grams(week), 2070);
        }
    }
}

// ============================================================================
// Schedule Generator
// ============================================================================

mod generator {
    use super::*;

    #[test]
    fn example_batch_first_and_last_event() {
        let events = generate_schedule("lote-1", date(2024, 1, 16), None, Utc::now());

        assert_eq!(events[0].week, 1);
        assert_eq!(events[0].expected_date, date(2024, 1, 23));
        assert_eq!(events[0].ideal_weight_grams, 70);

        let last = events.last().unwrap();
        assert_eq!(last.week, 74);
        assert_eq!(last.ideal_weight_grams, 2070);
        assert_eq!(last.expected_date, date(2024, 1, 16) + Duration::days(518));
    }

    #[test]
    fn events_start_pending_without_measurements() {
        let events = generate_schedule("lote-1", date(2024, 1, 16), None, Utc::now());
        for event in &events {
            assert_eq!(event.status, WeighingStatus::Pending);
            assert!(event.actual_weight_grams.is_none());
            assert!(event.recorded_at.is_none());
        }
    }

    #[test]
    fn event_ids_unique_within_batch() {
        let events = generate_schedule("lote-1", date(2024, 1, 16), None, Utc::now());
        let ids: std::collections::HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), events.len());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Length and order follow the calendar
        #[test]
        fn prop_schedule_follows_calendar(
            batch_id in batch_id_strategy(),
            entry in entry_date_strategy(),
        ) {
            let events = generate_schedule(&batch_id, entry, None, Utc::now());
            let weeks: Vec<u32> = events.iter().map(|e| e.week).collect();
            prop_assert_eq!(weeks, scheduled_weeks());
        }

        /// Age and expected date are derived from the week
        #[test]
        fn prop_dates_derived_from_week(
            batch_id in batch_id_strategy(),
            entry in entry_date_strategy(),
        ) {
            for event in generate_schedule(&batch_id, entry, Some("Hy-Line Brown"), Utc::now()) {
                prop_assert!(event.week > 0);
                prop_assert_eq!(event.age_in_days, event.week * 7);
                prop_assert_eq!(
                    event.expected_date,
                    entry + Duration::days(i64::from(event.age_in_days))
                );
                prop_assert_eq!(event.batch_id.as_str(), batch_id.as_str());
            }
        }

        /// Generating twice yields the same ids and dates
        #[test]
        fn prop_generation_is_idempotent(
            batch_id in batch_id_strategy(),
            entry in entry_date_strategy(),
        ) {
            let first = generate_schedule(&batch_id, entry, None, Utc::now());
            let second = generate_schedule(&batch_id, entry, None, Utc::now());

            let ids = |events: &[WeighingEvent]| events.iter().map(|e| e.id.clone()).collect::<Vec<_>>();
            let dates = |events: &[WeighingEvent]| events.iter().map(|e| e.expected_date).collect::<Vec<_>>();

            prop_assert_eq!(ids(&first), ids(&second));
            prop_assert_eq!(dates(&first), dates(&second));
        }
    }
}

// ============================================================================
// Upcoming-Events Selector
// ============================================================================

mod upcoming {
    use super::*;

    #[test]
    fn three_day_window_example() {
        let today = date(2024, 6, 10);
        let mut completed = pending_on("done", date(2024, 6, 12));
        completed.status = WeighingStatus::Completed;

        let events = vec![
            pending_on("later", date(2024, 6, 15)),
            pending_on("due", date(2024, 6, 12)),
            completed,
        ];

        let selected = upcoming_events(&events, 3, today);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "due");
    }

    #[test]
    fn both_window_ends_included() {
        let today = date(2024, 6, 10);
        let events = vec![
            pending_on("end", date(2024, 6, 13)),
            pending_on("start", date(2024, 6, 10)),
        ];

        let selected = upcoming_events(&events, 3, today);
        let ids: Vec<&str> = selected.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["start", "end"]);
    }

    #[test]
    fn generated_schedule_reminder() {
        // week 21 of a batch entered 2024-01-16 falls on 2024-06-11
        let events = generate_schedule("lote-1", date(2024, 1, 16), None, Utc::now());
        let selected = upcoming_events(&events, 3, date(2024, 6, 10));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].week, 21);
        assert_eq!(selected[0].expected_date, date(2024, 6, 11));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Output is pending, inside the window, and sorted by date
        #[test]
        fn prop_selection_filters_and_sorts(
            layout in events_strategy(),
            lookahead in 0u32..10,
        ) {
            let today = date(2024, 6, 10);
            let events: Vec<WeighingEvent> = layout
                .iter()
                .enumerate()
                .map(|(i, &(offset, pending))| {
                    let mut event = pending_on(&format!("e{}", i), today + Duration::days(offset));
                    if !pending {
                        event.status = WeighingStatus::Completed;
                    }
                    event
                })
                .collect();

            let selected = upcoming_events(&events, lookahead, today);
            let end = today + Duration::days(i64::from(lookahead));

            for event in &selected {
                prop_assert!(event.is_pending());
                prop_assert!(event.expected_date >= today && event.expected_date <= end);
            }
            prop_assert!(selected.windows(2).all(|pair| pair[0].expected_date <= pair[1].expected_date));

            let expected_count = events
                .iter()
                .filter(|e| e.is_pending() && e.expected_date >= today && e.expected_date <= end)
                .count();
            prop_assert_eq!(selected.len(), expected_count);
        }

        /// Same input and day always give the same selection
        #[test]
        fn prop_selection_is_deterministic(layout in events_strategy()) {
            let today = date(2024, 6, 10);
            let events: Vec<WeighingEvent> = layout
                .iter()
                .enumerate()
                .map(|(i, &(offset, _))| pending_on(&format!("e{}", i), today + Duration::days(offset)))
                .collect();

            let first = upcoming_events(&events, 3, today);
            let second = upcoming_events(&events, 3, today);
            let ids = |selected: &[&WeighingEvent]| selected.iter().map(|e| e.id.clone()).collect::<Vec<_>>();
            prop_assert_eq!(ids(&first), ids(&second));
        }
    }
}
