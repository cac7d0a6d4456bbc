//! Property-based tests for the aggregation views.
//!
//! Verifies the counting/percentage invariants of `distribution`, the
//! bounds of the trend scale, and that both views are pure functions of
//! their history snapshot.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use solace_core::{EntrySource, MoodEntry, MoodKind, MoodReading};
use solace_insight::{distribution, mood_level, recent_entries, trend_series, TimeWindow, Trend};

// ============================================================================
// Strategies
// ============================================================================

fn arb_mood() -> impl Strategy<Value = MoodKind> {
    prop::sample::select(MoodKind::ALL.to_vec())
}

fn arb_source() -> impl Strategy<Value = EntrySource> {
    prop::sample::select(vec![
        EntrySource::Journal,
        EntrySource::Voice,
        EntrySource::Facial,
    ])
}

/// Entries spread over the 60 days leading up to `now`, in chronological
/// order like a real session history.
fn arb_history() -> impl Strategy<Value = Vec<MoodEntry>> {
    prop::collection::vec((arb_mood(), arb_source(), 0i64..=60 * 24 * 60), 0..40).prop_map(
        |mut raw| {
            raw.sort_by_key(|(_, _, minutes_ago)| std::cmp::Reverse(*minutes_ago));
            raw.into_iter()
                .map(|(mood, source, minutes_ago)| {
                    MoodEntry::from_reading(
                        MoodReading::new(mood, "🙂", "ok"),
                        source,
                        now() - Duration::minutes(minutes_ago),
                    )
                })
                .collect()
        },
    )
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn arb_window() -> impl Strategy<Value = TimeWindow> {
    prop::sample::select(vec![TimeWindow::Week, TimeWindow::Month, TimeWindow::AllTime])
}

// ============================================================================
// Distribution invariants
// ============================================================================

proptest! {
    /// Slice counts sum to the number of in-window entries, every mood
    /// appears at most once, and counts never increase down the list.
    #[test]
    fn distribution_conserves_counts(history in arb_history(), window in arb_window()) {
        let slices = distribution(&history, window, now());

        let in_window = history
            .iter()
            .filter(|e| window.contains(e.recorded_at, now()))
            .count();
        let total: usize = slices.iter().map(|s| s.count).sum();
        prop_assert_eq!(total, in_window);

        for pair in slices.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count, "not sorted by count");
        }

        let mut seen = Vec::new();
        for slice in &slices {
            prop_assert!(!seen.contains(&slice.mood), "duplicate mood slice");
            seen.push(slice.mood);
            prop_assert!(slice.count > 0);
            prop_assert!(slice.percentage <= 100);
        }
    }

    /// Percentages are the nearest-integer share of the in-window total,
    /// so they sum to roughly 100 (rounding drift bounded by slice count).
    #[test]
    fn distribution_percentages_sum_near_100(history in arb_history()) {
        let slices = distribution(&history, TimeWindow::AllTime, now());
        prop_assume!(!slices.is_empty());

        let sum: i64 = slices.iter().map(|s| s.percentage as i64).sum();
        let drift = slices.len() as i64;
        prop_assert!((100 - drift..=100 + drift).contains(&sum),
            "percentages sum {} too far from 100", sum);
    }

    /// Pure: the same snapshot aggregates identically twice.
    #[test]
    fn aggregation_is_idempotent(history in arb_history(), window in arb_window()) {
        prop_assert_eq!(
            distribution(&history, window, now()),
            distribution(&history, window, now())
        );
        prop_assert_eq!(trend_series(&history), trend_series(&history));
    }
}

// ============================================================================
// Trend invariants
// ============================================================================

proptest! {
    /// Every mood maps inside the fixed 0-8 scale.
    #[test]
    fn mood_level_stays_in_scale(mood in arb_mood()) {
        prop_assert!(mood_level(mood) <= 8);
    }

    /// A series has one point per entry, in input order; short histories
    /// are flagged insufficient instead.
    #[test]
    fn trend_matches_history_shape(history in arb_history()) {
        match trend_series(&history) {
            Trend::Insufficient => prop_assert!(history.len() < 2),
            Trend::Series(points) => {
                prop_assert!(history.len() >= 2);
                prop_assert_eq!(points.len(), history.len());
                for (point, entry) in points.iter().zip(&history) {
                    prop_assert_eq!(point.mood, entry.mood);
                    prop_assert_eq!(point.level, mood_level(entry.mood));
                }
            }
        }
    }
}

// ============================================================================
// Recent-entry slicing
// ============================================================================

proptest! {
    /// `recent_entries` returns min(n, len) entries, most recent first.
    #[test]
    fn recent_entries_reverses_the_tail(history in arb_history(), n in 0usize..50) {
        let recent = recent_entries(&history, n);
        prop_assert_eq!(recent.len(), n.min(history.len()));
        for (i, entry) in recent.iter().enumerate() {
            prop_assert_eq!(entry.id, history[history.len() - 1 - i].id);
        }
    }
}
