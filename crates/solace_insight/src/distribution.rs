//! Mood frequency distribution over a windowed slice of history.

use crate::window::TimeWindow;
use chrono::{DateTime, Utc};
use serde::Serialize;
use solace_core::{MoodEntry, MoodKind};

/// One row of the distribution view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodSlice {
    pub mood: MoodKind,
    pub count: usize,
    /// `round(100 * count / total)`, nearest integer.
    pub percentage: u32,
    /// The emoji of this mood's first occurrence in the full, unfiltered
    /// history, so a mood keeps a stable face across windows.
    pub emoji: String,
}

/// Group the entries inside `window` by mood and count them, sorted
/// descending by count. Equal counts keep first-seen order (the order in
/// which each mood first appears inside the window); the sort is stable,
/// so the tie-break is deterministic.
///
/// Pure: same history snapshot and `now`, same output.
pub fn distribution(
    history: &[MoodEntry],
    window: TimeWindow,
    now: DateTime<Utc>,
) -> Vec<MoodSlice> {
    let mut order: Vec<MoodKind> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();

    for entry in history {
        if !window.contains(entry.recorded_at, now) {
            continue;
        }
        match order.iter().position(|m| *m == entry.mood) {
            Some(i) => counts[i] += 1,
            None => {
                order.push(entry.mood);
                counts.push(1);
            }
        }
    }

    let total: usize = counts.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let emoji_for = |mood: MoodKind| {
        history
            .iter()
            .find(|entry| entry.mood == mood)
            .map(|entry| entry.emoji.clone())
            .unwrap_or_default()
    };

    let mut slices: Vec<MoodSlice> = order
        .into_iter()
        .zip(counts)
        .map(|(mood, count)| MoodSlice {
            mood,
            count,
            percentage: (100.0 * count as f64 / total as f64).round() as u32,
            emoji: emoji_for(mood),
        })
        .collect();

    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}
