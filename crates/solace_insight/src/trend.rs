//! The chart-ready trend series.

use serde::Serialize;
use solace_core::{MoodEntry, MoodKind};

/// The fixed 0-8 Y-axis position for a mood. A charting artifact only:
/// the scale makes low moods sit low on the line and must not be read as
/// a clinical ordering.
pub fn mood_level(mood: MoodKind) -> u8 {
    match mood {
        MoodKind::Angry => 0,
        MoodKind::Sad => 1,
        MoodKind::Tired => 2,
        MoodKind::Anxious => 3,
        MoodKind::Neutral => 4,
        MoodKind::Content => 5,
        MoodKind::Calm => 6,
        MoodKind::Excited => 7,
        MoodKind::Happy => 8,
    }
}

/// One plotted point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Short `MM/DD` date label for the X axis.
    pub label: String,
    pub level: u8,
    pub mood: MoodKind,
}

/// A trend is only a trend with at least two points; below that the
/// caller renders a placeholder instead of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Trend {
    Insufficient,
    Series(Vec<TrendPoint>),
}

/// One point per entry, in input (chronological) order. Pure.
pub fn trend_series(history: &[MoodEntry]) -> Trend {
    if history.len() < 2 {
        return Trend::Insufficient;
    }
    Trend::Series(
        history
            .iter()
            .map(|entry| TrendPoint {
                label: entry.recorded_at.format("%m/%d").to_string(),
                level: mood_level(entry.mood),
                mood: entry.mood,
            })
            .collect(),
    )
}
