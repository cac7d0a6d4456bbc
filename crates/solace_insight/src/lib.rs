//! Pure aggregation over the mood history.
//!
//! Nothing here calls out or holds state: every function is a synchronous
//! view over a history slice, with `now` supplied by the caller so tests
//! stay deterministic.

pub mod distribution;
pub mod trend;
pub mod window;

pub use distribution::{distribution, MoodSlice};
pub use trend::{mood_level, trend_series, Trend, TrendPoint};
pub use window::TimeWindow;

use solace_core::MoodEntry;

/// The last `n` entries, most recent first, for display lists.
pub fn recent_entries(history: &[MoodEntry], n: usize) -> Vec<MoodEntry> {
    history.iter().rev().take(n).cloned().collect()
}
