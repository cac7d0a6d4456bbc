//! Time windows for the history views.

use chrono::{DateTime, Duration, NaiveTime, Utc};

/// The three windows the trend and distribution views offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Last 7 days, from today's UTC midnight.
    Week,
    /// Last 30 days, from today's UTC midnight.
    Month,
    /// The full, unfiltered history.
    AllTime,
}

impl TimeWindow {
    /// Lower bound of the window given the current instant, or `None` for
    /// the unbounded all-time view. Anchored at the UTC midnight of `now`'s
    /// date so a day keeps the same window all day.
    pub fn start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            TimeWindow::Week => 7,
            TimeWindow::Month => 30,
            TimeWindow::AllTime => return None,
        };
        let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        Some(midnight - Duration::days(days))
    }

    /// Whether an instant falls inside the window `[start, now]`, both
    /// bounds inclusive. `AllTime` is unfiltered and accepts any instant.
    pub fn contains(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.start(now) {
            Some(start) => at >= start && at <= now,
            None => true,
        }
    }
}
