//! The session state owned by the application.
//!
//! `CompanionState` replaces any ambient/global container: whichever layer
//! needs to read or append mood/chat history receives a reference to this
//! object. Invariants:
//! - `mood_history` is append-only and chronological for the session;
//!   entries are never removed or rewritten.
//! - `chat_log` is append-only; messages are never edited in place.
//! - `distress_alert` is a one-way latch: raised when a distressing entry
//!   is recorded, cleared only by an explicit dismissal.

use crate::chat::ChatMessage;
use crate::entry::{EntrySource, MoodEntry, MoodReading};
use crate::mood::MoodKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CompanionState {
    mood_history: Vec<MoodEntry>,
    chat_log: Vec<ChatMessage>,
    distress_alert: bool,
}

impl CompanionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full mood history, oldest first.
    pub fn mood_history(&self) -> &[MoodEntry] {
        &self.mood_history
    }

    /// The full conversation log, oldest first.
    pub fn chat_log(&self) -> &[ChatMessage] {
        &self.chat_log
    }

    /// Mood of the most recent entry, if any.
    pub fn latest_mood(&self) -> Option<MoodKind> {
        self.mood_history.last().map(|entry| entry.mood)
    }

    /// Whether the session distress latch is currently raised.
    pub fn distress_alert(&self) -> bool {
        self.distress_alert
    }

    /// Append a mood entry. Raises the distress latch if the entry's mood
    /// is one of the distressing three; the latch stays raised across any
    /// later entries until [`dismiss_distress_alert`](Self::dismiss_distress_alert).
    pub fn record_mood(&mut self, entry: MoodEntry) {
        if entry.is_high_distress() && !self.distress_alert {
            tracing::info!(mood = %entry.mood, "distress latch raised");
            self.distress_alert = true;
        }
        self.mood_history.push(entry);
    }

    /// Convenience: stamp a classification reading with a source and
    /// timestamp, append it, and return a reference to the new entry.
    pub fn record_reading(
        &mut self,
        reading: MoodReading,
        source: EntrySource,
        recorded_at: DateTime<Utc>,
    ) -> &MoodEntry {
        self.record_mood(MoodEntry::from_reading(reading, source, recorded_at));
        // Just pushed, so the history is non-empty.
        &self.mood_history[self.mood_history.len() - 1]
    }

    /// Append a chat message to the conversation log.
    pub fn record_chat(&mut self, message: ChatMessage) {
        self.chat_log.push(message);
    }

    /// The user's explicit acknowledgement of the distress banner.
    pub fn dismiss_distress_alert(&mut self) {
        if self.distress_alert {
            tracing::info!("distress latch dismissed");
        }
        self.distress_alert = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(mood: MoodKind, hour: u32) -> MoodEntry {
        MoodEntry::from_reading(
            MoodReading::new(mood, "🙂", "ok"),
            EntrySource::Journal,
            Utc.with_ymd_and_hms(2024, 3, 10, hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_history_is_append_only_in_order() {
        let mut state = CompanionState::new();
        state.record_mood(entry(MoodKind::Calm, 8));
        state.record_mood(entry(MoodKind::Happy, 12));
        state.record_mood(entry(MoodKind::Tired, 22));

        let moods: Vec<_> = state.mood_history().iter().map(|e| e.mood).collect();
        assert_eq!(moods, vec![MoodKind::Calm, MoodKind::Happy, MoodKind::Tired]);
        assert_eq!(state.latest_mood(), Some(MoodKind::Tired));
    }

    #[test]
    fn test_distress_latch_is_sticky() {
        let mut state = CompanionState::new();
        assert!(!state.distress_alert());

        state.record_mood(entry(MoodKind::Sad, 9));
        assert!(state.distress_alert());

        // Non-distressing entries do not clear the latch.
        state.record_mood(entry(MoodKind::Happy, 10));
        state.record_mood(entry(MoodKind::Calm, 11));
        assert!(state.distress_alert());

        state.dismiss_distress_alert();
        assert!(!state.distress_alert());

        // A new distressing entry raises it again.
        state.record_mood(entry(MoodKind::Anxious, 12));
        assert!(state.distress_alert());
    }

    #[test]
    fn test_non_distressing_entries_never_raise_the_latch() {
        let mut state = CompanionState::new();
        for mood in [
            MoodKind::Happy,
            MoodKind::Neutral,
            MoodKind::Calm,
            MoodKind::Excited,
            MoodKind::Tired,
            MoodKind::Content,
        ] {
            state.record_mood(entry(mood, 12));
        }
        assert!(!state.distress_alert());
    }

    #[test]
    fn test_record_reading_stamps_source_and_time() {
        let mut state = CompanionState::new();
        let at = Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap();
        let recorded = state.record_reading(
            MoodReading::new(MoodKind::Excited, "🤩", "big day"),
            EntrySource::Voice,
            at,
        );
        assert_eq!(recorded.source, EntrySource::Voice);
        assert_eq!(recorded.recorded_at, at);
        assert_eq!(state.mood_history().len(), 1);
    }

    #[test]
    fn test_chat_log_keeps_order() {
        let mut state = CompanionState::new();
        state.record_chat(ChatMessage::user("rough day"));
        state.record_chat(ChatMessage::assistant("I'm here. Want to talk about it?"));
        assert_eq!(state.chat_log().len(), 2);
        assert_eq!(state.chat_log()[0].speaker, crate::chat::Speaker::User);
        assert_eq!(state.chat_log()[1].speaker, crate::chat::Speaker::Assistant);
    }
}
