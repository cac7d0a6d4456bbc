//! Mood entries: what one classified observation looks like once recorded.

use crate::mood::MoodKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which capture path produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrySource {
    /// Typed journal text.
    Journal,
    /// Transcribed voice note (transcription happens upstream).
    Voice,
    /// Captured photograph of the user's expression.
    Facial,
}

impl EntrySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntrySource::Journal => "journal",
            EntrySource::Voice => "voice",
            EntrySource::Facial => "facial",
        }
    }
}

impl std::fmt::Display for EntrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classification adapter's output triple. Timestamp-free: the caller
/// stamps time and source when it turns a reading into a [`MoodEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodReading {
    pub mood: MoodKind,
    pub emoji: String,
    pub notes: String,
}

impl MoodReading {
    pub fn new(mood: MoodKind, emoji: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            mood,
            emoji: emoji.into(),
            notes: notes.into(),
        }
    }
}

/// One recorded observation of the user's emotional state.
///
/// Immutable once created: there are no mutating accessors, and the owning
/// [`CompanionState`](crate::state::CompanionState) only ever appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub mood: MoodKind,
    pub emoji: String,
    pub recorded_at: DateTime<Utc>,
    pub source: EntrySource,
    pub notes: Option<String>,
}

impl MoodEntry {
    /// Build an entry from a classification reading plus a generation
    /// timestamp. Empty notes collapse to `None`.
    pub fn from_reading(
        reading: MoodReading,
        source: EntrySource,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        let notes = if reading.notes.trim().is_empty() {
            None
        } else {
            Some(reading.notes)
        };
        Self {
            id: Uuid::new_v4(),
            mood: reading.mood,
            emoji: reading.emoji,
            recorded_at,
            source,
            notes,
        }
    }

    /// True iff this entry's mood is one of the distressing three
    /// (Sad, Angry, Anxious). See [`MoodKind::is_distressing`].
    pub fn is_high_distress(&self) -> bool {
        self.mood.is_distressing()
    }
}
