//! Recommendation bundle types and the video-kind derivation.

use crate::mood::MoodKind;
use serde::{Deserialize, Serialize};

/// The two video flavors the companion suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoKind {
    Meditation,
    Funny,
}

impl VideoKind {
    /// Derive the video flavor from a mood. This is a pure policy function,
    /// deliberately not delegated to the model, so the kind shown in the UI
    /// is predictable: low moods get meditation, everything else gets humor.
    pub fn for_mood(mood: MoodKind) -> Self {
        match mood {
            MoodKind::Sad | MoodKind::Anxious | MoodKind::Angry | MoodKind::Tired => {
                VideoKind::Meditation
            }
            _ => VideoKind::Funny,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoKind::Meditation => "Meditation",
            VideoKind::Funny => "Funny",
        }
    }
}

impl std::fmt::Display for VideoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suggested playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicPick {
    pub title: String,
    pub description: String,
}

impl MusicPick {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A suggested video. The wire field for the kind is `type`, matching the
/// schema the model answers against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPick {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: VideoKind,
}

impl VideoPick {
    pub fn new(title: impl Into<String>, kind: VideoKind) -> Self {
        Self {
            title: title.into(),
            kind,
        }
    }
}

/// One recommendation bundle: ephemeral, recomputed on demand from the
/// latest history snapshot and superseded wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub for_mood: MoodKind,
    /// Three breathing exercises.
    pub breathing: Vec<String>,
    /// Three journaling prompts.
    pub journaling: Vec<String>,
    /// Two playlist suggestions.
    pub music: Vec<MusicPick>,
    /// Two video suggestions.
    pub videos: Vec<VideoPick>,
}
