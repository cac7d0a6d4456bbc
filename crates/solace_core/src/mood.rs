//! The mood vocabulary shared by every layer.
//!
//! `MoodKind` is a closed, nine-member enumeration. The external model is
//! asked to answer with exactly one of these names, so the serde
//! representation is the variant name itself ("Happy", "Sad", ...).
//!
//! The numeric chart scale lives in `solace_insight`; nothing here implies
//! a clinical ordering of moods.

use serde::{Deserialize, Serialize};

/// One recorded emotional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodKind {
    Happy,
    Sad,
    Neutral,
    Anxious,
    Calm,
    Excited,
    Tired,
    Angry,
    Content,
}

impl MoodKind {
    /// All nine moods, in declaration order. Used to build the constrained
    /// enum the external model must answer from.
    pub const ALL: [MoodKind; 9] = [
        MoodKind::Happy,
        MoodKind::Sad,
        MoodKind::Neutral,
        MoodKind::Anxious,
        MoodKind::Calm,
        MoodKind::Excited,
        MoodKind::Tired,
        MoodKind::Angry,
        MoodKind::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKind::Happy => "Happy",
            MoodKind::Sad => "Sad",
            MoodKind::Neutral => "Neutral",
            MoodKind::Anxious => "Anxious",
            MoodKind::Calm => "Calm",
            MoodKind::Excited => "Excited",
            MoodKind::Tired => "Tired",
            MoodKind::Angry => "Angry",
            MoodKind::Content => "Content",
        }
    }

    /// True for the moods that raise the session distress latch:
    /// Sad, Angry, Anxious.
    pub fn is_distressing(&self) -> bool {
        matches!(self, MoodKind::Sad | MoodKind::Angry | MoodKind::Anxious)
    }
}

impl std::fmt::Display for MoodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
