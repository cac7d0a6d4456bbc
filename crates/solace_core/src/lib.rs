//! Domain model for Solace: the mood vocabulary, recorded entries,
//! recommendation bundles and their offline catalog, chat messages, the
//! owned session state, and configuration.
//!
//! Everything here is synchronous and free of I/O; the remote-model
//! pipeline lives in `solace_counsel` and the aggregation views in
//! `solace_insight`.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod entry;
pub mod mood;
pub mod recommend;
pub mod state;

pub use chat::{ChatMessage, Speaker};
pub use config::{ModelConfig, SolaceConfig};
pub use entry::{EntrySource, MoodEntry, MoodReading};
pub use mood::MoodKind;
pub use recommend::{MusicPick, Recommendations, VideoKind, VideoPick};
pub use state::CompanionState;
