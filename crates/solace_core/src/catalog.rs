//! The offline recommendation catalog.
//!
//! When the model is unreachable, or when there is no history to personalize
//! from, the companion must still have something kind to say. This module
//! holds that copy: one generic bundle, plus mood-specific overrides of the
//! journaling/music/video sections for the moods that most need a tailored
//! voice. Breathing exercises are mood-agnostic and are never overridden.

use crate::mood::MoodKind;
use crate::recommend::{MusicPick, Recommendations, VideoKind, VideoPick};

/// The generic bundle, tagged `Neutral`. Returned as-is for an empty
/// history, and used as the base layer of every mood-specific fallback.
pub fn default_bundle() -> Recommendations {
    Recommendations {
        for_mood: MoodKind::Neutral,
        breathing: vec![
            "Box breathing: inhale for 4, hold for 4, exhale for 4, hold for 4. Repeat ten times."
                .to_string(),
            "4-7-8 breathing: inhale for 4 counts, hold for 7, exhale slowly for 8.".to_string(),
            "Take five slow belly breaths, letting each exhale last a little longer than the inhale."
                .to_string(),
        ],
        journaling: vec![
            "What is one thing you are grateful for right now?".to_string(),
            "Describe how your body feels at this moment, without judging it.".to_string(),
            "What would you tell a close friend who felt the way you do today?".to_string(),
        ],
        music: vec![
            MusicPick::new(
                "Gentle Piano Moods",
                "Soft solo piano for settling the mind.",
            ),
            MusicPick::new(
                "Lo-fi Afternoons",
                "Unhurried beats that sit quietly in the background.",
            ),
        ],
        videos: vec![
            VideoPick::new("Five-Minute Breathing Space", VideoKind::Meditation),
            VideoPick::new("Animals Being Wholesome", VideoKind::Funny),
        ],
    }
}

/// The two-tier fallback: the generic bundle stamped with `mood`, then the
/// journaling/music/video sections replaced for Sad, Anxious, Angry, and
/// Happy/Excited (which share one entry). Neutral, Calm, Tired and Content
/// keep the fully generic content.
pub fn fallback_bundle(mood: MoodKind) -> Recommendations {
    let mut bundle = default_bundle();
    bundle.for_mood = mood;

    match mood {
        MoodKind::Sad => {
            bundle.journaling = vec![
                "Write about a moment recently when things felt a little lighter.".to_string(),
                "What is one small kindness you could offer yourself today?".to_string(),
                "Name the feeling underneath the sadness. Where do you notice it in your body?"
                    .to_string(),
            ];
            bundle.music = vec![
                MusicPick::new(
                    "Rainy Day Comfort",
                    "Warm, slow songs that let sadness sit without pushing it away.",
                ),
                MusicPick::new(
                    "Soft Strings for Heavy Hearts",
                    "Orchestral pieces that hold the feeling gently.",
                ),
            ];
            bundle.videos = vec![
                VideoPick::new("Guided Meditation for Difficult Days", VideoKind::Meditation),
                VideoPick::new("Loving-Kindness in Ten Minutes", VideoKind::Meditation),
            ];
        }
        MoodKind::Anxious => {
            bundle.journaling = vec![
                "List the worries you can set down for the next hour.".to_string(),
                "What is in your control right now, and what can wait until tomorrow?".to_string(),
                "Write down three things around you that you can see, hear, and touch.".to_string(),
            ];
            bundle.music = vec![
                MusicPick::new("Slow Waves", "Ocean-paced ambient sound to slow racing thoughts."),
                MusicPick::new(
                    "Calm Focus",
                    "Steady, minimal music to bring your attention home.",
                ),
            ];
            bundle.videos = vec![
                VideoPick::new("Body Scan for Anxiety", VideoKind::Meditation),
                VideoPick::new("Grounding Breath Practice", VideoKind::Meditation),
            ];
        }
        MoodKind::Angry => {
            bundle.journaling = vec![
                "What exactly crossed the line? Write it out without editing yourself.".to_string(),
                "What is this anger trying to protect?".to_string(),
                "Once the heat passes, what outcome would you actually like?".to_string(),
            ];
            bundle.music = vec![
                MusicPick::new(
                    "Cooldown",
                    "Tracks that start strong and gradually loosen their grip.",
                ),
                MusicPick::new("Open Road", "Long, steady songs with room to breathe."),
            ];
            bundle.videos = vec![
                VideoPick::new("Releasing Tension Meditation", VideoKind::Meditation),
                VideoPick::new("Unclench: a Five-Minute Reset", VideoKind::Meditation),
            ];
        }
        MoodKind::Happy | MoodKind::Excited => {
            bundle.journaling = vec![
                "Capture this moment: what made it good, in detail?".to_string(),
                "Who would you like to share this feeling with?".to_string(),
                "What did you do to help this mood happen, and could you do it again?".to_string(),
            ];
            bundle.music = vec![
                MusicPick::new(
                    "Sunshine Playlist",
                    "Bright, upbeat songs to keep the energy going.",
                ),
                MusicPick::new(
                    "Feel-Good Classics",
                    "Songs that are impossible not to sing along with.",
                ),
            ];
            bundle.videos = vec![
                VideoPick::new("Best Bloopers Compilation", VideoKind::Funny),
                VideoPick::new("Comedians on Good Days", VideoKind::Funny),
            ];
        }
        MoodKind::Neutral | MoodKind::Calm | MoodKind::Tired | MoodKind::Content => {}
    }

    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bundle_shape() {
        let bundle = default_bundle();
        assert_eq!(bundle.for_mood, MoodKind::Neutral);
        assert_eq!(bundle.breathing.len(), 3);
        assert_eq!(bundle.journaling.len(), 3);
        assert_eq!(bundle.music.len(), 2);
        assert_eq!(bundle.videos.len(), 2);
    }

    #[test]
    fn test_breathing_is_never_overridden() {
        let generic = default_bundle();
        for mood in MoodKind::ALL {
            let bundle = fallback_bundle(mood);
            assert_eq!(bundle.breathing, generic.breathing, "breathing changed for {mood}");
        }
    }

    #[test]
    fn test_fallback_stamps_the_mood() {
        for mood in MoodKind::ALL {
            assert_eq!(fallback_bundle(mood).for_mood, mood);
        }
    }

    #[test]
    fn test_overridden_moods_differ_from_generic() {
        let generic = default_bundle();
        for mood in [
            MoodKind::Sad,
            MoodKind::Anxious,
            MoodKind::Angry,
            MoodKind::Happy,
            MoodKind::Excited,
        ] {
            let bundle = fallback_bundle(mood);
            assert_ne!(bundle.journaling, generic.journaling, "{mood} kept generic journaling");
            assert_ne!(bundle.music, generic.music, "{mood} kept generic music");
            assert_ne!(bundle.videos, generic.videos, "{mood} kept generic videos");
            assert_eq!(bundle.journaling.len(), 3);
            assert_eq!(bundle.music.len(), 2);
            assert_eq!(bundle.videos.len(), 2);
        }
    }

    #[test]
    fn test_unoverridden_moods_keep_generic_content() {
        let generic = default_bundle();
        for mood in [MoodKind::Neutral, MoodKind::Calm, MoodKind::Tired, MoodKind::Content] {
            let bundle = fallback_bundle(mood);
            assert_eq!(bundle.journaling, generic.journaling);
            assert_eq!(bundle.music, generic.music);
            assert_eq!(bundle.videos, generic.videos);
        }
    }

    #[test]
    fn test_happy_and_excited_share_one_entry() {
        let happy = fallback_bundle(MoodKind::Happy);
        let excited = fallback_bundle(MoodKind::Excited);
        assert_eq!(happy.journaling, excited.journaling);
        assert_eq!(happy.music, excited.music);
        assert_eq!(happy.videos, excited.videos);
    }

    #[test]
    fn test_low_mood_fallback_videos_are_meditation() {
        for mood in [MoodKind::Sad, MoodKind::Anxious, MoodKind::Angry] {
            for video in fallback_bundle(mood).videos {
                assert_eq!(video.kind, VideoKind::Meditation);
            }
        }
    }
}
