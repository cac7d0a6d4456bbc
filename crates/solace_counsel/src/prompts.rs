//! Prompt text for the three structured calls and the companion persona.

use solace_core::{MoodKind, VideoKind};

/// The companion's fixed system instruction. Seeded once per session; the
/// conversation rides on top of it.
pub const COMPANION_PERSONA: &str = "You are Solace, a gentle wellness companion. \
You listen first and never judge. Keep replies concise, warm, and concrete. \
When it fits naturally, suggest a short breathing exercise, a journaling prompt, \
or some calming music. You are not a therapist and do not diagnose; if someone \
describes serious or persistent distress, gently encourage them to reach out to \
a mental health professional or someone they trust.";

pub fn text_classification(text: &str) -> String {
    format!(
        "Read the following journal entry and identify the writer's mood.\n\
         Answer with a single emoji that captures the mood, the mood itself, \
         and one gentle, supportive sentence summarizing the entry.\n\n\
         Entry:\n{text}"
    )
}

pub fn image_classification() -> String {
    "Look at the facial expression in this photo and identify the person's mood. \
     Answer with a single emoji that captures the expression, and the mood itself."
        .to_string()
}

pub fn recommendations(mood: MoodKind, video_kind: VideoKind) -> String {
    format!(
        "Someone is currently feeling {mood}. Suggest supportive content for them:\n\
         - exactly 3 short breathing exercises with simple instructions\n\
         - exactly 3 journaling prompts relevant to feeling {mood}\n\
         - exactly 2 music playlist suggestions, each with a title and a one-line description\n\
         - exactly 2 {video_kind} videos, each with a title and type \"{video_kind}\"\n\
         Keep every suggestion kind and practical."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_prompt_embeds_the_entry() {
        let prompt = text_classification("long week, finally resting");
        assert!(prompt.contains("long week, finally resting"));
    }

    #[test]
    fn test_recommendation_prompt_carries_mood_and_video_kind() {
        let prompt = recommendations(MoodKind::Tired, VideoKind::Meditation);
        assert!(prompt.contains("Tired"));
        assert!(prompt.contains("Meditation"));

        let prompt = recommendations(MoodKind::Happy, VideoKind::Funny);
        assert!(prompt.contains("Funny"));
        assert!(!prompt.contains("Meditation"));
    }
}
