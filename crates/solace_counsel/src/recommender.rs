//! Personalized recommendations keyed on the most recent mood.
//!
//! `fetch_recommendations` is the explicit-result layer; `recommend` is the
//! total wrapper with the two-tier fallback: an empty history gets the
//! generic bundle with no remote call, and a failed call gets the offline
//! catalog content for the latest mood.

use crate::model::{GenerativeModel, ModelError, StructuredRequest};
use crate::prompts;
use crate::schema::ResponseSchema;
use serde::Deserialize;
use serde_json::json;
use solace_core::{catalog, MoodEntry, MoodKind, MusicPick, Recommendations, VideoKind, VideoPick};

const RECOMMENDATION_TEMPERATURE: f32 = 0.8;

/// The model's answer, before the caller stamps `for_mood`. The model is
/// never trusted to echo the mood back.
#[derive(Debug, Deserialize)]
struct RecommendationPayload {
    breathing: Vec<String>,
    journaling: Vec<String>,
    music: Vec<MusicPick>,
    videos: Vec<VideoPick>,
}

fn recommendation_schema() -> ResponseSchema {
    ResponseSchema::object(
        json!({
            "breathing": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Three short breathing exercises"
            },
            "journaling": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Three mood-relevant journaling prompts"
            },
            "music": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": {"type": "string"},
                        "description": {"type": "string"}
                    },
                    "required": ["title", "description"]
                },
                "description": "Two playlist suggestions"
            },
            "videos": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": {"type": "string"},
                        "type": {"type": "string", "enum": ["Meditation", "Funny"]}
                    },
                    "required": ["title", "type"]
                },
                "description": "Two video suggestions"
            }
        }),
        &["breathing", "journaling", "music", "videos"],
    )
}

/// One remote call for a bundle personalized to `latest_mood`. The video
/// kind is derived here, not left to the model's judgement.
pub async fn fetch_recommendations(
    model: &dyn GenerativeModel,
    latest_mood: MoodKind,
) -> Result<Recommendations, ModelError> {
    let video_kind = VideoKind::for_mood(latest_mood);
    let request = StructuredRequest::new(
        prompts::recommendations(latest_mood, video_kind),
        recommendation_schema(),
    )
    .with_temperature(RECOMMENDATION_TEMPERATURE);

    let value = model.generate_structured(request).await?;
    let payload: RecommendationPayload =
        serde_json::from_value(value).map_err(|e| ModelError::SchemaViolation(e.to_string()))?;

    if payload.breathing.len() != 3
        || payload.journaling.len() != 3
        || payload.music.len() != 2
        || payload.videos.len() != 2
    {
        return Err(ModelError::SchemaViolation(format!(
            "expected 3/3/2/2 items, got {}/{}/{}/{}",
            payload.breathing.len(),
            payload.journaling.len(),
            payload.music.len(),
            payload.videos.len()
        )));
    }

    Ok(Recommendations {
        for_mood: latest_mood,
        breathing: payload.breathing,
        journaling: payload.journaling,
        music: payload.music,
        videos: payload.videos,
    })
}

/// Total recommendation fetch over a history snapshot.
pub async fn recommend(model: &dyn GenerativeModel, history: &[MoodEntry]) -> Recommendations {
    let Some(latest) = history.last() else {
        // Nothing to personalize from; no remote call.
        return catalog::default_bundle();
    };

    match fetch_recommendations(model, latest.mood).await {
        Ok(bundle) => bundle,
        Err(e) => {
            tracing::warn!(mood = %latest.mood, "recommendation fetch failed, using catalog: {e}");
            catalog::fallback_bundle(latest.mood)
        }
    }
}
