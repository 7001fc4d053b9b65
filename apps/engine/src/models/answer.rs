use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile elements actually referenced in an answer.
///
/// The draft stage fills only `skills_mentioned`; `experience_highlighted`
/// and `achievements_referenced` stay empty until the validation pass, which
/// is authoritative for attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoredElements {
    pub skills_mentioned: Vec<String>,
    pub experience_highlighted: Vec<String>,
    pub achievements_referenced: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerMetadata {
    pub generation_timestamp: DateTime<Utc>,
    pub question_id: String,
    pub job_id: Option<String>,
}

/// A generated answer with attribution and provenance metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedAnswer {
    pub text: String,
    pub word_count: usize,
    pub key_points_addressed: Vec<String>,
    pub tailored_elements: TailoredElements,
    pub metadata: AnswerMetadata,
}

impl GeneratedAnswer {
    /// Builds an answer, deriving `word_count` from `text`.
    ///
    /// `word_count` is never trusted from an upstream source — it is always
    /// recomputed here so text and count cannot drift apart.
    pub fn new(
        text: String,
        key_points_addressed: Vec<String>,
        tailored_elements: TailoredElements,
        metadata: AnswerMetadata,
    ) -> Self {
        let word_count = count_words(&text);
        Self {
            text,
            word_count,
            key_points_addressed,
            tailored_elements,
            metadata,
        }
    }
}

/// Whitespace-token count used for `word_count` and the word-budget check.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
