//! Answer validator/improver — second pass of the two-pass pipeline.
//!
//! Critiques the draft against seven criteria and emits a possibly-revised
//! answer with full attribution (skills, experience, achievements actually
//! referenced in the final text). Parse failure here is fatal: an unvalidated
//! draft may violate length or relevance constraints, so there is no fallback.

use anyhow::anyhow;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::EngineError;
use crate::generation::drafter::word_limit_text;
use crate::generation::prompts::{VALIDATION_PROMPT_TEMPLATE, VALIDATION_SYSTEM};
use crate::llm_client::TextGenerator;
use crate::models::analysis::MatchResult;
use crate::models::answer::GeneratedAnswer;
use crate::models::profile::CandidateProfile;
use crate::models::question::ApplicationQuestion;
use crate::parse::decode_object;

/// Payload returned by the validation LLM call. The attribution lists feed
/// the final answer; `improvements_made`, `effectiveness_score`, and
/// `validation_notes` are audit trail only.
#[derive(Debug, Clone, Deserialize)]
pub struct FinalPayload {
    pub final_answer: String,
    pub key_points: Vec<String>,
    pub skills_referenced: Vec<String>,
    pub experience_referenced: Vec<String>,
    pub achievements_referenced: Vec<String>,
    #[serde(default)]
    pub improvements_made: Vec<String>,
    /// Models return this as a number or a string; kept loose since it is
    /// only logged.
    #[serde(default)]
    pub effectiveness_score: Option<Value>,
    #[serde(default)]
    pub validation_notes: Vec<String>,
}

/// Reruns the draft through a critique-and-revise pass.
pub async fn validate_and_improve(
    generator: &dyn TextGenerator,
    draft: &GeneratedAnswer,
    profile: &CandidateProfile,
    match_result: &MatchResult,
    question: &ApplicationQuestion,
) -> Result<FinalPayload, EngineError> {
    let prompt = build_validation_prompt(draft, profile, match_result, question)?;
    let raw = generator.generate_json(VALIDATION_SYSTEM, &prompt).await?;
    let payload: FinalPayload = decode_object(&raw)?;

    debug!(
        "Validation audit for question '{}': effectiveness_score={:?} improvements={:?}",
        question.question_id, payload.effectiveness_score, payload.improvements_made
    );

    Ok(payload)
}

fn build_validation_prompt(
    draft: &GeneratedAnswer,
    profile: &CandidateProfile,
    match_result: &MatchResult,
    question: &ApplicationQuestion,
) -> Result<String, EngineError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| EngineError::Internal(anyhow!("Failed to serialize profile: {e}")))?;
    let analysis_json = serde_json::to_string_pretty(match_result)
        .map_err(|e| EngineError::Internal(anyhow!("Failed to serialize analysis: {e}")))?;

    Ok(VALIDATION_PROMPT_TEMPLATE
        .replace("{answer_text}", &draft.text)
        .replace("{question_text}", &question.question_text)
        .replace("{analysis_json}", &analysis_json)
        .replace("{profile_json}", &profile_json)
        .replace("{word_limit}", &word_limit_text(question)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::AnalysisMetadata;
    use crate::models::answer::{AnswerMetadata, TailoredElements};
    use crate::models::profile::{PersonalInfo, Skills};
    use chrono::Utc;

    fn profile() -> CandidateProfile {
        CandidateProfile {
            personal_info: PersonalInfo {
                full_name: "Ada Park".to_string(),
                email: "ada@example.com".to_string(),
                location: "Berlin".to_string(),
                professional_summary: "Backend engineer.".to_string(),
            },
            work_history: vec![],
            education: vec![],
            skills: Skills {
                technical: vec![],
                soft: vec![],
                certifications: vec![],
            },
            projects: vec![],
        }
    }

    fn draft_answer(text: &str) -> GeneratedAnswer {
        GeneratedAnswer::new(
            text.to_string(),
            vec![],
            TailoredElements {
                skills_mentioned: vec![],
                experience_highlighted: vec![],
                achievements_referenced: vec![],
            },
            AnswerMetadata {
                generation_timestamp: Utc::now(),
                question_id: "q-1".to_string(),
                job_id: None,
            },
        )
    }

    fn match_result() -> MatchResult {
        MatchResult {
            match_score: 60,
            key_matches: vec![],
            gaps: vec![],
            suggestions: vec![],
            metadata: AnalysisMetadata {
                job_title: "Backend Engineer".to_string(),
                job_description: "Build Rust services.".to_string(),
                analysis_timestamp: Utc::now(),
            },
        }
    }

    fn question() -> ApplicationQuestion {
        ApplicationQuestion {
            question_id: "q-1".to_string(),
            question_text: "Describe a hard problem you solved.".to_string(),
            question_type: "behavioral".to_string(),
            max_length: Some(200),
            context: None,
        }
    }

    #[test]
    fn test_validation_prompt_embeds_draft_and_criteria() {
        let prompt = build_validation_prompt(
            &draft_answer("My draft answer."),
            &profile(),
            &match_result(),
            &question(),
        )
        .unwrap();
        assert!(prompt.contains("My draft answer."));
        assert!(prompt.contains("Describe a hard problem you solved."));
        assert!(prompt.contains("within the 200 word limit"));
        // all seven critique criteria present
        for criterion in [
            "Relevance", "Completeness", "Evidence", "Alignment", "Clarity", "Length", "Impact",
        ] {
            assert!(prompt.contains(criterion), "missing criterion {criterion}");
        }
    }

    #[test]
    fn test_final_payload_accepts_numeric_or_string_effectiveness_score() {
        let numeric = r#"{
            "final_answer": "B",
            "key_points": [],
            "skills_referenced": [],
            "experience_referenced": [],
            "achievements_referenced": [],
            "effectiveness_score": 85
        }"#;
        let as_string = numeric.replace("85", "\"85\"");

        let payload: FinalPayload = serde_json::from_str(numeric).unwrap();
        assert_eq!(payload.effectiveness_score, Some(Value::from(85)));
        let payload: FinalPayload = serde_json::from_str(&as_string).unwrap();
        assert_eq!(payload.effectiveness_score, Some(Value::from("85")));
    }

    #[test]
    fn test_final_payload_requires_attribution_lists() {
        let json = r#"{"final_answer": "B", "key_points": []}"#;
        let result: Result<FinalPayload, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
