//! Answer drafter — first pass of the two-pass pipeline.
//!
//! Produces the initial answer text plus the key points and profile elements
//! it drew on. Attribution of experience and achievements is deliberately NOT
//! done here — the validation pass owns that, against the final text.

use anyhow::anyhow;
use serde::Deserialize;
use tracing::debug;

use crate::errors::EngineError;
use crate::generation::prompts::{DRAFT_PROMPT_TEMPLATE, DRAFT_SYSTEM};
use crate::llm_client::TextGenerator;
use crate::models::analysis::{JobDescription, MatchResult};
use crate::models::answer::GeneratedAnswer;
use crate::models::profile::CandidateProfile;
use crate::models::question::ApplicationQuestion;
use crate::parse::decode_object;

/// Payload returned by the draft LLM call. Only `answer`, `key_points`, and
/// `profile_elements_used` feed the pipeline; the rest is audit trail.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftPayload {
    pub answer: String,
    pub key_points: Vec<String>,
    pub profile_elements_used: Vec<String>,
    #[serde(default)]
    pub job_requirements_addressed: Vec<String>,
    #[serde(default)]
    pub reasoning: Vec<String>,
}

/// Drafts an initial answer to `question`. The prior answer, when supplied,
/// is inspiration for the generator — nothing guarantees its content survives.
pub async fn draft(
    generator: &dyn TextGenerator,
    profile: &CandidateProfile,
    question: &ApplicationQuestion,
    match_result: &MatchResult,
    prior_answer: Option<&GeneratedAnswer>,
) -> Result<DraftPayload, EngineError> {
    let prompt = build_draft_prompt(profile, question, match_result, prior_answer)?;
    let raw = generator.generate_json(DRAFT_SYSTEM, &prompt).await?;
    let payload: DraftPayload = decode_object(&raw)?;

    debug!(
        "Draft audit for question '{}': requirements_addressed={:?} reasoning={:?}",
        question.question_id, payload.job_requirements_addressed, payload.reasoning
    );

    Ok(payload)
}

fn build_draft_prompt(
    profile: &CandidateProfile,
    question: &ApplicationQuestion,
    match_result: &MatchResult,
    prior_answer: Option<&GeneratedAnswer>,
) -> Result<String, EngineError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| EngineError::Internal(anyhow!("Failed to serialize profile: {e}")))?;
    let analysis_json = serde_json::to_string_pretty(match_result)
        .map_err(|e| EngineError::Internal(anyhow!("Failed to serialize analysis: {e}")))?;

    // Job context travels with the match result's provenance metadata.
    let job = JobDescription {
        job_title: match_result.metadata.job_title.clone(),
        job_description: match_result.metadata.job_description.clone(),
    };
    let job_json = serde_json::to_string_pretty(&job)
        .map_err(|e| EngineError::Internal(anyhow!("Failed to serialize job details: {e}")))?;

    let prior_answer_section = match prior_answer {
        Some(answer) => format!(
            "PRIOR ANSWER (use as inspiration, improve upon it):\n{}\n\n",
            answer.text
        ),
        None => String::new(),
    };

    Ok(DRAFT_PROMPT_TEMPLATE
        .replace("{question_text}", &question.question_text)
        .replace("{prior_answer_section}", &prior_answer_section)
        .replace("{analysis_json}", &analysis_json)
        .replace("{profile_json}", &profile_json)
        .replace("{job_json}", &job_json)
        .replace("{word_limit}", &word_limit_text(question)))
}

pub(crate) fn word_limit_text(question: &ApplicationQuestion) -> String {
    match question.max_length {
        Some(limit) => limit.to_string(),
        None => "a reasonable".to_string(),
    }
}
