//! Answer pipeline — orchestrates the full two-pass generation run.
//!
//! Flow: SCORE_OR_REUSE → DRAFT → VALIDATE. Linear, no branching loops; at
//! most one scoring call per invocation (skipped entirely when the caller
//! supplies a cached match result). Any stage failure aborts the run — no
//! partial results are returned or cached. Runs hold no shared mutable state,
//! so independent runs may execute concurrently without coordination.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::scorer::score;
use crate::errors::{AnswerGenerationError, PipelineStage};
use crate::generation::drafter::{draft, DraftPayload};
use crate::generation::validator::{validate_and_improve, FinalPayload};
use crate::llm_client::TextGenerator;
use crate::models::analysis::{JobDescription, MatchResult};
use crate::models::answer::{count_words, AnswerMetadata, GeneratedAnswer, TailoredElements};
use crate::models::profile::CandidateProfile;
use crate::models::question::ApplicationQuestion;

/// Runs the full answer pipeline and returns the match result alongside the
/// validated answer.
///
/// `cached_match` skips the scoring call entirely — useful when one analysis
/// feeds answers to several questions. `prior_answer` is passed to the draft
/// stage as inspiration only. The intermediate draft is consumed by the
/// validator and discarded; the validator is authoritative for the final text
/// and its attribution.
pub async fn generate_answer(
    generator: &dyn TextGenerator,
    profile: &CandidateProfile,
    question: &ApplicationQuestion,
    job: &JobDescription,
    prior_answer: Option<&GeneratedAnswer>,
    cached_match: Option<MatchResult>,
) -> Result<(MatchResult, GeneratedAnswer), AnswerGenerationError> {
    let run_id = Uuid::new_v4();
    info!(
        "Answer pipeline {run_id}: started for question '{}'",
        question.question_id
    );

    // SCORE_OR_REUSE
    let match_result = match cached_match {
        Some(cached) => {
            info!("Answer pipeline {run_id}: reusing cached match result");
            cached
        }
        None => score(generator, profile, job)
            .await
            .map_err(|e| AnswerGenerationError::new(PipelineStage::Score, e))?,
    };

    // DRAFT
    let draft_payload = draft(generator, profile, question, &match_result, prior_answer)
        .await
        .map_err(|e| AnswerGenerationError::new(PipelineStage::Draft, e))?;
    let draft_answer = draft_to_answer(draft_payload, question);
    info!(
        "Answer pipeline {run_id}: draft complete ({} words)",
        draft_answer.word_count
    );

    // VALIDATE
    let final_payload =
        validate_and_improve(generator, &draft_answer, profile, &match_result, question)
            .await
            .map_err(|e| AnswerGenerationError::new(PipelineStage::Validate, e))?;
    let final_answer = final_to_answer(final_payload, question);
    info!(
        "Answer pipeline {run_id}: validated answer ready ({} words, match_score={})",
        final_answer.word_count, match_result.match_score
    );

    Ok((match_result, final_answer))
}

/// Builds the intermediate answer from the draft payload. Experience and
/// achievement attribution stay empty here — the validation pass fills them
/// against the final text.
fn draft_to_answer(payload: DraftPayload, question: &ApplicationQuestion) -> GeneratedAnswer {
    GeneratedAnswer::new(
        payload.answer,
        payload.key_points,
        TailoredElements {
            skills_mentioned: payload.profile_elements_used,
            experience_highlighted: vec![],
            achievements_referenced: vec![],
        },
        AnswerMetadata {
            generation_timestamp: Utc::now(),
            question_id: question.question_id.clone(),
            job_id: None,
        },
    )
}

fn final_to_answer(payload: FinalPayload, question: &ApplicationQuestion) -> GeneratedAnswer {
    GeneratedAnswer::new(
        payload.final_answer,
        payload.key_points,
        TailoredElements {
            skills_mentioned: payload.skills_referenced,
            experience_highlighted: payload.experience_referenced,
            achievements_referenced: payload.achievements_referenced,
        },
        AnswerMetadata {
            generation_timestamp: Utc::now(),
            question_id: question.question_id.clone(),
            job_id: None,
        },
    )
}

/// Checks an answer against the question's word budget. The budget is
/// advisory during generation — this is the opt-in hard check for callers
/// that want to reject and re-run an overrunning answer.
pub fn meets_requirements(answer_text: &str, question: &ApplicationQuestion) -> bool {
    match question.max_length {
        Some(max_length) => count_words(answer_text) <= max_length,
        None => true,
    }
}
