//! Match scorer — scores a candidate profile against a job description via a
//! single constrained LLM call.
//!
//! The response contract is strict: all four payload fields must be present,
//! correctly typed, and `match_score` must already be in 0..=100. Violations
//! are rejected with a `ResponseSchema` error naming the offending field —
//! never defaulted, never clamped.

use anyhow::anyhow;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::errors::EngineError;
use crate::llm_client::TextGenerator;
use crate::models::analysis::{AnalysisMetadata, JobDescription, MatchResult};
use crate::models::profile::CandidateProfile;
use crate::parse::extract_json_object;

const REQUIRED_FIELDS: [&str; 4] = ["match_score", "suggestions", "key_matches", "gaps"];

/// Scores `profile` against `job`. Exactly one generation call per invocation;
/// the result carries the job text and a timestamp as provenance.
pub async fn score(
    generator: &dyn TextGenerator,
    profile: &CandidateProfile,
    job: &JobDescription,
) -> Result<MatchResult, EngineError> {
    let prompt = build_analysis_prompt(profile, job)?;
    debug!("Scoring profile against job '{}'", job.job_title);

    let raw = generator.generate_json(ANALYSIS_SYSTEM, &prompt).await?;
    let payload = parse_analysis_response(&raw)?;

    info!(
        "Resume analysis complete: match_score={} key_matches={} gaps={}",
        payload.match_score,
        payload.key_matches.len(),
        payload.gaps.len()
    );

    Ok(MatchResult {
        match_score: payload.match_score,
        key_matches: payload.key_matches,
        gaps: payload.gaps,
        suggestions: payload.suggestions,
        metadata: AnalysisMetadata {
            job_title: job.job_title.clone(),
            job_description: job.job_description.clone(),
            analysis_timestamp: Utc::now(),
        },
    })
}

struct AnalysisPayload {
    match_score: u8,
    suggestions: Vec<String>,
    key_matches: Vec<String>,
    gaps: Vec<String>,
}

fn build_analysis_prompt(
    profile: &CandidateProfile,
    job: &JobDescription,
) -> Result<String, EngineError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| EngineError::Internal(anyhow!("Failed to serialize profile: {e}")))?;
    let job_json = serde_json::to_string_pretty(job)
        .map_err(|e| EngineError::Internal(anyhow!("Failed to serialize job details: {e}")))?;

    Ok(ANALYSIS_PROMPT_TEMPLATE
        .replace("{profile_json}", &profile_json)
        .replace("{job_json}", &job_json))
}

/// Extracts and validates the analysis payload from raw generator output.
fn parse_analysis_response(raw: &str) -> Result<AnalysisPayload, EngineError> {
    let span =
        extract_json_object(raw).map_err(|e| EngineError::ResponseParse(e.to_string()))?;
    let value: Value = serde_json::from_str(span)
        .map_err(|e| EngineError::ResponseParse(format!("invalid JSON in response: {e}")))?;

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .filter(|field| value.get(**field).is_none())
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(EngineError::ResponseSchema(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    let score = value["match_score"]
        .as_f64()
        .ok_or_else(|| EngineError::ResponseSchema("match_score must be a number".to_string()))?;
    if !(0.0..=100.0).contains(&score) {
        return Err(EngineError::ResponseSchema(format!(
            "match_score must be between 0 and 100, got {score}"
        )));
    }

    Ok(AnalysisPayload {
        match_score: score.round() as u8,
        suggestions: string_list(&value, "suggestions")?,
        key_matches: string_list(&value, "key_matches")?,
        gaps: string_list(&value, "gaps")?,
    })
}

fn string_list(value: &Value, field: &str) -> Result<Vec<String>, EngineError> {
    let items = value[field]
        .as_array()
        .ok_or_else(|| EngineError::ResponseSchema(format!("{field} must be a list")))?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                EngineError::ResponseSchema(format!("{field} must contain only strings"))
            })
        })
        .collect()
}
