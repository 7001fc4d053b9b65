use std::fmt;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Stage-level error taxonomy shared by the scorer, drafter, and validator.
///
/// Callers can match on the variant instead of string-matching messages:
/// upstream failures, unextractable/invalid JSON, and schema violations are
/// distinct failure modes with distinct operator responses.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The text-generation or job-lookup collaborator failed. Not retried
    /// here — retry/backoff policy belongs to the caller.
    #[error("upstream call failed: {0}")]
    UpstreamCall(String),

    /// The collaborator did not respond within the configured deadline.
    #[error("upstream call timed out")]
    UpstreamTimeout,

    /// The response text contained no extractable `{...}` span, or the span
    /// was not valid JSON.
    #[error("response parse error: {0}")]
    ResponseParse(String),

    /// JSON parsed but a required field was missing, wrong-typed, or out of
    /// its declared range. Never silently defaulted.
    #[error("response schema error: {0}")]
    ResponseSchema(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for EngineError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout => EngineError::UpstreamTimeout,
            other => EngineError::UpstreamCall(other.to_string()),
        }
    }
}

/// The pipeline stage that failed. Used only for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Score,
    Draft,
    Validate,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Score => "resume analysis",
            PipelineStage::Draft => "initial answer generation",
            PipelineStage::Validate => "answer validation",
        };
        f.write_str(name)
    }
}

/// Orchestrator-level wrapper surfaced to callers of `generate_answer`.
/// Carries the stage that failed plus the root cause.
#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct AnswerGenerationError {
    pub stage: PipelineStage,
    #[source]
    pub source: EngineError,
}

impl AnswerGenerationError {
    pub fn new(stage: PipelineStage, source: EngineError) -> Self {
        Self { stage, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_names_failed_stage() {
        let err = AnswerGenerationError::new(
            PipelineStage::Draft,
            EngineError::ResponseParse("no JSON object found".to_string()),
        );
        let message = err.to_string();
        assert!(message.contains("initial answer generation failed"));
        assert!(message.contains("no JSON object found"));
    }

    #[test]
    fn test_llm_timeout_maps_to_upstream_timeout() {
        let err: EngineError = LlmError::Timeout.into();
        assert!(matches!(err, EngineError::UpstreamTimeout));
    }

    #[test]
    fn test_llm_empty_content_maps_to_upstream_call() {
        let err: EngineError = LlmError::EmptyContent.into();
        assert!(matches!(err, EngineError::UpstreamCall(_)));
    }
}
