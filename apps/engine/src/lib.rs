//! Answer-generation engine: scores a candidate profile against a job
//! description and produces tailored application-question answers through a
//! two-pass LLM pipeline (draft, then critique-and-revise).
//!
//! This crate is the intelligence core only. HTTP routing, persistence, OCR,
//! and vector search live in the consuming service; they reach this crate
//! through the `TextGenerator` and `JobDescriptionProvider` traits.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod generation;
pub mod jobdata;
pub mod llm_client;
pub mod models;
pub mod parse;

pub use analysis::scorer::score;
pub use errors::{AnswerGenerationError, EngineError, PipelineStage};
pub use generation::pipeline::{generate_answer, meets_requirements};
pub use jobdata::{resolve_job_description, JobDescriptionProvider, JobQuery};
pub use llm_client::{AnthropicClient, TextGenerator};
pub use models::analysis::{AnalysisMetadata, JobDescription, MatchResult};
pub use models::answer::{AnswerMetadata, GeneratedAnswer, TailoredElements};
pub use models::profile::CandidateProfile;
pub use models::question::ApplicationQuestion;
