// Two-pass answer generation: draft, then critique-and-revise, orchestrated
// by the pipeline. All LLM calls go through the TextGenerator trait.

pub mod drafter;
pub mod pipeline;
pub mod prompts;
pub mod validator;
