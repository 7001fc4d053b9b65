// Resume analysis: profile-vs-JD match scoring.
// All LLM calls go through the TextGenerator trait — no direct API calls here.

pub mod prompts;
pub mod scorer;
