// LLM prompt constants for the analysis module.

/// System prompt for resume analysis — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str = "You are a resume analysis expert. \
    You MUST respond with ONLY a valid JSON object, \
    with no additional text, explanations, or XML tags.";

/// Resume analysis prompt template.
/// Replace: {profile_json}, {job_json}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert resume analyzer. Analyze this candidate's profile against the job requirements.

CANDIDATE PROFILE:
{profile_json}

JOB DETAILS:
{job_json}

IMPORTANT: Respond ONLY with a JSON object in the following format, with no additional text, thoughts, or explanations:
{
    "match_score": number between 0-100,
    "suggestions": [list of specific, actionable suggestions],
    "key_matches": [list of main areas where candidate matches requirements],
    "gaps": [list of specific gaps between profile and requirements]
}"#;
