// All LLM prompt constants for the generation module.

/// System prompt for initial answer drafting — enforces JSON-only output.
pub const DRAFT_SYSTEM: &str = "You are an expert at crafting compelling job application answers. \
    You MUST respond with ONLY a valid JSON object, \
    with no additional text, explanations, or XML tags.";

/// Draft prompt template.
/// Replace: {question_text}, {prior_answer_section}, {analysis_json},
///          {profile_json}, {job_json}, {word_limit}
pub const DRAFT_PROMPT_TEMPLATE: &str = r#"You are an expert at crafting compelling job application answers that highlight a candidate's relevant experience and skills.
Generate a detailed, personalized answer to the application question using the provided information.

QUESTION:
{question_text}

{prior_answer_section}RESUME ANALYSIS INSIGHTS:
{analysis_json}

CANDIDATE PROFILE:
{profile_json}

JOB DETAILS:
{job_json}

INSTRUCTIONS:
1. Focus on matching the candidate's experience with job requirements
2. Use specific, quantifiable achievements from the profile
3. Address the question directly and completely
4. Maintain a professional yet engaging tone
5. Stay within {word_limit} word limit
6. If a prior answer is provided, use it as inspiration while improving upon it

Strictly follow the JSON format below, no additional text:
{
    "answer": "Your complete, polished answer",
    "key_points": [
        "List of 3-5 main points addressed in the answer"
    ],
    "profile_elements_used": [
        "Specific skills, experiences, or achievements referenced"
    ],
    "job_requirements_addressed": [
        "Key job requirements that the answer addresses"
    ],
    "reasoning": [
        "Brief explanations of why certain elements were included"
    ]
}"#;

/// System prompt for answer validation — enforces JSON-only output.
pub const VALIDATION_SYSTEM: &str =
    "You are an expert at reviewing and improving job application answers. \
    You MUST respond with ONLY a valid JSON object, \
    with no additional text, explanations, or XML tags.";

/// Validation prompt template.
/// Replace: {answer_text}, {question_text}, {analysis_json}, {profile_json},
///          {word_limit}
pub const VALIDATION_PROMPT_TEMPLATE: &str = r#"You are an expert reviewer of job application answers. Your task is to validate and improve the provided answer
ensuring it effectively showcases the candidate's qualifications and addresses the job requirements.

INITIAL ANSWER:
{answer_text}

QUESTION:
{question_text}

RESUME ANALYSIS INSIGHTS:
{analysis_json}

CANDIDATE PROFILE:
{profile_json}

EVALUATION CRITERIA:
1. Relevance: Does the answer directly address the question?
2. Completeness: Are all aspects of the question addressed?
3. Evidence: Are specific examples from the profile used effectively?
4. Alignment: Does it address key job requirements?
5. Clarity: Is the answer clear and well-structured?
6. Length: Is it within the {word_limit} word limit?
7. Impact: Does it effectively communicate the candidate's value?

Provide your analysis and improvements in the following JSON format:
{
    "final_answer": "The improved answer text",
    "key_points": [
        "List of main points in the improved answer"
    ],
    "skills_referenced": [
        "Specific skills mentioned and how they're relevant"
    ],
    "experience_referenced": [
        "Work experiences used and their relevance"
    ],
    "achievements_referenced": [
        "Specific achievements highlighted"
    ],
    "improvements_made": [
        "List of specific improvements from the original"
    ],
    "effectiveness_score": 0-100,
    "validation_notes": [
        "Notes on how the answer meets each evaluation criterion"
    ]
}"#;
