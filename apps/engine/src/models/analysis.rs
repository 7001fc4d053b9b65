use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job description text used for scoring. Both fields are required and
/// non-empty; thin job data is synthesized by `jobdata::resolve_job_description`
/// rather than arriving empty here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescription {
    pub job_title: String,
    pub job_description: String,
}

/// Provenance attached to every match result: which job was scored, when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub job_title: String,
    pub job_description: String,
    pub analysis_timestamp: DateTime<Utc>,
}

/// Scored comparison of a candidate profile against a job description.
///
/// Invariant: `match_score` is 0..=100 and the three list fields are always
/// present (possibly empty). The scorer rejects any upstream payload that
/// violates this instead of defaulting or clamping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: u8,
    pub key_matches: Vec<String>,
    pub gaps: Vec<String>,
    pub suggestions: Vec<String>,
    pub metadata: AnalysisMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_result_round_trips_through_json() {
        let result = MatchResult {
            match_score: 72,
            key_matches: vec!["Rust experience".to_string()],
            gaps: vec!["No Kubernetes".to_string()],
            suggestions: vec!["Highlight infra work".to_string()],
            metadata: AnalysisMetadata {
                job_title: "Backend Engineer".to_string(),
                job_description: "Build services.".to_string(),
                analysis_timestamp: Utc::now(),
            },
        };
        let json = serde_json::to_string(&result).unwrap();
        let recovered: MatchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.match_score, 72);
        assert_eq!(recovered.key_matches, result.key_matches);
        assert_eq!(recovered.metadata.job_title, "Backend Engineer");
    }
}
