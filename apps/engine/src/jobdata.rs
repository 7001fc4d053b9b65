//! Job-description lookup boundary.
//!
//! The actual lookup (scraping, cached postings, vector search) lives in the
//! consuming service behind `JobDescriptionProvider`. Lookup failure never
//! aborts a pipeline run — scoring degrades to a synthesized minimal
//! description instead.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::analysis::JobDescription;

/// Fallback title when the caller supplied no usable search parameters.
const DEFAULT_JOB_TITLE: &str = "Software Engineer";

#[derive(Debug, Error)]
pub enum JobLookupError {
    #[error("job lookup failed: {0}")]
    Lookup(String),

    #[error("job lookup timed out")]
    Timeout,
}

/// Search parameters for a job lookup: either a direct URL, or a
/// title + location pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobQuery {
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("either url or both job_title and location must be provided")]
pub struct InvalidJobQuery;

impl JobQuery {
    pub fn validate(&self) -> Result<(), InvalidJobQuery> {
        let has_title_and_location = self.job_title.is_some() && self.location.is_some();
        if self.url.is_some() || has_title_and_location {
            Ok(())
        } else {
            Err(InvalidJobQuery)
        }
    }
}

/// Best-effort job-data lookup collaborator.
#[async_trait]
pub trait JobDescriptionProvider: Send + Sync {
    async fn fetch_job_description(&self, query: &JobQuery)
        -> Result<JobDescription, JobLookupError>;
}

/// Resolves a job description for scoring, degrading gracefully when the
/// provider fails: a minimal description is synthesized from the query so the
/// pipeline can still run on thin job data.
pub async fn resolve_job_description(
    provider: &dyn JobDescriptionProvider,
    query: &JobQuery,
) -> JobDescription {
    match provider.fetch_job_description(query).await {
        Ok(job) => job,
        Err(err) => {
            warn!("Job lookup failed, synthesizing minimal description: {err}");
            synthesize_job_description(query)
        }
    }
}

fn synthesize_job_description(query: &JobQuery) -> JobDescription {
    match (&query.job_title, &query.location) {
        (Some(title), Some(location)) => JobDescription {
            job_title: title.clone(),
            job_description: format!(
                "Position for {title} in {location}. Full job details could not be retrieved."
            ),
        },
        _ => JobDescription {
            job_title: DEFAULT_JOB_TITLE.to_string(),
            job_description:
                "Generic software engineering position. Full job details could not be retrieved."
                    .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;

    #[async_trait]
    impl JobDescriptionProvider for FailingProvider {
        async fn fetch_job_description(
            &self,
            _query: &JobQuery,
        ) -> Result<JobDescription, JobLookupError> {
            Err(JobLookupError::Lookup("scraper returned 403".to_string()))
        }
    }

    struct FixedProvider(JobDescription);

    #[async_trait]
    impl JobDescriptionProvider for FixedProvider {
        async fn fetch_job_description(
            &self,
            _query: &JobQuery,
        ) -> Result<JobDescription, JobLookupError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_successful_lookup_passes_through() {
        let provider = FixedProvider(JobDescription {
            job_title: "Platform Engineer".to_string(),
            job_description: "Own the deploy pipeline.".to_string(),
        });
        let job = resolve_job_description(&provider, &JobQuery::default()).await;
        assert_eq!(job.job_title, "Platform Engineer");
        assert_eq!(job.job_description, "Own the deploy pipeline.");
    }

    #[tokio::test]
    async fn test_failed_lookup_synthesizes_from_title_and_location() {
        let query = JobQuery {
            job_title: Some("Data Engineer".to_string()),
            location: Some("Austin".to_string()),
            url: None,
        };
        let job = resolve_job_description(&FailingProvider, &query).await;
        assert_eq!(job.job_title, "Data Engineer");
        assert_eq!(
            job.job_description,
            "Position for Data Engineer in Austin. Full job details could not be retrieved."
        );
    }

    #[tokio::test]
    async fn test_failed_lookup_without_params_uses_generic_description() {
        let job = resolve_job_description(&FailingProvider, &JobQuery::default()).await;
        assert_eq!(job.job_title, "Software Engineer");
        assert!(job.job_description.starts_with("Generic software engineering position"));
    }

    #[test]
    fn test_query_with_url_is_valid() {
        let query = JobQuery {
            url: Some("https://example.com/jobs/1".to_string()),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_query_with_title_and_location_is_valid() {
        let query = JobQuery {
            job_title: Some("SRE".to_string()),
            location: Some("Remote".to_string()),
            url: None,
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_query_with_title_only_is_invalid() {
        let query = JobQuery {
            job_title: Some("SRE".to_string()),
            ..Default::default()
        };
        assert_eq!(query.validate(), Err(InvalidJobQuery));
    }

    #[test]
    fn test_empty_query_is_invalid() {
        assert_eq!(JobQuery::default().validate(), Err(InvalidJobQuery));
    }
}
