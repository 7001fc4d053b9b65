//! Structured candidate profile — the normalized résumé representation.
//!
//! Produced upstream by the OCR + extraction service; this crate treats it as
//! an immutable input. The dict→model coercion happens once, at the crate
//! boundary, via serde — stages only ever see these types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub professional_summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub graduation_date: String,
    pub gpa: Option<f32>,
    pub relevant_coursework: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub expires: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
}

/// Full candidate profile. `personal_info` is always present; the other
/// sections may be empty but are never absent from the serialized form
/// passed downstream — `work_history` defaults to an empty list when the
/// upstream extractor omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub work_history: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub projects: Vec<Project>,
}
