use serde::{Deserialize, Serialize};

/// An application question supplied by the caller.
///
/// `max_length` is a word budget, advisory to the generator — overruns are
/// never truncated here. Callers who want hard enforcement check
/// `pipeline::meets_requirements` and re-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationQuestion {
    pub question_id: String,
    pub question_text: String,
    pub question_type: String,
    pub max_length: Option<usize>,
    pub context: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_deserializes_without_optional_fields() {
        let json = r#"{
            "question_id": "q-1",
            "question_text": "Why do you want this role?",
            "question_type": "motivation"
        }"#;
        let question: ApplicationQuestion = serde_json::from_str(json).unwrap();
        assert!(question.max_length.is_none());
        assert!(question.context.is_none());
    }
}
