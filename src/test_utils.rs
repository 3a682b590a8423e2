#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{AnswerKey, Mcq};

    /// A well-formed model response for a complexity-2 photosynthesis
    /// question, answer "B".
    pub fn valid_mcq_json() -> String {
        r#"{
            "question": "Which pigment absorbs light for photosynthesis?",
            "options": ["A. Hemoglobin", "B. Chlorophyll", "C. Keratin", "D. Melanin"],
            "answer": "B",
            "explanation": "Chlorophyll absorbs light energy used to fix carbon dioxide.",
            "complexity": 2
        }"#
        .to_string()
    }

    /// A second well-formed response with a different question text.
    pub fn novel_mcq_json() -> String {
        r#"{
            "question": "Where does the Calvin cycle take place?",
            "options": ["A. Mitochondria", "B. Stroma", "C. Thylakoid membrane", "D. Cytosol"],
            "answer": "B",
            "explanation": "The Calvin cycle runs in the stroma of the chloroplast.",
            "complexity": 3
        }"#
        .to_string()
    }

    /// The [`Mcq`] that parsing [`valid_mcq_json`] must yield.
    pub fn photosynthesis_mcq() -> Mcq {
        Mcq {
            question: "Which pigment absorbs light for photosynthesis?".to_string(),
            options: vec![
                "A. Hemoglobin".to_string(),
                "B. Chlorophyll".to_string(),
                "C. Keratin".to_string(),
                "D. Melanin".to_string(),
            ],
            answer: AnswerKey::B,
            explanation: "Chlorophyll absorbs light energy used to fix carbon dioxide."
                .to_string(),
            complexity: Some(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_valid_json_parses() {
        let parsed = crate::services::response_parser::parse_mcq(&valid_mcq_json()).unwrap();
        assert_eq!(parsed, photosynthesis_mcq());
    }

    #[test]
    fn test_fixtures_questions_differ() {
        assert_ne!(valid_mcq_json(), novel_mcq_json());
    }
}
