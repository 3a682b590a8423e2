use serde::{Deserialize, Serialize};

pub const OPTION_COUNT: usize = 4;

pub const SENTINEL_QUESTION: &str = "Could not generate a question. Press Next to try Again.";

/// A multiple-choice question as returned by the model.
///
/// Invariants: exactly four options, each prefixed "A."-"D." by the
/// model; `answer` names one of them; `question` is non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    pub answer: AnswerKey,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerKey::A => write!(f, "A"),
            AnswerKey::B => write!(f, "B"),
            AnswerKey::C => write!(f, "C"),
            AnswerKey::D => write!(f, "D"),
        }
    }
}

impl std::str::FromStr for AnswerKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(AnswerKey::A),
            "B" | "b" => Ok(AnswerKey::B),
            "C" | "c" => Ok(AnswerKey::C),
            "D" | "d" => Ok(AnswerKey::D),
            other => Err(format!("answer must be one of A, B, C, D, got '{}'", other)),
        }
    }
}

impl Mcq {
    /// Placeholder returned when every generation attempt has been
    /// exhausted. Callers can only recognize it by its literal text.
    pub fn sentinel() -> Self {
        Mcq {
            question: SENTINEL_QUESTION.to_string(),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            answer: AnswerKey::A,
            explanation: "No explanation available.".to_string(),
            complexity: None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.question == SENTINEL_QUESTION
    }

    /// Renders the question and its options as a plain-text block,
    /// the form embedded into chat system prompts and the output file.
    pub fn details_text(&self) -> String {
        let mut text = format!("Question: {}\n", self.question);
        for option in &self.options {
            text.push_str(&format!("  {}\n", option));
        }
        text.push_str(&format!("Answer: {}\n", self.answer));
        text.push_str(&format!("Explanation: {}\n", self.explanation));
        text
    }
}
