use serde::Serialize;

use crate::models::domain::Mcq;

#[derive(Debug, Clone, Serialize)]
pub struct McqDto {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u8>,
    /// True when generation exhausted its retries and fell back to the
    /// placeholder question.
    pub exhausted: bool,
}

impl From<Mcq> for McqDto {
    fn from(mcq: Mcq) -> Self {
        let exhausted = mcq.is_sentinel();
        McqDto {
            question: mcq.question,
            options: mcq.options,
            answer: mcq.answer.to_string(),
            explanation: mcq.explanation,
            complexity: mcq.complexity,
            exhausted,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateMcqResponse {
    pub mcqs: Vec<McqDto>,
}

#[derive(Debug, Serialize)]
pub struct InitializeChatResponse {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub session_id: String,
    pub reply: String,
}
