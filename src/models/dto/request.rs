use serde::Deserialize;
use validator::Validate;

fn default_count() -> u8 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateMcqRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    #[validate(range(min = 1, max = 5))]
    pub complexity: u8,

    /// How many questions to generate in one call.
    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 10))]
    pub count: u8,

    /// Append each generated question to the configured output file.
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GeneratePdfMcqRequest {
    #[validate(length(min = 1))]
    pub pdf_path: String,

    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    #[validate(range(min = 1, max = 5))]
    pub complexity: u8,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InitializeChatRequest {
    #[validate(length(min = 1, max = 100))]
    pub session_id: String,

    #[validate(length(min = 1))]
    pub mcq_details: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatMessageRequest {
    #[validate(length(min = 1, max = 100))]
    pub session_id: String,

    #[validate(length(min = 1))]
    pub message: String,
}
