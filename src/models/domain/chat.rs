use serde::{Deserialize, Serialize};

/// A single turn in a chat transcript.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        ChatTurn {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatTurn {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// An in-memory conversation about one MCQ.
///
/// Turns are append-only and never trimmed; a session lives for the
/// lifetime of the process.
#[derive(Clone, Debug)]
pub struct ChatSession {
    pub mcq_details: String,
    pub system_prompt: String,
    pub turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new(mcq_details: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        ChatSession {
            mcq_details: mcq_details.into(),
            system_prompt: system_prompt.into(),
            turns: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_role_serializes_snake_case() {
        let json = serde_json::to_string(&ChatRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn new_session_starts_with_empty_transcript() {
        let session = ChatSession::new("Question: ...", "You are an assistant...");

        assert!(session.turns.is_empty());
        assert_eq!(session.mcq_details, "Question: ...");
    }

    #[test]
    fn turn_constructors_set_roles() {
        assert_eq!(ChatTurn::user("hi").role, ChatRole::User);
        assert_eq!(ChatTurn::assistant("hello").role, ChatRole::Assistant);
    }
}
