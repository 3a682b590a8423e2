use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{ChatSession, ChatTurn},
    services::completion_client::CompletionClient,
};

/// Owns the registry of chat sessions about generated questions.
///
/// Sessions are keyed by caller-supplied ids and live for the lifetime
/// of the process; transcripts are append-only and never trimmed.
pub struct ChatSessionService {
    client: Arc<dyn CompletionClient>,
    sessions: RwLock<HashMap<String, ChatSession>>,
}

impl ChatSessionService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// One-time setup for a session. Builds the system prompt embedding
    /// the MCQ text verbatim; re-initializing an existing id replaces
    /// its transcript.
    pub async fn initialize_session(&self, session_id: &str, mcq_details: &str) {
        let system_prompt = prompts::build_chat_system_prompt(mcq_details);
        let session = ChatSession::new(mcq_details, system_prompt);

        let mut sessions = self.sessions.write().await;
        if sessions.insert(session_id.to_string(), session).is_some() {
            log::info!("Replacing existing chat session '{}'", session_id);
        }
    }

    /// Appends the user turn to the session transcript, forwards the
    /// system prompt plus full transcript to the completion service,
    /// and appends and returns the assistant reply.
    pub async fn invoke_response(&self, session_id: &str, message: &str) -> AppResult<String> {
        let (system_prompt, turns) = {
            let mut sessions = self.sessions.write().await;
            let session = sessions.get_mut(session_id).ok_or_else(|| {
                AppError::UninitializedSession(format!(
                    "session '{}' has not been initialized; call initialize_session first",
                    session_id
                ))
            })?;

            session.turns.push(ChatTurn::user(message));
            (session.system_prompt.clone(), session.turns.clone())
        };

        let reply = self.client.chat(&system_prompt, &turns).await?;

        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(session_id) {
            session.turns.push(ChatTurn::assistant(reply.clone()));
        }

        Ok(reply)
    }

    #[cfg(test)]
    pub async fn transcript(&self, session_id: &str) -> Option<Vec<ChatTurn>> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).map(|s| s.turns.clone())
    }
}
