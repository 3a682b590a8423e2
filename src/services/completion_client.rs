use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{ChatRole, ChatTurn},
};

/// Boundary to the external text-completion service.
///
/// The service is opaque: no contract on latency or determinism, and
/// responses may wrap the requested JSON in markdown or prose.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends a single rendered prompt and returns the raw text reply.
    async fn complete(&self, prompt: &str) -> AppResult<String>;

    /// Sends a system prompt plus an ordered transcript and returns the
    /// assistant's text reply.
    async fn chat(&self, system_prompt: &str, turns: &[ChatTurn]) -> AppResult<String>;
}

pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
    chat_model: String,
    temperature: f32,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());

        Self {
            client: Client::with_config(openai_config),
            model: config.mcq_model.clone(),
            chat_model: config.chat_model.clone(),
            temperature: config.temperature,
        }
    }

    async fn send(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .temperature(self.temperature)
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                AppError::Transport("completion service returned no content".to_string())
            })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let messages = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?
            .into()];

        self.send(&self.model, messages).await
    }

    async fn chat(&self, system_prompt: &str, turns: &[ChatTurn]) -> AppResult<String> {
        let mut messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestSystemMessageArgs::default()
                .content(system_prompt)
                .build()?
                .into()];

        for turn in turns {
            let message = match turn.role {
                ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
                    .content(turn.content.as_str())
                    .build()?
                    .into(),
                ChatRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
                    .content(turn.content.as_str())
                    .build()?
                    .into(),
            };
            messages.push(message);
        }

        self.send(&self.chat_model, messages).await
    }
}
