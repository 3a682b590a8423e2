use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::{
    constants::prompts,
    errors::AppError,
    models::domain::Mcq,
    services::{completion_client::CompletionClient, response_parser},
};

const TRANSPORT_RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Why a single generation attempt failed. Transport failures back off
/// before the next attempt; parse and validation failures retry
/// immediately. None of these ever reach the caller.
#[derive(Debug, Error)]
enum AttemptError {
    #[error("transport: {0}")]
    Transport(String),

    #[error("parse: {0}")]
    Parse(String),

    #[error("validation: {0}")]
    Validation(String),
}

impl From<AppError> for AttemptError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Transport(msg) => AttemptError::Transport(msg),
            AppError::Parse(msg) => AttemptError::Parse(msg),
            AppError::Validation(msg) => AttemptError::Validation(msg),
            other => AttemptError::Transport(other.to_string()),
        }
    }
}

pub struct McqGenerator {
    client: Arc<dyn CompletionClient>,
    max_retries: u32,
}

impl McqGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, max_retries: u32) -> Self {
        Self {
            client,
            max_retries,
        }
    }

    /// Generates one MCQ about `topic`, retrying on any transport,
    /// parse, or validation failure up to the configured retry count.
    ///
    /// Never fails: once retries are exhausted the sentinel placeholder
    /// question is returned instead.
    pub async fn generate_mcq(&self, topic: &str, complexity: u8, history: &[String]) -> Mcq {
        let mut retries = 0;

        while retries < self.max_retries {
            match self.attempt(topic, complexity, history).await {
                Ok(mcq) => return mcq,
                Err(err) => {
                    retries += 1;
                    log::warn!(
                        "MCQ generation attempt failed ({}/{}): {}",
                        retries,
                        self.max_retries,
                        err
                    );
                    if matches!(err, AttemptError::Transport(_)) && retries < self.max_retries {
                        tokio::time::sleep(TRANSPORT_RETRY_BACKOFF).await;
                    }
                }
            }
        }

        log::error!(
            "Failed to generate a valid MCQ about '{}' after {} retries",
            topic,
            self.max_retries
        );
        Mcq::sentinel()
    }

    /// Generates `count` MCQs, feeding each accepted question back into
    /// the history so later attempts are steered away from repeats.
    pub async fn generate_batch(&self, topic: &str, complexity: u8, count: u8) -> Vec<Mcq> {
        let mut history: Vec<String> = Vec::new();
        let mut mcqs = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let mcq = self.generate_mcq(topic, complexity, &history).await;
            if !mcq.is_sentinel() {
                history.push(mcq.question.clone());
            }
            mcqs.push(mcq);
        }

        mcqs
    }

    async fn attempt(
        &self,
        topic: &str,
        complexity: u8,
        history: &[String],
    ) -> Result<Mcq, AttemptError> {
        // The loop never bumps complexity itself; raising it on repeats
        // is only requested through the prompt text.
        let prompt = prompts::build_mcq_prompt(topic, complexity, history);
        let content = self.client.complete(&prompt).await?;
        let mcq = response_parser::parse_mcq(&content)?;

        let question = mcq.question.to_lowercase();
        if history.iter().any(|seen| seen.to_lowercase() == question) {
            return Err(AttemptError::Validation(format!(
                "question already present in history: '{}'",
                mcq.question
            )));
        }

        Ok(mcq)
    }
}
