use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        chat_session::ChatSessionService,
        completion_client::{CompletionClient, OpenAiCompletionClient},
        mcq_generator::McqGenerator,
        pdf_context::{LopdfTextExtractor, PdfMcqService},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub mcq_generator: Arc<McqGenerator>,
    pub chat_service: Arc<ChatSessionService>,
    pub pdf_service: Arc<PdfMcqService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client: Arc<dyn CompletionClient> = Arc::new(OpenAiCompletionClient::new(&config));
        Self::with_client(config, client)
    }

    /// Wires the services around a caller-supplied completion client;
    /// used by tests to substitute a scripted stub.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let mcq_generator = Arc::new(McqGenerator::new(Arc::clone(&client), config.max_retries));
        let chat_service = Arc::new(ChatSessionService::new(Arc::clone(&client)));
        let pdf_service = Arc::new(PdfMcqService::new(
            Arc::clone(&client),
            Arc::new(LopdfTextExtractor),
        ));

        Self {
            mcq_generator,
            chat_service,
            pdf_service,
            config: Arc::new(config),
        }
    }
}
