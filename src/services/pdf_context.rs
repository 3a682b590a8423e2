use std::path::Path;
use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::Mcq,
    services::{completion_client::CompletionClient, response_parser},
};

/// At most this many characters of extracted text are prepended to the
/// prompt; the rest of the document is ignored.
pub const CONTEXT_CHAR_LIMIT: usize = 4000;

/// Boundary to PDF text extraction, treated as an external collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> AppResult<String>;
}

/// lopdf-backed extractor. Text is concatenated page by page; a page
/// whose extraction fails contributes an empty string.
pub struct LopdfTextExtractor;

impl TextExtractor for LopdfTextExtractor {
    fn extract_text(&self, path: &Path) -> AppResult<String> {
        let document = lopdf::Document::load(path)
            .map_err(|e| AppError::InternalError(format!("failed to load PDF: {}", e)))?;

        let mut text = String::new();
        for page_number in document.get_pages().keys() {
            match document.extract_text(&[*page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    log::warn!("Failed to extract text from page {}: {}", page_number, e);
                }
            }
        }

        Ok(text)
    }
}

/// Single-attempt MCQ generation grounded on a truncated prefix of a
/// PDF's text. Unlike the retry loop, parse and transport errors
/// propagate to the caller.
pub struct PdfMcqService {
    client: Arc<dyn CompletionClient>,
    extractor: Arc<dyn TextExtractor>,
}

impl PdfMcqService {
    pub fn new(client: Arc<dyn CompletionClient>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self { client, extractor }
    }

    pub async fn generate_from_pdf(
        &self,
        pdf_path: &Path,
        topic: &str,
        complexity: u8,
    ) -> AppResult<Mcq> {
        let text = self.extractor.extract_text(pdf_path)?;
        let context = truncate_context(&text);

        let prompt = prompts::build_pdf_context_prompt(context, topic, complexity);
        let content = self.client.complete(&prompt).await?;

        response_parser::parse_mcq(&content)
    }
}

fn truncate_context(text: &str) -> &str {
    match text.char_indices().nth(CONTEXT_CHAR_LIMIT) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
