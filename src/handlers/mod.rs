pub mod chat_handler;
pub mod mcq_handler;

pub use chat_handler::{initialize_chat, send_chat_message};
pub use mcq_handler::{generate_mcq_from_pdf, generate_mcqs, health_check};
