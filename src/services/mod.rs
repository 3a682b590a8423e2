pub mod chat_session;
pub mod completion_client;
pub mod mcq_generator;
pub mod mcq_writer;
pub mod pdf_context;
pub mod response_parser;
