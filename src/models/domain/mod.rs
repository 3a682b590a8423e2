pub mod chat;
pub mod mcq;
pub use chat::{ChatRole, ChatSession, ChatTurn};
pub use mcq::{AnswerKey, Mcq};
