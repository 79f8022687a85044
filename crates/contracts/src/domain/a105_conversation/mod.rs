pub mod aggregate;
pub mod fixtures;

pub use aggregate::{Conversation, ConversationStatus, Message, Sender, SenderRole};
pub use fixtures::{client_sender, conversations};
