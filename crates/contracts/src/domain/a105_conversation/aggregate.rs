use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::domain::common::{matches_any, Searchable};

coded_enum! {
    pub enum SenderRole {
        Client => ("client", "Client"),
        Driver => ("driver", "Driver"),
        Support => ("support", "Support"),
        System => ("system", "System"),
    }
}

coded_enum! {
    pub enum ConversationStatus {
        Active => ("active", "Active"),
        Resolved => ("resolved", "Resolved"),
        Pending => ("pending", "Pending"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    pub id: String,
    pub name: String,
    pub role: SenderRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub sender: Sender,
    pub timestamp: String,
    pub content: String,
    #[serde(rename = "isRead")]
    pub is_read: bool,
}

impl Message {
    /// Исходящее сообщение: отправлено от имени клиента
    pub fn is_outgoing(&self) -> bool {
        self.sender.role == SenderRole::Client
    }
}

/// Переписка по заказу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub subject: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    pub status: ConversationStatus,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.is_read).count()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Добавить исходящее сообщение. Пустой (после trim) текст игнорируется.
    pub fn append_outgoing(&mut self, id: String, sender: Sender, timestamp: String, content: &str) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }
        self.messages.push(Message {
            id,
            order_id: self.order_id.clone(),
            sender,
            timestamp: timestamp.clone(),
            content: content.to_string(),
            is_read: true,
        });
        self.last_updated = timestamp;
        true
    }

    /// Открытие переписки помечает её сообщения прочитанными
    pub fn mark_read(&mut self) {
        for message in &mut self.messages {
            message.is_read = true;
        }
    }
}

impl Searchable for Conversation {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(&[&self.subject], filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a105_conversation::conversations;
    use crate::domain::common::filter_list;

    fn me() -> Sender {
        Sender {
            id: "C001".into(),
            name: "Your Company".into(),
            role: SenderRole::Client,
        }
    }

    #[test]
    fn test_search_by_subject() {
        let found = filter_list(conversations(), "delivery d", |_| true);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "CONV002");
    }

    #[test]
    fn test_append_ignores_blank() {
        let mut conversation = conversations()[0].clone();
        let before = conversation.messages.len();
        assert!(!conversation.append_outgoing("m1".into(), me(), "2023-12-15T13:00:00".into(), "   "));
        assert_eq!(conversation.messages.len(), before);

        assert!(conversation.append_outgoing("m2".into(), me(), "2023-12-15T13:00:00".into(), " Thanks! "));
        assert_eq!(conversation.messages.len(), before + 1);
        let last = conversation.last_message().unwrap();
        assert_eq!(last.content, "Thanks!");
        assert!(last.is_outgoing());
        assert_eq!(conversation.last_updated, "2023-12-15T13:00:00");
    }

    #[test]
    fn test_mark_read() {
        let mut conversation = conversations()[0].clone();
        assert_eq!(conversation.unread_count(), 1);
        conversation.mark_read();
        assert_eq!(conversation.unread_count(), 0);
    }
}
