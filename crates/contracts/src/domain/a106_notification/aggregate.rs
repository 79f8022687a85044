use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::domain::common::Choice;

coded_enum! {
    pub enum NotificationKind {
        Delivery => ("delivery", "Deliveries"),
        Order => ("order", "Orders"),
        Message => ("message", "Messages"),
        Feedback => ("feedback", "Feedback"),
        System => ("system", "System"),
    }
}

/// Уведомление (клиент, получатель, водитель)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    #[serde(rename = "isRead")]
    pub is_read: bool,
    #[serde(rename = "relatedId")]
    pub related_id: Option<String>,
    /// Ссылка действия, разбирается `NavigationIntent::parse_link`
    pub action: Option<String>,
}

/// Локальная копия ленты уведомлений.
///
/// Создаётся из статических данных при монтировании панели; изменения не сохраняются.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(items: &[Notification]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.is_read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.is_read = true;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn filtered(&self, kind: Choice<NotificationKind>) -> Vec<Notification> {
        self.items
            .iter()
            .filter(|n| kind.matches(n.kind))
            .cloned()
            .collect()
    }

    /// Виды, реально присутствующие в ленте (для вкладок фильтра)
    pub fn kinds(&self) -> Vec<NotificationKind> {
        let mut kinds: Vec<NotificationKind> = Vec::new();
        for n in &self.items {
            if !kinds.contains(&n.kind) {
                kinds.push(n.kind);
            }
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a106_notification::{customer_notifications, driver_notifications};

    #[test]
    fn test_mark_read_and_all() {
        let mut feed = NotificationFeed::new(driver_notifications());
        assert_eq!(feed.unread_count(), 2);

        feed.mark_read("DN001");
        assert_eq!(feed.unread_count(), 1);

        feed.mark_read("missing");
        assert_eq!(feed.unread_count(), 1);

        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn test_feed_is_a_copy() {
        let mut feed = NotificationFeed::new(customer_notifications());
        feed.clear();
        assert!(feed.is_empty());
        // Исходные данные не меняются: следующее монтирование начнёт с полной ленты
        assert_eq!(NotificationFeed::new(customer_notifications()).items().len(), 5);
    }

    #[test]
    fn test_filter_by_kind() {
        let feed = NotificationFeed::new(customer_notifications());
        let messages = feed.filtered(Choice::Only(NotificationKind::Message));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "NOTIF004");
        assert_eq!(feed.filtered(Choice::All).len(), 5);
        assert_eq!(
            feed.kinds(),
            vec![NotificationKind::Delivery, NotificationKind::Message, NotificationKind::System]
        );
    }
}
