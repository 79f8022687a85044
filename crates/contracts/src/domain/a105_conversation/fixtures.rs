use once_cell::sync::Lazy;

use super::aggregate::{Conversation, ConversationStatus, Message, Sender, SenderRole};

fn sender(role: SenderRole) -> Sender {
    let (id, name) = match role {
        SenderRole::Client => ("C001", "Your Company"),
        SenderRole::Driver => ("P001", "John Smith"),
        SenderRole::Support => ("S001", "Support Team"),
        SenderRole::System => ("SYS", "System Notification"),
    };
    Sender {
        id: id.into(),
        name: name.into(),
        role,
    }
}

fn conversation(
    id: &str,
    order_id: &str,
    subject: &str,
    last_updated: &str,
    status: ConversationStatus,
    messages: &[(&str, SenderRole, &str, &str, bool)],
) -> Conversation {
    Conversation {
        id: id.into(),
        order_id: order_id.into(),
        subject: subject.into(),
        last_updated: last_updated.into(),
        status,
        messages: messages
            .iter()
            .map(|&(msg_id, role, timestamp, content, is_read)| Message {
                id: msg_id.into(),
                order_id: order_id.into(),
                sender: sender(role),
                timestamp: timestamp.into(),
                content: content.into(),
                is_read,
            })
            .collect(),
    }
}

static CONVERSATIONS: Lazy<Vec<Conversation>> = Lazy::new(|| {
    use SenderRole::*;
    vec![
        conversation("CONV001", "#4392", "Delivery Instructions", "2023-12-15T12:30:00", ConversationStatus::Active, &[
            ("MSG001", Client, "2023-12-15T10:45:00", "Hello, I wanted to provide additional delivery instructions for my package. Please leave it with the doorman if I'm not home.", true),
            ("MSG002", Driver, "2023-12-15T11:02:00", "Thank you for the instructions. I'll make sure to leave it with the doorman if you're not available. I should arrive between 2:15 PM and 2:45 PM.", true),
            ("MSG003", Client, "2023-12-15T11:10:00", "Perfect, thank you! The doorman's name is Robert.", true),
            ("MSG004", Driver, "2023-12-15T12:30:00", "I'm about 30 minutes away now. Will deliver to Robert if you're not home.", false),
        ]),
        conversation("CONV002", "#4389", "Delivery Delay", "2023-12-15T11:45:00", ConversationStatus::Active, &[
            ("MSG005", System, "2023-12-15T11:30:00", "Your delivery #4389 has been delayed due to heavy traffic. The new estimated delivery time is 2:15 PM.", true),
            ("MSG006", Client, "2023-12-15T11:35:00", "Thanks for the update. Will someone call when they're close to the delivery address?", true),
            ("MSG007", Support, "2023-12-15T11:45:00", "Yes, our driver will call you about 15 minutes before arrival. You can also track the delivery in real-time through the tracking page.", false),
        ]),
        conversation("CONV003", "#4390", "Delivery Confirmation", "2023-12-14T16:00:00", ConversationStatus::Resolved, &[
            ("MSG008", System, "2023-12-14T15:45:00", "Your delivery #4390 has been completed. The package was delivered at 3:45 PM.", true),
            ("MSG009", Client, "2023-12-14T15:50:00", "Thank you for the confirmation. I've received the package.", true),
            ("MSG010", Support, "2023-12-14T16:00:00", "You're welcome! Thank you for choosing our delivery service. Please let us know if you have any feedback or questions about your delivery experience.", true),
        ]),
        conversation("CONV004", "#4391", "Scheduled Delivery", "2023-12-15T09:45:00", ConversationStatus::Pending, &[
            ("MSG011", System, "2023-12-15T09:30:00", "Your order #4391 has been processed and is scheduled for delivery tomorrow between 9:00 AM and 11:00 AM.", true),
            ("MSG012", Client, "2023-12-15T09:45:00", "Thank you for the update. Is it possible to get a more specific delivery window?", false),
        ]),
        conversation("CONV005", "#4388", "Delivery Feedback", "2023-12-14T14:30:00", ConversationStatus::Resolved, &[
            ("MSG013", System, "2023-12-14T13:50:00", "Your delivery #4388 has been completed. The package was delivered at 1:50 PM.", true),
            ("MSG014", Support, "2023-12-14T14:00:00", "Thank you for using our delivery service! We'd appreciate your feedback on your delivery experience.", true),
            ("MSG015", Client, "2023-12-14T14:30:00", "The delivery was great! Driver was very professional and the package arrived earlier than expected. Thank you!", true),
        ]),
    ]
});

pub fn conversations() -> &'static [Conversation] {
    &CONVERSATIONS
}

/// Отправитель исходящих сообщений в центре сообщений клиента
pub fn client_sender() -> Sender {
    sender(SenderRole::Client)
}
