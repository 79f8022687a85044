use contracts::domain::a105_conversation::{
    client_sender, conversations, Conversation, ConversationStatus, Message,
};
use contracts::domain::common::{Coded, Searchable};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

use crate::shared::components::{PageHeader, StatusBadge, Tone};
use crate::shared::date_utils::{format_datetime, now_timestamp, relative_time};
use crate::shared::icons::icon;

fn conversation_tone(status: ConversationStatus) -> Tone {
    match status {
        ConversationStatus::Active => Tone::Info,
        ConversationStatus::Resolved => Tone::Success,
        ConversationStatus::Pending => Tone::Warning,
    }
}

/// Append a client message to the conversation `id`. Returns false when
/// nothing was sent (blank text or unknown conversation).
fn send_message(list: &mut [Conversation], id: &str, text: &str) -> bool {
    let Some(conversation) = list.iter_mut().find(|c| c.id == id) else {
        return false;
    };
    conversation.append_outgoing(
        Uuid::new_v4().to_string(),
        client_sender(),
        now_timestamp(),
        text,
    )
}

/// Client communication tab. Conversations are a local copy of the fixtures.
#[component]
pub fn MessageCenter() -> impl IntoView {
    let list = RwSignal::new(conversations().to_vec());
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(list.with_untracked(|l| l.first().map(|c| c.id.clone())));
    let draft = RwSignal::new(String::new());

    let select = move |id: String| {
        list.update(|l| {
            if let Some(conversation) = l.iter_mut().find(|c| c.id == id) {
                conversation.mark_read();
            }
        });
        selected.set(Some(id));
    };

    let send = move || {
        let Some(id) = selected.get_untracked() else {
            return;
        };
        let text = draft.get_untracked();
        let sent = list.try_update(|l| send_message(l, &id, &text)).unwrap_or(false);
        if sent {
            log::debug!("message sent to {id}");
            draft.set(String::new());
        }
    };

    let current = move || {
        let id = selected.get()?;
        list.with(|l| l.iter().find(|c| c.id == id).cloned())
    };

    view! {
        <div class="panel">
            <PageHeader title="Message Center" icon_name="message" subtitle="Communicate with drivers and support about your deliveries" />

            <div class="split-view">
                <div class="split-view__list">
                    <Input value=query placeholder="Search conversations..." />
                    {move || {
                        let q = query.get();
                        list.with(|l| {
                            l.iter()
                                .filter(|c| c.matches_filter(&q))
                                .cloned()
                                .collect::<Vec<_>>()
                        })
                        .into_iter()
                        .map(|conversation| {
                            let id = conversation.id.clone();
                            let id_for_click = id.clone();
                            let unread = conversation.unread_count();
                            let preview = conversation
                                .last_message()
                                .map(|m| m.content.clone())
                                .unwrap_or_default();
                            view! {
                                <div
                                    class=move || {
                                        if selected.get().as_deref() == Some(id.as_str()) {
                                            "list-card list-card--selected"
                                        } else {
                                            "list-card"
                                        }
                                    }
                                    on:click=move |_| select(id_for_click.clone())
                                >
                                    <div class="list-card__head">
                                        <strong>{conversation.subject.clone()}</strong>
                                        {(unread > 0).then(|| view! {
                                            <Badge color=BadgeColor::Brand>{unread}</Badge>
                                        })}
                                    </div>
                                    <div class="text-muted">
                                        {format!("Order {} · {}", conversation.order_id, relative_time(&conversation.last_updated))}
                                    </div>
                                    <div class="list-card__preview">{preview}</div>
                                </div>
                            }
                        })
                        .collect_view()
                    }}
                </div>

                <div class="split-view__detail">
                    {move || match current() {
                        None => view! {
                            <div class="card empty-state">
                                {icon("message")}
                                <p>"Select a conversation"</p>
                            </div>
                        }
                        .into_any(),
                        Some(conversation) => view! {
                            <div class="card chat">
                                <div class="card__head">
                                    <div>
                                        <h3 class="card__title">{conversation.subject.clone()}</h3>
                                        <span class="text-muted">{format!("Order {}", conversation.order_id)}</span>
                                    </div>
                                    <StatusBadge
                                        tone=conversation_tone(conversation.status)
                                        label=conversation.status.display_name()
                                    />
                                </div>
                                <div class="chat__messages">
                                    {conversation.messages.into_iter().map(message_bubble).collect_view()}
                                </div>
                            </div>
                        }
                        .into_any(),
                    }}
                    <form
                        class="chat__composer"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            send();
                        }
                    >
                        <Input value=draft placeholder="Type your message..." />
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=Signal::derive(move || draft.get().trim().is_empty() || selected.get().is_none())
                        >
                            "Send"
                        </Button>
                    </form>
                </div>
            </div>
        </div>
    }
}

fn message_bubble(message: Message) -> impl IntoView {
    let class = if message.is_outgoing() {
        "chat__bubble chat__bubble--outgoing"
    } else {
        "chat__bubble"
    };
    view! {
        <div class=class>
            <div class="chat__meta">
                <strong>{message.sender.name.clone()}</strong>
                <span class="text-muted">{message.sender.role.display_name()}</span>
                <span class="text-muted">{format_datetime(&message.timestamp)}</span>
            </div>
            <p>{message.content}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_appends_to_selected_conversation() {
        let mut list = conversations().to_vec();
        let before = list[1].messages.len();
        let id = list[1].id.clone();

        assert!(send_message(&mut list, &id, "On my way to the door"));
        assert_eq!(list[1].messages.len(), before + 1);
        let last = list[1].last_message().unwrap();
        assert!(last.is_outgoing());
        assert_eq!(last.content, "On my way to the door");
    }

    #[test]
    fn test_blank_or_unknown_is_not_sent() {
        let mut list = conversations().to_vec();
        let id = list[0].id.clone();
        assert!(!send_message(&mut list, &id, "  "));
        assert!(!send_message(&mut list, "CONV404", "hello"));
    }
}
