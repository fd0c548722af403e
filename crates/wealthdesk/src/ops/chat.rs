// Support chat. The caller's side is an explicit parameter; sending bumps
// the unread counter of the party that did not send, and marking read
// zeroes only the caller's own counter.

use chrono::Utc;

use wealthdesk_core::db::keys;
use wealthdesk_core::db::models::{ChatMessage, ChatRole};
use wealthdesk_core::error::{ErrorCode, Result};

use crate::store::AppStore;

/// Append a message to the user's session, creating it on first contact.
pub async fn send_chat_message(
    store: &AppStore,
    sender: ChatRole,
    user_id: &str,
    text: &str,
) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ErrorCode::EmptyMessage.into());
    }

    let mut rt = store.runtime.write().await;
    if rt.data.find_user(user_id).is_none() {
        return Err(ErrorCode::UserNotFound.into());
    }

    let session = rt.data.chat_for_mut(user_id);
    session.messages.push(ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        sender,
        text: text.to_string(),
        sent_at: Utc::now(),
    });
    match sender {
        ChatRole::User => session.admin_unread_count += 1,
        ChatRole::Admin => session.user_unread_count += 1,
    }

    store.persist(keys::CHAT_SESSIONS, &rt.data.chats).await;
    Ok(())
}

/// Zero the caller's own unread counter. A user with no session yet has
/// nothing to clear.
pub async fn mark_chat_read(store: &AppStore, reader: ChatRole, user_id: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;

    let Some(session) = rt.data.chats.iter_mut().find(|c| c.user_id == user_id) else {
        return Ok(());
    };
    match reader {
        ChatRole::User => session.user_unread_count = 0,
        ChatRole::Admin => session.admin_unread_count = 0,
    }

    store.persist(keys::CHAT_SESSIONS, &rt.data.chats).await;
    Ok(())
}
