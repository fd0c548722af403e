// Profile edits, the transaction feed read-flag sweep, and the daily
// check-in reward.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use wealthdesk_core::db::keys;
use wealthdesk_core::db::models::TransactionKind;
use wealthdesk_core::error::{ErrorCode, Result};

use crate::store::AppStore;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

pub async fn update_profile(store: &AppStore, update: ProfileUpdate) -> Result<()> {
    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;

    let user = rt
        .data
        .find_user_mut(&user_id)
        .ok_or(ErrorCode::UserNotFound)?;
    if let Some(name) = update.name {
        user.name = name;
    }
    if let Some(email) = update.email {
        user.email = Some(email);
    }

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;
    Ok(())
}

/// Flip every feed entry to read. Nothing is ever deleted from the feed.
pub async fn mark_transactions_read(store: &AppStore) -> Result<()> {
    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;

    let user = rt
        .data
        .find_user_mut(&user_id)
        .ok_or(ErrorCode::UserNotFound)?;
    for tx in &mut user.transactions {
        tx.read = true;
    }

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;
    Ok(())
}

/// Once per calendar day: records the check-in, grants one lucky-draw
/// chance, and drops a zero-amount entry into the feed.
pub async fn daily_check_in(store: &AppStore) -> Result<u32> {
    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;

    let today = Utc::now().date_naive();
    let user = rt
        .data
        .find_user_mut(&user_id)
        .ok_or(ErrorCode::UserNotFound)?;
    if user.daily_check_ins.contains(&today) {
        return Err(ErrorCode::AlreadyCheckedInToday.into());
    }

    user.daily_check_ins.push(today);
    user.lucky_draw_chances += 1;
    user.push_transaction(super::transaction(
        TransactionKind::CheckIn,
        0.0,
        "Daily check-in: +1 lucky draw chance".into(),
    ));
    let chances = user.lucky_draw_chances;

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;
    Ok(chances)
}
