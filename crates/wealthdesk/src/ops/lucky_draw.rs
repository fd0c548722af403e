// The lucky-draw resolver: one uniform pick over the prize catalog as it
// stands, one chance consumed per play.

use rand::Rng;
use serde::Serialize;

use wealthdesk_core::db::keys;
use wealthdesk_core::db::models::{Prize, TransactionKind};
use wealthdesk_core::error::{ErrorCode, Result};

use crate::store::AppStore;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    pub prize: Prize,
    /// Amount credited to the balance; zero for physical and no-win slots.
    pub credited: f64,
    pub chances_left: u32,
}

/// Uniform pick over whatever the catalog holds. The admin screen keeps it
/// at eight slots, but that is its convention, not this function's.
pub(crate) fn pick_prize<'a, R: Rng>(rng: &mut R, prizes: &'a [Prize]) -> Option<&'a Prize> {
    if prizes.is_empty() {
        return None;
    }
    Some(&prizes[rng.gen_range(0..prizes.len())])
}

/// Spend one chance on the wheel. With no chances left this fails before
/// touching anything; otherwise exactly one chance is consumed no matter
/// which prize comes up, and money/bonus prizes credit the balance with a
/// matching transaction.
pub async fn play_lucky_draw(store: &AppStore) -> Result<DrawResult> {
    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;

    let chances = rt
        .data
        .find_user(&user_id)
        .ok_or(ErrorCode::UserNotFound)?
        .lucky_draw_chances;
    if chances == 0 {
        return Err(ErrorCode::NoLuckyDrawChances.into());
    }

    let prize = pick_prize(&mut rand::thread_rng(), &rt.data.prizes)
        .cloned()
        .ok_or(ErrorCode::EmptyPrizeCatalog)?;

    let user = rt
        .data
        .find_user_mut(&user_id)
        .expect("looked up above");
    user.lucky_draw_chances -= 1;
    let chances_left = user.lucky_draw_chances;

    let credited = if prize.kind.pays_out() { prize.amount } else { 0.0 };
    if credited > 0.0 {
        user.balance += credited;
        user.push_transaction(super::transaction(
            TransactionKind::LuckyDraw,
            credited,
            format!("Lucky draw prize: {}", prize.name),
        ));
    }

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;

    Ok(DrawResult {
        prize,
        credited,
        chances_left,
    })
}
