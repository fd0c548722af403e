// Admin console: plan and prize catalog CRUD plus user management. Every
// mutation here lands in the activity log. Adding or updating a plan
// broadcasts a zero-amount system transaction into every user's feed.

use serde::{Deserialize, Serialize};

use wealthdesk_core::db::keys;
use wealthdesk_core::db::models::{InvestmentPlan, Prize, PrizeKind, TransactionKind};
use wealthdesk_core::error::{ErrorCode, Result};
use wealthdesk_core::utils::id::generate_id;

use crate::session::Session;
use crate::store::{AppStore, Runtime};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub name: String,
    pub min_investment: f64,
    pub daily_return: f64,
    pub duration: u32,
    pub category: String,
}

/// Prepend the broadcast to every user's feed. The whole users collection
/// is persisted afterwards by the caller.
fn broadcast_system_transaction(rt: &mut Runtime, description: &str) {
    for user in &mut rt.data.users {
        user.push_transaction(super::transaction(
            TransactionKind::System,
            0.0,
            description.to_string(),
        ));
    }
}

pub async fn add_plan(store: &AppStore, req: PlanRequest) -> Result<String> {
    if req.min_investment <= 0.0 {
        return Err(ErrorCode::InvalidAmount.into());
    }

    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let plan = InvestmentPlan {
        id: generate_id(),
        name: req.name,
        min_investment: req.min_investment,
        daily_return: req.daily_return,
        duration: req.duration,
        category: req.category,
    };
    let plan_id = plan.id.clone();
    let notice = format!("New investment plan available: {}", plan.name);
    let detail = format!("added plan {}", plan.name);
    rt.data.plans.push(plan);

    broadcast_system_transaction(&mut rt, &notice);

    store.persist(keys::INVESTMENT_PLANS, &rt.data.plans).await;
    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;
    store.log_admin_action(&mut rt, "plan.add", detail).await;
    Ok(plan_id)
}

pub async fn update_plan(store: &AppStore, plan_id: &str, req: PlanRequest) -> Result<()> {
    if req.min_investment <= 0.0 {
        return Err(ErrorCode::InvalidAmount.into());
    }

    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let plan = rt
        .data
        .plans
        .iter_mut()
        .find(|p| p.id == plan_id)
        .ok_or(ErrorCode::PlanNotFound)?;
    plan.name = req.name;
    plan.min_investment = req.min_investment;
    plan.daily_return = req.daily_return;
    plan.duration = req.duration;
    plan.category = req.category;
    let notice = format!("Investment plan updated: {}", plan.name);
    let detail = format!("updated plan {}", plan.name);

    broadcast_system_transaction(&mut rt, &notice);

    store.persist(keys::INVESTMENT_PLANS, &rt.data.plans).await;
    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;
    store.log_admin_action(&mut rt, "plan.update", detail).await;
    Ok(())
}

/// Remove a plan from the catalog. Holdings that reference it are left
/// untouched; they carry their own copies of the figures.
pub async fn delete_plan(store: &AppStore, plan_id: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let before = rt.data.plans.len();
    rt.data.plans.retain(|p| p.id != plan_id);
    if rt.data.plans.len() == before {
        return Err(ErrorCode::PlanNotFound.into());
    }

    store.persist(keys::INVESTMENT_PLANS, &rt.data.plans).await;
    store
        .log_admin_action(&mut rt, "plan.delete", format!("deleted plan {plan_id}"))
        .await;
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PrizeKind,
    pub amount: f64,
}

fn warn_if_off_wheel(store: &AppStore, rt: &Runtime) {
    let count = rt.data.prizes.len();
    if count != store.options.wheel_slots {
        tracing::warn!(
            count,
            slots = store.options.wheel_slots,
            "prize catalog no longer matches the wheel layout"
        );
    }
}

pub async fn add_prize(store: &AppStore, req: PrizeRequest) -> Result<String> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let prize = Prize {
        id: generate_id(),
        name: req.name,
        kind: req.kind,
        amount: req.amount,
    };
    let prize_id = prize.id.clone();
    let detail = format!("added prize {}", prize.name);
    rt.data.prizes.push(prize);
    warn_if_off_wheel(store, &rt);

    store.persist(keys::LUCKY_DRAW_PRIZES, &rt.data.prizes).await;
    store.log_admin_action(&mut rt, "prize.add", detail).await;
    Ok(prize_id)
}

pub async fn update_prize(store: &AppStore, prize_id: &str, req: PrizeRequest) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let prize = rt
        .data
        .prizes
        .iter_mut()
        .find(|p| p.id == prize_id)
        .ok_or(ErrorCode::PrizeNotFound)?;
    prize.name = req.name;
    prize.kind = req.kind;
    prize.amount = req.amount;
    let detail = format!("updated prize {}", prize.name);

    store.persist(keys::LUCKY_DRAW_PRIZES, &rt.data.prizes).await;
    store.log_admin_action(&mut rt, "prize.update", detail).await;
    Ok(())
}

pub async fn delete_prize(store: &AppStore, prize_id: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let before = rt.data.prizes.len();
    rt.data.prizes.retain(|p| p.id != prize_id);
    if rt.data.prizes.len() == before {
        return Err(ErrorCode::PrizeNotFound.into());
    }
    warn_if_off_wheel(store, &rt);

    store.persist(keys::LUCKY_DRAW_PRIZES, &rt.data.prizes).await;
    store
        .log_admin_action(&mut rt, "prize.delete", format!("deleted prize {prize_id}"))
        .await;
    Ok(())
}

/// Block or unblock a member. Blocked members keep their data but cannot
/// log in.
pub async fn set_user_active(store: &AppStore, user_id: &str, active: bool) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let user = rt
        .data
        .find_user_mut(user_id)
        .ok_or(ErrorCode::UserNotFound)?;
    user.is_active = active;

    store.persist(keys::USERS, &rt.data.users).await;
    let action = if active { "user.unblock" } else { "user.block" };
    store
        .log_admin_action(&mut rt, action, format!("{action} {user_id}"))
        .await;
    Ok(())
}

/// The one hard delete in the system. If the admin was impersonating the
/// deleted member, the session falls back to the console.
pub async fn delete_user(store: &AppStore, user_id: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let before = rt.data.users.len();
    rt.data.users.retain(|u| u.id != user_id);
    if rt.data.users.len() == before {
        return Err(ErrorCode::UserNotFound.into());
    }

    if rt.session == (Session::AdminAsUser { user_id: user_id.to_string() }) {
        rt.session = Session::Admin;
        rt.view = crate::view::View::AdminDashboard;
        store.discard(keys::LOGIN_AS_USER).await;
    }

    store.persist(keys::USERS, &rt.data.users).await;
    store
        .log_admin_action(&mut rt, "user.delete", format!("deleted {user_id}"))
        .await;
    Ok(())
}

/// Grant extra wheel plays to a member.
pub async fn grant_lucky_draw_chances(store: &AppStore, user_id: &str, count: u32) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let user = rt
        .data
        .find_user_mut(user_id)
        .ok_or(ErrorCode::UserNotFound)?;
    user.lucky_draw_chances += count;

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;
    store
        .log_admin_action(
            &mut rt,
            "luckyDraw.grant",
            format!("granted {count} chances to {user_id}"),
        )
        .await;
    Ok(())
}
