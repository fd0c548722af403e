// Plan purchases. Repeat purchases of a plan fold into one aggregated
// holding per (user, plan).

use chrono::Utc;
use serde::Serialize;

use wealthdesk_core::db::keys;
use wealthdesk_core::db::models::{Investment, TransactionKind};
use wealthdesk_core::error::{ErrorCode, Result};

use crate::store::AppStore;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentReceipt {
    pub plan_id: String,
    pub plan_name: String,
    pub quantity: u32,
    pub cost: f64,
}

/// Buy `quantity` units of a plan. The pre-check keeps the balance from
/// ever going negative; on rejection nothing changes.
pub async fn invest_in_plan(
    store: &AppStore,
    plan_id: &str,
    quantity: u32,
) -> Result<InvestmentReceipt> {
    if quantity == 0 {
        return Err(ErrorCode::InvalidAmount.into());
    }

    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;

    let plan = rt
        .data
        .find_plan(plan_id)
        .cloned()
        .ok_or(ErrorCode::PlanNotFound)?;
    let units = quantity as f64;
    let cost = plan.min_investment * units;

    let user = rt
        .data
        .find_user_mut(&user_id)
        .ok_or(ErrorCode::UserNotFound)?;
    if user.balance < cost {
        return Err(ErrorCode::InsufficientBalance.into());
    }

    user.balance -= cost;

    let daily = plan.daily_return * units;
    let projected = plan.daily_return * plan.duration as f64 * units;
    match user.investments.iter_mut().find(|i| i.plan_id == plan.id) {
        Some(holding) => {
            holding.quantity += quantity;
            holding.invested_amount += cost;
            holding.daily_earnings += daily;
            holding.total_revenue += projected;
        }
        None => user.investments.push(Investment {
            plan_id: plan.id.clone(),
            plan_name: plan.name.clone(),
            quantity,
            invested_amount: cost,
            daily_earnings: daily,
            total_revenue: projected,
            started_at: Utc::now(),
        }),
    }

    user.push_transaction(super::transaction(
        TransactionKind::Investment,
        -cost,
        format!("Invested in {} x{}", plan.name, quantity),
    ));

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;

    Ok(InvestmentReceipt {
        plan_id: plan.id,
        plan_name: plan.name,
        quantity,
        cost,
    })
}
