// Deposits, withdrawals, bank account and fund password. Bank and fund
// password changes are OTP-gated against the member's own id.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use wealthdesk_core::db::keys;
use wealthdesk_core::db::models::{BankAccount, PendingDeposit, TransactionKind};
use wealthdesk_core::error::{ErrorCode, Result};

use crate::crypto;
use crate::otp::OtpPurpose;
use crate::store::AppStore;

/// Submit a deposit for confirmation. No minimum at this layer; the deposit
/// screen applies its own floor.
pub async fn submit_deposit(store: &AppStore, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ErrorCode::InvalidAmount.into());
    }

    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;

    rt.data.pending_deposit = Some(PendingDeposit {
        user_id,
        amount,
        created_at: Utc::now(),
    });
    store
        .persist(keys::PENDING_DEPOSIT, &rt.data.pending_deposit)
        .await;
    Ok(())
}

/// Admin confirmation of the pending deposit: credits the balance and
/// clears the pending document.
pub async fn confirm_deposit(store: &AppStore) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let pending = rt
        .data
        .pending_deposit
        .take()
        .ok_or(ErrorCode::NoPendingDeposit)?;
    store.discard(keys::PENDING_DEPOSIT).await;

    let user = rt
        .data
        .find_user_mut(&pending.user_id)
        .ok_or(ErrorCode::UserNotFound)?;
    user.balance += pending.amount;
    user.recharge_amount += pending.amount;
    user.push_transaction(super::transaction(
        TransactionKind::Deposit,
        pending.amount,
        format!("Deposit of {:.2} confirmed", pending.amount),
    ));

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;
    store
        .log_admin_action(
            &mut rt,
            "deposit.confirm",
            format!("{:.2} credited to {}", pending.amount, pending.user_id),
        )
        .await;
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalReceipt {
    pub amount: f64,
    /// Processing tax shown at payout. Not debited from the balance.
    pub tax: f64,
    pub net_payout: f64,
}

/// Withdraw to the bank account on file. Requires a bank account, the
/// configured minimum, and sufficient balance; the balance is debited by
/// the gross amount while the tax stays display-only.
pub async fn make_withdrawal(store: &AppStore, amount: f64) -> Result<WithdrawalReceipt> {
    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;

    let user = rt
        .data
        .find_user_mut(&user_id)
        .ok_or(ErrorCode::UserNotFound)?;
    if user.bank_account.is_none() {
        return Err(ErrorCode::NoBankAccount.into());
    }
    if !amount.is_finite() || amount < store.options.withdrawal_minimum {
        return Err(ErrorCode::BelowWithdrawalMinimum.into());
    }
    if amount > user.balance {
        return Err(ErrorCode::AmountExceedsBalance.into());
    }

    let tax = amount * store.options.withdrawal_tax_rate;
    let tax_percent = store.options.withdrawal_tax_rate * 100.0;
    user.balance -= amount;
    user.withdrawals += amount;
    user.push_transaction(super::transaction(
        TransactionKind::Withdrawal,
        -amount,
        format!("Withdrawal of {amount:.2} ({tax_percent:.0}% processing tax {tax:.2} shown at payout)"),
    ));

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;

    Ok(WithdrawalReceipt {
        amount,
        tax,
        net_payout: amount - tax,
    })
}

/// Issue a bank-update code to the active member's phone.
pub async fn request_bank_update_otp(store: &AppStore) -> Result<()> {
    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;
    let phone = rt
        .data
        .find_user(&user_id)
        .ok_or(ErrorCode::UserNotFound)?
        .phone
        .clone();

    let code = rt.otp.issue(OtpPurpose::BankUpdate, &user_id);
    let body = format!("Your {} bank update code is {code}", rt.data.app_name);
    store.dispatch_sms(&mut rt, &phone, body);
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountRequest {
    pub holder_name: String,
    pub bank_name: String,
    pub account_number: String,
    pub otp: String,
}

/// Replace the bank account on file, gated by a bank-update code.
pub async fn update_bank_account(store: &AppStore, req: BankAccountRequest) -> Result<()> {
    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;

    rt.otp.consume(OtpPurpose::BankUpdate, &user_id, &req.otp)?;

    let user = rt
        .data
        .find_user_mut(&user_id)
        .ok_or(ErrorCode::UserNotFound)?;
    user.bank_account = Some(BankAccount {
        holder_name: req.holder_name,
        bank_name: req.bank_name,
        account_number: req.account_number,
    });

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;
    Ok(())
}

/// Issue a fund-password code to the active member's phone.
pub async fn request_fund_password_otp(store: &AppStore) -> Result<()> {
    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;
    let phone = rt
        .data
        .find_user(&user_id)
        .ok_or(ErrorCode::UserNotFound)?
        .phone
        .clone();

    let code = rt.otp.issue(OtpPurpose::FundPassword, &user_id);
    let body = format!("Your {} fund password code is {code}", rt.data.app_name);
    store.dispatch_sms(&mut rt, &phone, body);
    Ok(())
}

/// Set or replace the fund password, gated by a fund-password code.
pub async fn set_fund_password(store: &AppStore, new_password: &str, otp: &str) -> Result<()> {
    if new_password.len() < store.options.min_password_length {
        return Err(ErrorCode::PasswordTooShort.into());
    }

    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;

    rt.otp.consume(OtpPurpose::FundPassword, &user_id, otp)?;

    let hash = crypto::hash_password(new_password)?;
    let user = rt
        .data
        .find_user_mut(&user_id)
        .ok_or(ErrorCode::UserNotFound)?;
    user.fund_password = Some(hash);

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;
    Ok(())
}

/// Check a fund password before a gated financial action.
pub async fn verify_fund_password(store: &AppStore, password: &str) -> Result<()> {
    let rt = store.runtime.read().await;
    let user_id = super::require_active_user(&rt)?;

    let user = rt.data.find_user(&user_id).ok_or(ErrorCode::UserNotFound)?;
    let hash = user
        .fund_password
        .as_deref()
        .ok_or(ErrorCode::FundPasswordNotSet)?;
    if crypto::verify_password(hash, password)? {
        Ok(())
    } else {
        Err(ErrorCode::WrongFundPassword.into())
    }
}
