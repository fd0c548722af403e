// Registration: OTP request plus account creation with seeded bonus
// transactions.

use serde::{Deserialize, Serialize};

use wealthdesk_core::db::keys;
use wealthdesk_core::db::models::{TransactionKind, User};
use wealthdesk_core::error::{ErrorCode, Result};
use wealthdesk_core::utils::id::generate_user_id;

use crate::crypto;
use crate::otp::OtpPurpose;
use crate::store::AppStore;
use crate::view::View;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub phone: String,
    pub password: String,
    pub name: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registered {
    pub user_id: String,
}

/// Digits with an optional leading `+`, at sensible lengths.
fn is_valid_phone(phone: &str) -> bool {
    if phone.len() < 8 || phone.len() > 16 {
        return false;
    }
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Issue a registration code for `phone` and deliver it over the simulated
/// SMS channel.
pub async fn request_registration_otp(store: &AppStore, phone: &str) -> Result<()> {
    if !is_valid_phone(phone) {
        return Err(ErrorCode::InvalidPhoneNumber.into());
    }

    let mut rt = store.runtime.write().await;
    let code = rt.otp.issue(OtpPurpose::Registration, phone);
    let body = format!("Your {} verification code is {code}", rt.data.app_name);
    store.dispatch_sms(&mut rt, phone, body);
    Ok(())
}

/// Create an account. Rejects a registered phone and any invalid, expired
/// or mismatched code; the code is gone after one successful use.
pub async fn register(store: &AppStore, req: RegisterRequest) -> Result<Registered> {
    if !is_valid_phone(&req.phone) {
        return Err(ErrorCode::InvalidPhoneNumber.into());
    }
    if req.password.len() < store.options.min_password_length {
        return Err(ErrorCode::PasswordTooShort.into());
    }

    let mut rt = store.runtime.write().await;

    if rt.data.find_user_by_phone(&req.phone).is_some() {
        tracing::warn!(phone = %req.phone, "registration with an already-registered phone");
        return Err(ErrorCode::PhoneAlreadyRegistered.into());
    }

    rt.otp
        .consume(OtpPurpose::Registration, &req.phone, &req.otp)?;

    let password_hash = crypto::hash_password(&req.password)?;

    let mut user_id = generate_user_id();
    while rt.data.find_user(&user_id).is_some() {
        user_id = generate_user_id();
    }

    let bonus = store.options.signup_bonus;
    let mut user = User::new(user_id.clone(), req.phone, password_hash, req.name);
    user.balance = bonus;
    user.push_transaction(super::transaction(
        TransactionKind::SignupBonus,
        bonus,
        "Signup bonus".into(),
    ));
    user.push_transaction(super::transaction(
        TransactionKind::SignInReward,
        0.0,
        "Sign-in reward".into(),
    ));

    rt.data.users.push(user);
    store.persist(keys::USERS, &rt.data.users).await;

    rt.view = View::Login;
    Ok(Registered { user_id })
}
