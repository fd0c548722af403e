// Login password changes: self-service with the old password, or recovery
// through a phone-keyed reset code.

use wealthdesk_core::db::keys;
use wealthdesk_core::error::{ErrorCode, Result};

use crate::crypto;
use crate::otp::OtpPurpose;
use crate::store::AppStore;

/// Change the login password, gated by the current one.
pub async fn change_password(store: &AppStore, old: &str, new: &str) -> Result<()> {
    if new.len() < store.options.min_password_length {
        return Err(ErrorCode::PasswordTooShort.into());
    }

    let mut rt = store.runtime.write().await;
    let user_id = super::require_active_user(&rt)?;

    let user = rt.data.find_user(&user_id).ok_or(ErrorCode::UserNotFound)?;
    if !crypto::verify_password(&user.password, old)? {
        return Err(ErrorCode::WrongPassword.into());
    }

    let hash = crypto::hash_password(new)?;
    rt.data
        .find_user_mut(&user_id)
        .expect("looked up above")
        .password = hash;

    store.persist(keys::USERS, &rt.data.users).await;
    store.mirror_session_user(&rt).await;
    Ok(())
}

/// Issue a password-reset code to a registered phone.
pub async fn request_password_reset_otp(store: &AppStore, phone: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;

    if rt.data.find_user_by_phone(phone).is_none() {
        tracing::warn!(phone = %phone, "password reset requested for unknown phone");
        return Err(ErrorCode::UserNotFound.into());
    }

    let code = rt.otp.issue(OtpPurpose::PasswordReset, phone);
    let body = format!("Your {} password reset code is {code}", rt.data.app_name);
    store.dispatch_sms(&mut rt, phone, body);
    Ok(())
}

/// Reset a forgotten password with the code sent to the phone. The
/// password is validated before the code so a typo does not burn it.
pub async fn reset_password_with_otp(
    store: &AppStore,
    phone: &str,
    otp: &str,
    new_password: &str,
) -> Result<()> {
    if new_password.len() < store.options.min_password_length {
        return Err(ErrorCode::PasswordTooShort.into());
    }

    let mut rt = store.runtime.write().await;

    let user_id = rt
        .data
        .find_user_by_phone(phone)
        .map(|u| u.id.clone())
        .ok_or(ErrorCode::UserNotFound)?;

    rt.otp.consume(OtpPurpose::PasswordReset, phone, otp)?;

    let hash = crypto::hash_password(new_password)?;
    rt.data
        .find_user_mut(&user_id)
        .expect("looked up above")
        .password = hash;

    store.persist(keys::USERS, &rt.data.users).await;
    Ok(())
}
