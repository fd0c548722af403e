// Login, logout and the admin impersonation transitions.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use wealthdesk_core::db::keys;
use wealthdesk_core::db::models::{LoginActivity, User};
use wealthdesk_core::error::{ErrorCode, Result};

use crate::crypto;
use crate::session::Session;
use crate::store::AppStore;
use crate::view::View;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Phone number or member id.
    pub identifier: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

/// Member login by phone or id. A blocked account rejects even with the
/// right password.
pub async fn login(store: &AppStore, req: LoginRequest) -> Result<User> {
    let mut rt = store.runtime.write().await;

    let user_id = {
        let user = rt
            .data
            .find_user_by_identifier(&req.identifier)
            .ok_or(ErrorCode::InvalidCredentials)?;
        if !crypto::verify_password(&user.password, &req.password)? {
            tracing::warn!(identifier = %req.identifier, "login with wrong password");
            return Err(ErrorCode::InvalidCredentials.into());
        }
        if !user.is_active {
            tracing::warn!(user = %user.id, "login attempt on blocked account");
            return Err(ErrorCode::AccountBlocked.into());
        }
        user.id.clone()
    };

    let device = req.device.unwrap_or_else(|| "unknown device".into());
    let user = rt
        .data
        .find_user_mut(&user_id)
        .expect("matched above");
    user.login_activity.push(LoginActivity {
        timestamp: Utc::now(),
        device,
    });
    let snapshot = user.clone();

    store.persist(keys::USERS, &rt.data.users).await;

    rt.session = Session::user_login(user_id);
    rt.view = View::Home;
    store.mirror_session_user(&rt).await;

    Ok(snapshot)
}

/// Admin console login.
pub async fn admin_login(store: &AppStore, username: &str, password: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;

    let admin = rt.data.admin.as_ref().ok_or(ErrorCode::InvalidCredentials)?;
    if admin.username != username || !crypto::verify_password(&admin.password, password)? {
        tracing::warn!("admin login rejected");
        return Err(ErrorCode::InvalidCredentials.into());
    }

    rt.session = Session::admin_login();
    rt.view = View::AdminDashboard;
    Ok(())
}

/// End the current context. Logging out of an impersonated user lands back
/// on the admin console; everything else ends the session.
pub async fn logout(store: &AppStore) {
    let mut rt = store.runtime.write().await;

    match rt.session {
        Session::AdminAsUser { .. } => {
            store.discard(keys::LOGIN_AS_USER).await;
            rt.session = Session::Admin;
            rt.view = View::AdminDashboard;
        }
        Session::User { .. } => {
            store.discard(keys::CURRENT_USER).await;
            rt.session = Session::LoggedOut;
            rt.view = View::Login;
        }
        Session::Admin => {
            rt.session = Session::LoggedOut;
            rt.view = View::AdminLogin;
        }
        Session::LoggedOut => {}
    }
}

/// Swap the admin session into a member's context.
pub async fn login_as_user(store: &AppStore, user_id: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;

    if rt.data.find_user(user_id).is_none() {
        return Err(ErrorCode::UserNotFound.into());
    }
    rt.session = rt.session.impersonate(user_id.to_string())?;
    rt.view = View::Home;
    store.mirror_session_user(&rt).await;
    store
        .log_admin_action(&mut rt, "impersonate.enter", format!("viewing as {user_id}"))
        .await;
    Ok(())
}

/// Leave the impersonated context without ending the admin session.
pub async fn return_to_admin(store: &AppStore) -> Result<()> {
    let mut rt = store.runtime.write().await;

    let previous = rt.session.active_user_id().map(str::to_string);
    rt.session = rt.session.return_to_admin()?;
    rt.view = View::AdminDashboard;
    store.discard(keys::LOGIN_AS_USER).await;
    if let Some(user_id) = previous {
        store
            .log_admin_action(&mut rt, "impersonate.exit", format!("stopped viewing as {user_id}"))
            .await;
    }
    Ok(())
}
