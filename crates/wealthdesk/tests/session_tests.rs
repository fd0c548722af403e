//! Login, logout and the impersonation state machine.

mod common;

use wealthdesk::ops::{admin, sign_in};
use wealthdesk::{Session, View};
use wealthdesk_core::error::ErrorCode;

fn login_request(identifier: &str, password: &str) -> sign_in::LoginRequest {
    sign_in::LoginRequest {
        identifier: identifier.into(),
        password: password.into(),
        device: Some("test harness".into()),
    }
}

#[tokio::test]
async fn login_by_phone_records_activity_and_routes_home() {
    let store = common::store().await;
    let user_id = common::register_user(&store, "+911111111111", "hunter22").await;

    let user = sign_in::login(&store, login_request("+911111111111", "hunter22"))
        .await
        .expect("login succeeds");
    assert_eq!(user.id, user_id);
    assert_eq!(user.login_activity.len(), 1);
    assert_eq!(user.login_activity[0].device, "test harness");

    assert_eq!(store.session().await, Session::User { user_id });
    assert_eq!(store.view().await, View::Home);
}

#[tokio::test]
async fn login_by_id_with_wrong_password_fails() {
    let store = common::store().await;
    let user_id = common::register_user(&store, "+911111111112", "hunter22").await;

    let result = sign_in::login(&store, login_request(&user_id, "wrong-pass")).await;
    assert_eq!(
        result.unwrap_err().code(),
        Some(ErrorCode::InvalidCredentials)
    );
    assert_eq!(store.session().await, Session::LoggedOut);
}

#[tokio::test]
async fn blocked_account_cannot_log_in() {
    let store = common::store().await;
    let user_id = common::register_user(&store, "+911111111113", "hunter22").await;

    common::admin_login(&store).await;
    admin::set_user_active(&store, &user_id, false)
        .await
        .unwrap();
    sign_in::logout(&store).await;

    let result = sign_in::login(&store, login_request(&user_id, "hunter22")).await;
    assert_eq!(result.unwrap_err().code(), Some(ErrorCode::AccountBlocked));
}

#[tokio::test]
async fn impersonation_keeps_the_admin_session_alive() {
    let store = common::store().await;
    let user_id = common::register_user(&store, "+911111111114", "hunter22").await;

    common::admin_login(&store).await;
    assert_eq!(store.session().await, Session::Admin);
    assert_eq!(store.view().await, View::AdminDashboard);

    sign_in::login_as_user(&store, &user_id).await.unwrap();
    let session = store.session().await;
    assert!(session.is_admin());
    assert_eq!(session.active_user_id(), Some(user_id.as_str()));
    assert_eq!(store.view().await, View::Home);

    // Logging out of the impersonated user lands on the console, not on
    // the login screen.
    sign_in::logout(&store).await;
    assert_eq!(store.session().await, Session::Admin);
    assert_eq!(store.view().await, View::AdminDashboard);
}

#[tokio::test]
async fn return_to_admin_ends_only_the_user_context() {
    let store = common::store().await;
    let user_id = common::register_user(&store, "+911111111115", "hunter22").await;

    common::admin_login(&store).await;
    sign_in::login_as_user(&store, &user_id).await.unwrap();
    sign_in::return_to_admin(&store).await.unwrap();
    assert_eq!(store.session().await, Session::Admin);

    // And again from the console it is a rejection
    let result = sign_in::return_to_admin(&store).await;
    assert_eq!(result.unwrap_err().code(), Some(ErrorCode::NotImpersonating));
}

#[tokio::test]
async fn impersonating_an_unknown_user_fails() {
    let store = common::store().await;
    common::admin_login(&store).await;
    let result = sign_in::login_as_user(&store, "ID:999999").await;
    assert_eq!(result.unwrap_err().code(), Some(ErrorCode::UserNotFound));
}

#[tokio::test]
async fn members_cannot_impersonate() {
    let store = common::store().await;
    let user_id = common::register_user(&store, "+911111111116", "hunter22").await;
    sign_in::login(&store, login_request("+911111111116", "hunter22"))
        .await
        .unwrap();

    let result = sign_in::login_as_user(&store, &user_id).await;
    assert_eq!(
        result.unwrap_err().code(),
        Some(ErrorCode::AdminSessionRequired)
    );
}

#[tokio::test]
async fn member_logout_ends_the_session() {
    let store = common::store().await;
    common::register_user(&store, "+911111111117", "hunter22").await;
    sign_in::login(&store, login_request("+911111111117", "hunter22"))
        .await
        .unwrap();

    sign_in::logout(&store).await;
    assert_eq!(store.session().await, Session::LoggedOut);
    assert_eq!(store.view().await, View::Login);
}
