#![allow(dead_code)]

use std::sync::Arc;

use wealthdesk::ops;
use wealthdesk::store::{AppStore, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use wealthdesk_core::options::StoreOptions;
use wealthdesk_core::logger::{LoggerConfig, LogLevel};
use wealthdesk_memory::MemoryStorage;

/// A fresh store over zero-latency storage, quiet logger.
pub async fn store() -> AppStore {
    store_on(Arc::new(MemoryStorage::instant())).await
}

pub async fn store_on(storage: Arc<MemoryStorage>) -> AppStore {
    let options = StoreOptions {
        logger: LoggerConfig {
            level: LogLevel::Error,
            ..Default::default()
        },
        ..Default::default()
    };
    AppStore::init(options, storage).await
}

/// The verification code from the most recent simulated SMS.
pub async fn latest_sms_code(store: &AppStore) -> String {
    let visible = store.visible_sms().await;
    let body = &visible.last().expect("an SMS was dispatched").body;
    body.chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Request a registration code and create an account. Leaves the store
/// logged out; returns the new member id.
pub async fn register_user(store: &AppStore, phone: &str, password: &str) -> String {
    ops::register::request_registration_otp(store, phone)
        .await
        .expect("otp issued");
    let otp = latest_sms_code(store).await;
    let registered = ops::register::register(
        store,
        ops::register::RegisterRequest {
            phone: phone.into(),
            password: password.into(),
            name: "Test Member".into(),
            otp,
        },
    )
    .await
    .expect("registration succeeds");
    registered.user_id
}

/// Log into the admin console with the seeded credentials.
pub async fn admin_login(store: &AppStore) {
    ops::sign_in::admin_login(store, DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
        .await
        .expect("admin login succeeds");
}
