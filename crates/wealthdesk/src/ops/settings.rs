// Branding, social links, payment settings and landing-page testimonials.
// Admin-gated; each document persists under its own key.

use chrono::Utc;

use wealthdesk_core::db::keys;
use wealthdesk_core::db::models::{Comment, PaymentSettings, SocialLinks};
use wealthdesk_core::error::{ErrorCode, Result};
use wealthdesk_core::utils::id::generate_id;

use crate::store::AppStore;

pub async fn update_app_name(store: &AppStore, name: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    rt.data.app_name = name.to_string();
    store.persist(keys::APP_NAME, &rt.data.app_name).await;
    store
        .log_admin_action(&mut rt, "settings.appName", format!("renamed app to {name}"))
        .await;
    Ok(())
}

pub async fn update_app_logo(store: &AppStore, logo_url: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    rt.data.app_logo = Some(logo_url.to_string());
    store.persist(keys::APP_LOGO, &rt.data.app_logo).await;
    store
        .log_admin_action(&mut rt, "settings.appLogo", "updated logo".into())
        .await;
    Ok(())
}

pub async fn update_theme_color(store: &AppStore, color: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    rt.data.theme_color = Some(color.to_string());
    store.persist(keys::THEME_COLOR, &rt.data.theme_color).await;
    store
        .log_admin_action(&mut rt, "settings.themeColor", format!("theme set to {color}"))
        .await;
    Ok(())
}

pub async fn update_social_links(store: &AppStore, links: SocialLinks) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    rt.data.social_links = links;
    store.persist(keys::SOCIAL_LINKS, &rt.data.social_links).await;
    store
        .log_admin_action(&mut rt, "settings.socialLinks", "updated social links".into())
        .await;
    Ok(())
}

pub async fn update_payment_settings(store: &AppStore, settings: PaymentSettings) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    rt.data.payment_settings = settings;
    store
        .persist(keys::PAYMENT_SETTINGS, &rt.data.payment_settings)
        .await;
    store
        .log_admin_action(&mut rt, "settings.payment", "updated payment settings".into())
        .await;
    Ok(())
}

pub async fn add_comment(store: &AppStore, author: &str, text: &str) -> Result<String> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let comment = Comment {
        id: generate_id(),
        author: author.to_string(),
        text: text.to_string(),
        created_at: Utc::now(),
    };
    let comment_id = comment.id.clone();
    rt.data.comments.push(comment);

    store.persist(keys::COMMENTS, &rt.data.comments).await;
    store
        .log_admin_action(&mut rt, "comment.add", format!("comment by {author}"))
        .await;
    Ok(comment_id)
}

pub async fn delete_comment(store: &AppStore, comment_id: &str) -> Result<()> {
    let mut rt = store.runtime.write().await;
    super::require_admin(&rt)?;

    let before = rt.data.comments.len();
    rt.data.comments.retain(|c| c.id != comment_id);
    if rt.data.comments.len() == before {
        return Err(ErrorCode::CommentNotFound.into());
    }

    store.persist(keys::COMMENTS, &rt.data.comments).await;
    store
        .log_admin_action(&mut rt, "comment.delete", format!("deleted {comment_id}"))
        .await;
    Ok(())
}
