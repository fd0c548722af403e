// AppStore — the single source of truth every screen talks to.
//
// One logical writer: each mutating operation takes the write lock, applies
// its read-modify-write against the in-memory state, persists the affected
// collection(s) wholesale, and mirrors the active user into the
// `currentUser` / `loginAsUser` documents. Storage failures are logged and
// absorbed; memory may then run ahead of storage until the next write.

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use wealthdesk_core::db::keys;
use wealthdesk_core::db::models::{
    ActivityLogEntry, Admin, ChatSession, Comment, InvestmentPlan, Prize, PrizeKind, User,
};
use wealthdesk_core::db::storage::Storage;
use wealthdesk_core::logger::AppLogger;
use wealthdesk_core::options::StoreOptions;
use wealthdesk_core::utils::id::generate_id;

use crate::crypto;
use crate::otp::OtpVault;
use crate::session::Session;
use crate::sms::{SmsChannel, SmsNotification};
use crate::state::AppState;
use crate::view::View;

/// First-run admin credentials. Changed from the admin console.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Everything behind the store's single write lock.
pub(crate) struct Runtime {
    pub data: AppState,
    pub session: Session,
    pub view: View,
    pub otp: OtpVault,
    pub sms: SmsChannel,
}

pub struct AppStore {
    pub(crate) options: StoreOptions,
    storage: Arc<dyn Storage>,
    pub(crate) logger: AppLogger,
    pub(crate) runtime: RwLock<Runtime>,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("options", &self.options)
            .field("storage", &self.storage)
            .finish()
    }
}

/// Read a document into `T`, falling back to `default` when the key is
/// absent, unreadable or corrupt. Failures are logged, never raised.
async fn load_or<T: DeserializeOwned>(
    storage: &dyn Storage,
    logger: &AppLogger,
    key: &str,
    default: T,
) -> T {
    match storage.get(key).await {
        Ok(Some(doc)) => match serde_json::from_value(doc) {
            Ok(value) => value,
            Err(e) => {
                logger.error(&format!("corrupt document under '{key}': {e}"));
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            logger.error(&format!("failed to read '{key}': {e}"));
            default
        }
    }
}

/// The eight slots the wheel ships with.
fn default_prize_wheel() -> Vec<Prize> {
    let slot = |name: &str, kind: PrizeKind, amount: f64| Prize {
        id: generate_id(),
        name: name.to_string(),
        kind,
        amount,
    };
    vec![
        slot("10 Cash", PrizeKind::Money, 10.0),
        slot("30 Cash", PrizeKind::Money, 30.0),
        slot("50 Bonus", PrizeKind::Bonus, 50.0),
        slot("100 Bonus", PrizeKind::Bonus, 100.0),
        slot("Smartwatch", PrizeKind::Physical, 0.0),
        slot("Gift Hamper", PrizeKind::Physical, 0.0),
        slot("Better Luck Next Time", PrizeKind::Nothing, 0.0),
        slot("Extra Spin Tomorrow", PrizeKind::Nothing, 0.0),
    ]
}

impl AppStore {
    /// Load every collection from storage, seed first-run defaults, and
    /// restore any persisted session mirror.
    pub async fn init(options: StoreOptions, storage: Arc<dyn Storage>) -> Self {
        let logger = AppLogger::new(options.logger.clone());

        let mut data = AppState {
            users: load_or(&*storage, &logger, keys::USERS, Vec::new()).await,
            admin: load_or(&*storage, &logger, keys::ADMIN, None).await,
            plans: load_or(&*storage, &logger, keys::INVESTMENT_PLANS, Vec::new()).await,
            prizes: load_or(&*storage, &logger, keys::LUCKY_DRAW_PRIZES, Vec::new()).await,
            chats: load_or(&*storage, &logger, keys::CHAT_SESSIONS, Vec::new()).await,
            comments: load_or(&*storage, &logger, keys::COMMENTS, Vec::new()).await,
            social_links: load_or(&*storage, &logger, keys::SOCIAL_LINKS, Default::default())
                .await,
            payment_settings:
                load_or(&*storage, &logger, keys::PAYMENT_SETTINGS, Default::default()).await,
            activity_log: load_or(&*storage, &logger, keys::ACTIVITY_LOG, Vec::new()).await,
            app_name: load_or(&*storage, &logger, keys::APP_NAME, options.app_name.clone())
                .await,
            app_logo: load_or(&*storage, &logger, keys::APP_LOGO, None).await,
            theme_color: load_or(&*storage, &logger, keys::THEME_COLOR, None).await,
            pending_deposit: load_or(&*storage, &logger, keys::PENDING_DEPOSIT, None).await,
        };

        let mut seeded_admin = false;
        if data.admin.is_none() {
            match crypto::hash_password(DEFAULT_ADMIN_PASSWORD) {
                Ok(hash) => {
                    data.admin = Some(Admin {
                        id: generate_id(),
                        username: DEFAULT_ADMIN_USERNAME.to_string(),
                        password: hash,
                    });
                    seeded_admin = true;
                }
                Err(e) => logger.error(&format!("could not seed admin account: {e}")),
            }
        }

        let seeded_prizes = data.prizes.is_empty();
        if seeded_prizes {
            data.prizes = default_prize_wheel();
        }

        // A persisted mirror resumes the session it belongs to. Stale
        // mirrors (user since deleted) are ignored.
        let impersonated: Option<User> =
            load_or(&*storage, &logger, keys::LOGIN_AS_USER, None).await;
        let current: Option<User> = load_or(&*storage, &logger, keys::CURRENT_USER, None).await;

        let (session, view) = match (impersonated, current) {
            (Some(u), _) if data.find_user(&u.id).is_some() => {
                (Session::AdminAsUser { user_id: u.id }, View::Home)
            }
            (_, Some(u)) if data.find_user(&u.id).is_some() => {
                (Session::User { user_id: u.id }, View::Home)
            }
            _ => (Session::LoggedOut, View::Login),
        };

        let store = Self {
            runtime: RwLock::new(Runtime {
                data,
                session,
                view,
                otp: OtpVault::new(options.otp_length, options.otp_expires_in),
                sms: SmsChannel::new(options.sms_visible_limit, options.sms_ttl_secs),
            }),
            storage,
            logger,
            options,
        };

        if seeded_admin || seeded_prizes {
            let rt = store.runtime.read().await;
            if seeded_admin {
                store.persist(keys::ADMIN, &rt.data.admin).await;
            }
            if seeded_prizes {
                store.persist(keys::LUCKY_DRAW_PRIZES, &rt.data.prizes).await;
            }
            store.logger.info("seeded first-run admin and prize catalog");
        }

        store
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    // ─── Persistence plumbing ──────────────────────────────────────────

    /// Write one whole collection. Serialization or storage failures are
    /// logged and swallowed; the in-memory state stays authoritative.
    pub(crate) async fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let doc = match serde_json::to_value(value) {
            Ok(doc) => doc,
            Err(e) => {
                self.logger.error(&format!("could not serialize '{key}': {e}"));
                return;
            }
        };
        if let Err(e) = self.storage.set(key, doc).await {
            self.logger.error(&format!("failed to persist '{key}': {e}"));
        }
    }

    pub(crate) async fn discard(&self, key: &str) {
        if let Err(e) = self.storage.remove(key).await {
            self.logger.error(&format!("failed to remove '{key}': {e}"));
        }
    }

    /// Refresh the denormalized copy of whichever user the session is
    /// looking at. Call after any mutation that may touch that user.
    pub(crate) async fn mirror_session_user(&self, rt: &Runtime) {
        match &rt.session {
            Session::User { user_id } => {
                if let Some(user) = rt.data.find_user(user_id) {
                    self.persist(keys::CURRENT_USER, user).await;
                }
            }
            Session::AdminAsUser { user_id } => {
                if let Some(user) = rt.data.find_user(user_id) {
                    self.persist(keys::LOGIN_AS_USER, user).await;
                }
            }
            _ => {}
        }
    }

    /// Append an audit row for an admin mutation and persist the log.
    pub(crate) async fn log_admin_action(&self, rt: &mut Runtime, action: &str, detail: String) {
        rt.data.activity_log.insert(
            0,
            ActivityLogEntry {
                id: uuid::Uuid::new_v4().to_string(),
                action: action.to_string(),
                detail,
                timestamp: Utc::now(),
            },
        );
        self.persist(keys::ACTIVITY_LOG, &rt.data.activity_log).await;
    }

    /// Queue a simulated SMS carrying `body` for `phone`.
    pub(crate) fn dispatch_sms(&self, rt: &mut Runtime, phone: &str, body: String) {
        rt.sms.push(phone, body);
        self.logger.info(&format!("dispatched simulated SMS to {phone}"));
    }

    // ─── Snapshots for screens and tests ───────────────────────────────

    pub async fn session(&self) -> Session {
        self.runtime.read().await.session.clone()
    }

    pub async fn view(&self) -> View {
        self.runtime.read().await.view
    }

    pub async fn navigate(&self, view: View) {
        self.runtime.write().await.view = view;
    }

    /// The user the session is acting as, if any.
    pub async fn active_user(&self) -> Option<User> {
        let rt = self.runtime.read().await;
        rt.session
            .active_user_id()
            .and_then(|id| rt.data.find_user(id))
            .cloned()
    }

    pub async fn user(&self, id: &str) -> Option<User> {
        self.runtime.read().await.data.find_user(id).cloned()
    }

    pub async fn users(&self) -> Vec<User> {
        self.runtime.read().await.data.users.clone()
    }

    pub async fn plans(&self) -> Vec<InvestmentPlan> {
        self.runtime.read().await.data.plans.clone()
    }

    pub async fn prizes(&self) -> Vec<Prize> {
        self.runtime.read().await.data.prizes.clone()
    }

    pub async fn chat_session(&self, user_id: &str) -> Option<ChatSession> {
        self.runtime.read().await.data.chat_for(user_id).cloned()
    }

    pub async fn comments(&self) -> Vec<Comment> {
        self.runtime.read().await.data.comments.clone()
    }

    pub async fn activity_log(&self) -> Vec<ActivityLogEntry> {
        self.runtime.read().await.data.activity_log.clone()
    }

    /// Currently visible SMS notifications; expired ones are pruned here.
    pub async fn visible_sms(&self) -> Vec<SmsNotification> {
        self.runtime.write().await.sms.visible()
    }

    pub async fn dismiss_sms(&self, id: &str) {
        self.runtime.write().await.sms.dismiss(id);
    }
}
