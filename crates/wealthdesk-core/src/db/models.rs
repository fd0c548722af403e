// Entity models for every persisted collection. Each collection is written
// to storage as one whole JSON document, so these types are the wire format:
// camelCase keys, timestamps as ISO-8601 strings via chrono.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered member. Owns its investments, transaction feed, login
/// activity and check-in history; nothing else holds a strong reference to
/// them beyond the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// `ID:` followed by six random digits.
    pub id: String,
    pub phone: String,
    /// scrypt hash, `hex(salt):hex(key)`.
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub balance: f64,
    pub total_returns: f64,
    pub recharge_amount: f64,
    pub withdrawals: f64,
    /// Blocked users keep their data but cannot log in.
    pub is_active: bool,
    pub investments: Vec<Investment>,
    /// Newest first. Entries are never deleted.
    pub transactions: Vec<Transaction>,
    pub login_activity: Vec<LoginActivity>,
    pub daily_check_ins: Vec<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
    /// Secondary scrypt-hashed password gating financial actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_password: Option<String>,
    pub lucky_draw_chances: u32,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: String, phone: String, password_hash: String, name: String) -> Self {
        Self {
            id,
            phone,
            password: password_hash,
            name,
            email: None,
            balance: 0.0,
            total_returns: 0.0,
            recharge_amount: 0.0,
            withdrawals: 0.0,
            is_active: true,
            investments: Vec::new(),
            transactions: Vec::new(),
            login_activity: Vec::new(),
            daily_check_ins: Vec::new(),
            bank_account: None,
            fund_password: None,
            lucky_draw_chances: 0,
            created_at: Utc::now(),
        }
    }

    /// Prepend a transaction so the feed stays newest-first.
    pub fn push_transaction(&mut self, tx: Transaction) {
        self.transactions.insert(0, tx);
    }
}

/// Per-(user, plan) holding. Repeat purchases of the same plan fold into
/// this one row instead of creating another.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub plan_id: String,
    pub plan_name: String,
    pub quantity: u32,
    pub invested_amount: f64,
    pub daily_earnings: f64,
    pub total_revenue: f64,
    pub started_at: DateTime<Utc>,
}

/// Transaction categories surfaced in the bill feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    SignupBonus,
    SignInReward,
    Deposit,
    Withdrawal,
    Investment,
    LuckyDraw,
    CheckIn,
    /// Zero-amount broadcast used purely to deliver a notification
    /// through the feed.
    System,
}

/// Append-only feed entry. `read` is the only field that ever mutates,
/// flipped in bulk by the mark-as-read operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}

impl Transaction {
    pub fn new(id: String, kind: TransactionKind, amount: f64, description: String) -> Self {
        Self {
            id,
            kind,
            amount,
            description,
            date: Utc::now(),
            read: false,
        }
    }
}

/// One row per successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginActivity {
    pub timestamp: DateTime<Utc>,
    pub device: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub holder_name: String,
    pub bank_name: String,
    pub account_number: String,
}

/// Catalog entry owned by the admin. Investments reference it by id only;
/// editing or deleting a plan never touches existing holdings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPlan {
    pub id: String,
    pub name: String,
    pub min_investment: f64,
    /// Per-unit payout per day.
    pub daily_return: f64,
    /// Plan duration in days.
    pub duration: u32,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrizeKind {
    Money,
    Bonus,
    Physical,
    Nothing,
}

impl PrizeKind {
    /// Whether winning this prize credits the user's balance.
    pub fn pays_out(&self) -> bool {
        matches!(self, Self::Money | Self::Bonus)
    }
}

/// Wheel slot. The admin screen keeps the catalog at eight entries; the
/// resolver draws uniformly over whatever is actually present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PrizeKind,
    pub amount: f64,
}

/// Which side of the support chat is acting. Always passed explicitly;
/// never inferred from ambient session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Admin,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// One session per user, created lazily on the first message. The two
/// unread counters move independently: sending increments the counter of
/// the party that did NOT send.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub user_id: String,
    pub messages: Vec<ChatMessage>,
    pub user_unread_count: u32,
    pub admin_unread_count: u32,
}

impl ChatSession {
    pub fn new(user_id: String) -> Self {
        Self {
            user_id,
            messages: Vec::new(),
            user_unread_count: 0,
            admin_unread_count: 0,
        }
    }
}

/// The single admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub username: String,
    /// scrypt hash, same format as user passwords.
    pub password: String,
}

/// Testimonial shown on the landing screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Audit row appended for every admin mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: String,
    pub action: String,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

/// A deposit submitted by a user and awaiting admin confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDeposit {
    pub user_id: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}
