// Store operations, one module per screen cluster. Every mutation follows
// the same shape: validate, apply against in-memory state under the write
// lock, persist the affected collection(s), mirror the active user.

pub mod admin;
pub mod chat;
pub mod funds;
pub mod invest;
pub mod lucky_draw;
pub mod password;
pub mod profile;
pub mod register;
pub mod settings;
pub mod sign_in;

use wealthdesk_core::db::models::{Transaction, TransactionKind};
use wealthdesk_core::error::{ErrorCode, StoreError};

use crate::store::Runtime;

/// The member id the session is acting as, or a rejection when no user
/// context is active.
pub(crate) fn require_active_user(rt: &Runtime) -> Result<String, StoreError> {
    rt.session
        .active_user_id()
        .map(str::to_string)
        .ok_or_else(|| ErrorCode::SessionRequired.into())
}

/// Reject unless the admin session is alive (console or impersonating).
pub(crate) fn require_admin(rt: &Runtime) -> Result<(), StoreError> {
    if rt.session.is_admin() {
        Ok(())
    } else {
        Err(ErrorCode::AdminSessionRequired.into())
    }
}

pub(crate) fn transaction(kind: TransactionKind, amount: f64, description: String) -> Transaction {
    Transaction::new(uuid::Uuid::new_v4().to_string(), kind, amount, description)
}
