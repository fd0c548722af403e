//! The WealthDesk application store.
//!
//! A single source of truth for users, plans, prizes, chats and settings,
//! persisted wholesale through a pluggable [`Storage`](wealthdesk_core::Storage)
//! backend. Screens call the typed operations in [`ops`] and render the
//! [`StatusResponse`](wealthdesk_core::StatusResponse) they collapse to;
//! nothing here throws across the UI boundary.

pub mod crypto;
pub mod ops;
pub mod otp;
pub mod session;
pub mod sms;
pub mod state;
pub mod store;
pub mod view;

pub use otp::{OtpPurpose, OtpVault};
pub use session::Session;
pub use sms::{SmsChannel, SmsNotification};
pub use store::AppStore;
pub use view::View;

// The core crate is the vocabulary of every operation.
pub use wealthdesk_core::{ErrorCode, Result, StatusResponse, StoreError, StoreOptions};
