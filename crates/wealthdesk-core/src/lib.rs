//! Core types for the WealthDesk application store: entity models, the
//! storage seam, error codes, configuration and logging.

pub mod db;
pub mod error;
pub mod logger;
pub mod options;
pub mod utils;

// Re-exports for convenience
pub use db::keys;
pub use db::models::{
    ActivityLogEntry, Admin, BankAccount, ChatMessage, ChatRole, ChatSession, Comment,
    Investment, InvestmentPlan, LoginActivity, PaymentSettings, PendingDeposit, Prize,
    PrizeKind, SocialLinks, Transaction, TransactionKind, User,
};
pub use db::storage::{Storage, StorageError};
pub use error::{ErrorCode, Result, StatusResponse, StoreError};
pub use logger::{AppLogger, LogHandler, LogLevel, LoggerConfig};
pub use options::StoreOptions;
