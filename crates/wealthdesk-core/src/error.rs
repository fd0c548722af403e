// Stable error codes for every store operation, plus the result object
// handed across the UI boundary. Operations reject with a code; nothing in
// the store panics or throws past this module.

use std::fmt;

use serde::{Deserialize, Serialize};

/// All rejection codes a store operation can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    PhoneAlreadyRegistered,
    InvalidPhoneNumber,
    PasswordTooShort,
    OtpNotFound,
    OtpExpired,
    InvalidOtp,
    InvalidCredentials,
    AccountBlocked,
    SessionRequired,
    AdminSessionRequired,
    NotImpersonating,
    UserNotFound,
    PlanNotFound,
    PrizeNotFound,
    CommentNotFound,
    InvalidAmount,
    InsufficientBalance,
    NoBankAccount,
    BelowWithdrawalMinimum,
    AmountExceedsBalance,
    NoPendingDeposit,
    NoLuckyDrawChances,
    EmptyPrizeCatalog,
    AlreadyCheckedInToday,
    WrongPassword,
    WrongFundPassword,
    FundPasswordNotSet,
    EmptyMessage,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::PhoneAlreadyRegistered => "Phone number is already registered",
            Self::InvalidPhoneNumber => "Invalid phone number",
            Self::PasswordTooShort => "Password is too short",
            Self::OtpNotFound => "No verification code was requested",
            Self::OtpExpired => "Verification code has expired",
            Self::InvalidOtp => "Invalid verification code",
            Self::InvalidCredentials => "Invalid phone, ID or password",
            Self::AccountBlocked => "This account has been blocked",
            Self::SessionRequired => "No active user session",
            Self::AdminSessionRequired => "Admin session required",
            Self::NotImpersonating => "Not currently viewing as a user",
            Self::UserNotFound => "User not found",
            Self::PlanNotFound => "Investment plan not found",
            Self::PrizeNotFound => "Prize not found",
            Self::CommentNotFound => "Comment not found",
            Self::InvalidAmount => "Amount must be greater than zero",
            Self::InsufficientBalance => "Insufficient balance",
            Self::NoBankAccount => "No bank account on file",
            Self::BelowWithdrawalMinimum => "Amount is below the withdrawal minimum",
            Self::AmountExceedsBalance => "Amount exceeds available balance",
            Self::NoPendingDeposit => "No deposit is awaiting confirmation",
            Self::NoLuckyDrawChances => "No lucky draw chances left",
            Self::EmptyPrizeCatalog => "No prizes are configured",
            Self::AlreadyCheckedInToday => "Already checked in today",
            Self::WrongPassword => "Current password is incorrect",
            Self::WrongFundPassword => "Fund password is incorrect",
            Self::FundPasswordNotSet => "Fund password has not been set",
            Self::EmptyMessage => "Message cannot be empty",
        };
        write!(f, "{msg}")
    }
}

/// Store-level error. Operation rejections carry an [`ErrorCode`]; the other
/// variants cover infrastructure failures that the store logs and absorbs
/// rather than surfacing to screens.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Rejected(ErrorCode),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl From<ErrorCode> for StoreError {
    fn from(code: ErrorCode) -> Self {
        Self::Rejected(code)
    }
}

impl StoreError {
    /// The rejection code, if this is a validation/authorization rejection.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Rejected(code) => Some(*code),
            _ => None,
        }
    }
}

/// Unified result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// The `{success, message}` object screens render as a toast. Errors are
/// carried in the message; they are never thrown across the UI boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn ok_with(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    /// Collapse an operation result into the toast object.
    pub fn from_result<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_message() {
        assert_eq!(
            ErrorCode::NoBankAccount.to_string(),
            "No bank account on file"
        );
        assert_eq!(
            ErrorCode::NoLuckyDrawChances.to_string(),
            "No lucky draw chances left"
        );
    }

    #[test]
    fn test_error_code_serializes_screaming() {
        let v = serde_json::to_value(ErrorCode::PhoneAlreadyRegistered).unwrap();
        assert_eq!(v, "PHONE_ALREADY_REGISTERED");
    }

    #[test]
    fn test_rejected_carries_code() {
        let err: StoreError = ErrorCode::InvalidOtp.into();
        assert_eq!(err.code(), Some(ErrorCode::InvalidOtp));
        assert_eq!(err.to_string(), "Invalid verification code");
    }

    #[test]
    fn test_infrastructure_error_has_no_code() {
        let err = StoreError::Storage("disk gone".into());
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_status_response_from_result() {
        let ok: Result<u32> = Ok(7);
        let resp = StatusResponse::from_result(&ok);
        assert!(resp.success);
        assert!(resp.message.is_none());

        let err: Result<u32> = Err(ErrorCode::AccountBlocked.into());
        let resp = StatusResponse::from_result(&err);
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("This account has been blocked"));
    }

    #[test]
    fn test_status_response_serializes_camel() {
        let resp = StatusResponse::failure("nope");
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["success"], false);
        assert_eq!(v["message"], "nope");
    }
}
