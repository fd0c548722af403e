// One-time codes, keyed by purpose plus phone or user id.
//
// Each purpose holds an independent map; issuing overwrites any pending code
// for the same key, and a code is gone after its first successful consume.
// An expired record is deleted the moment a consume trips over it.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use subtle::ConstantTimeEq;

use wealthdesk_core::error::ErrorCode;
use wealthdesk_core::utils::id::generate_digits;

/// What a code was issued for. Codes never cross purposes: a registration
/// code cannot confirm a bank update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtpPurpose {
    Registration,
    BankUpdate,
    FundPassword,
    PasswordReset,
}

#[derive(Debug, Clone)]
pub struct OtpRecord {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

/// Pending one-time codes for all purposes.
#[derive(Debug)]
pub struct OtpVault {
    pending: HashMap<(OtpPurpose, String), OtpRecord>,
    code_length: usize,
    expires_in: Duration,
}

impl OtpVault {
    pub fn new(code_length: usize, expires_in_secs: u64) -> Self {
        Self {
            pending: HashMap::new(),
            code_length,
            expires_in: Duration::seconds(expires_in_secs as i64),
        }
    }

    /// Issue a fresh code for `(purpose, key)`, overwriting any pending one.
    /// Returns the code for delivery over the SMS channel.
    pub fn issue(&mut self, purpose: OtpPurpose, key: &str) -> String {
        self.issue_at(purpose, key, Utc::now())
    }

    pub fn issue_at(&mut self, purpose: OtpPurpose, key: &str, now: DateTime<Utc>) -> String {
        let code = generate_digits(self.code_length);
        self.pending.insert(
            (purpose, key.to_string()),
            OtpRecord {
                code: code.clone(),
                expires_at: now + self.expires_in,
            },
        );
        code
    }

    /// Consume the pending code for `(purpose, key)`. Fails closed: a
    /// missing record, an expired record or a mismatched code all reject.
    /// On success — and on expiry detection — the record is deleted.
    pub fn consume(&mut self, purpose: OtpPurpose, key: &str, code: &str) -> Result<(), ErrorCode> {
        self.consume_at(purpose, key, code, Utc::now())
    }

    pub fn consume_at(
        &mut self,
        purpose: OtpPurpose,
        key: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ErrorCode> {
        let slot = (purpose, key.to_string());
        let record = self.pending.get(&slot).ok_or(ErrorCode::OtpNotFound)?;

        if now >= record.expires_at {
            self.pending.remove(&slot);
            return Err(ErrorCode::OtpExpired);
        }

        let matches: bool = record.code.as_bytes().ct_eq(code.as_bytes()).into();
        if !matches {
            return Err(ErrorCode::InvalidOtp);
        }

        self.pending.remove(&slot);
        Ok(())
    }

    /// Whether a code is pending for `(purpose, key)`, expired or not.
    pub fn has_pending(&self, purpose: OtpPurpose, key: &str) -> bool {
        self.pending.contains_key(&(purpose, key.to_string()))
    }
}
