// StoreOptions — every tunable the store consults, with the defaults the
// product ships with.

use crate::logger::LoggerConfig;

#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Display name, persisted under `appName`.
    pub app_name: String,
    /// Credited to every new account, recorded as the signup-bonus
    /// transaction.
    pub signup_bonus: f64,
    /// Withdrawals below this amount are rejected.
    pub withdrawal_minimum: f64,
    /// Processing tax shown on withdrawal receipts. Display only; the
    /// balance is debited by the gross amount.
    pub withdrawal_tax_rate: f64,
    /// Digits in a one-time code.
    pub otp_length: usize,
    /// Seconds until a one-time code expires.
    pub otp_expires_in: u64,
    /// Simulated persistence round-trip, in milliseconds.
    pub persistence_latency_ms: u64,
    /// Wheel slot count the admin screen maintains. The resolver does not
    /// enforce this; it draws over whatever the catalog holds.
    pub wheel_slots: usize,
    /// At most this many SMS notifications are visible at once.
    pub sms_visible_limit: usize,
    /// Seconds before an SMS notification auto-dismisses.
    pub sms_ttl_secs: u64,
    pub min_password_length: usize,
    pub logger: LoggerConfig,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            app_name: "WealthDesk".into(),
            signup_bonus: 30.0,
            withdrawal_minimum: 300.0,
            withdrawal_tax_rate: 0.08,
            otp_length: 6,
            otp_expires_in: 5 * 60,
            persistence_latency_ms: 150,
            wheel_slots: 8,
            sms_visible_limit: 3,
            sms_ttl_secs: 15,
            min_password_length: 6,
            logger: LoggerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = StoreOptions::default();
        assert_eq!(opts.signup_bonus, 30.0);
        assert_eq!(opts.withdrawal_minimum, 300.0);
        assert_eq!(opts.withdrawal_tax_rate, 0.08);
        assert_eq!(opts.otp_length, 6);
        assert_eq!(opts.otp_expires_in, 300);
        assert_eq!(opts.persistence_latency_ms, 150);
        assert_eq!(opts.wheel_slots, 8);
        assert_eq!(opts.sms_visible_limit, 3);
        assert_eq!(opts.sms_ttl_secs, 15);
    }
}
