// Storage key constants. One key per persisted document.

pub const USERS: &str = "users";
pub const CURRENT_USER: &str = "currentUser";
pub const ADMIN: &str = "admin";
pub const INVESTMENT_PLANS: &str = "investmentPlans";
pub const LOGIN_AS_USER: &str = "loginAsUser";
pub const ACTIVITY_LOG: &str = "activityLog";
pub const APP_NAME: &str = "appName";
pub const APP_LOGO: &str = "appLogo";
pub const THEME_COLOR: &str = "themeColor";
pub const COMMENTS: &str = "comments";
pub const CHAT_SESSIONS: &str = "chatSessions";
pub const SOCIAL_LINKS: &str = "socialLinks";
pub const LUCKY_DRAW_PRIZES: &str = "luckyDrawPrizes";
pub const PAYMENT_SETTINGS: &str = "paymentSettings";
pub const PENDING_DEPOSIT: &str = "pendingDeposit";

/// Every key the store persists under, for sweeps and tests.
pub fn all() -> [&'static str; 15] {
    [
        USERS,
        CURRENT_USER,
        ADMIN,
        INVESTMENT_PLANS,
        LOGIN_AS_USER,
        ACTIVITY_LOG,
        APP_NAME,
        APP_LOGO,
        THEME_COLOR,
        COMMENTS,
        CHAT_SESSIONS,
        SOCIAL_LINKS,
        LUCKY_DRAW_PRIZES,
        PAYMENT_SETTINGS,
        PENDING_DEPOSIT,
    ]
}
