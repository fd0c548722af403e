// Session state machine.
//
// Four states: LoggedOut, User, Admin, AdminAsUser. Impersonation keeps the
// admin session alive while swapping the active user context, so a user
// logout while impersonating lands back on Admin, not LoggedOut.

use wealthdesk_core::error::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    LoggedOut,
    /// A member logged in directly.
    User { user_id: String },
    /// The admin console, no user context.
    Admin,
    /// Admin viewing the app as a specific member.
    AdminAsUser { user_id: String },
}

impl Session {
    /// The member id whose data the current screens operate on, if any.
    pub fn active_user_id(&self) -> Option<&str> {
        match self {
            Session::User { user_id } | Session::AdminAsUser { user_id } => Some(user_id),
            _ => None,
        }
    }

    /// True for Admin and AdminAsUser: the admin session is still alive.
    pub fn is_admin(&self) -> bool {
        matches!(self, Session::Admin | Session::AdminAsUser { .. })
    }

    pub fn is_impersonating(&self) -> bool {
        matches!(self, Session::AdminAsUser { .. })
    }

    /// Member login.
    pub fn user_login(user_id: String) -> Self {
        Session::User { user_id }
    }

    /// Admin console login.
    pub fn admin_login() -> Self {
        Session::Admin
    }

    /// Swap into a member's context without dropping the admin session.
    pub fn impersonate(&self, user_id: String) -> Result<Self, ErrorCode> {
        if self.is_admin() {
            Ok(Session::AdminAsUser { user_id })
        } else {
            Err(ErrorCode::AdminSessionRequired)
        }
    }

    /// Leave the impersonated context, back to the admin console.
    pub fn return_to_admin(&self) -> Result<Self, ErrorCode> {
        match self {
            Session::AdminAsUser { .. } => Ok(Session::Admin),
            _ => Err(ErrorCode::NotImpersonating),
        }
    }

    /// Log out of the current context. While impersonating this ends only
    /// the user context; the admin session survives.
    pub fn logout(&self) -> Self {
        match self {
            Session::AdminAsUser { .. } => Session::Admin,
            _ => Session::LoggedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_logout_ends_session() {
        let s = Session::user_login("ID:111111".into());
        assert_eq!(s.active_user_id(), Some("ID:111111"));
        assert_eq!(s.logout(), Session::LoggedOut);
    }

    #[test]
    fn test_impersonation_round_trip() {
        let s = Session::admin_login();
        let s = s.impersonate("ID:222222".into()).unwrap();
        assert!(s.is_admin());
        assert!(s.is_impersonating());
        assert_eq!(s.active_user_id(), Some("ID:222222"));
        assert_eq!(s.return_to_admin().unwrap(), Session::Admin);
    }

    #[test]
    fn test_logout_while_impersonating_returns_to_admin() {
        let s = Session::admin_login().impersonate("ID:333333".into()).unwrap();
        assert_eq!(s.logout(), Session::Admin);
    }

    #[test]
    fn test_admin_logout_ends_session() {
        assert_eq!(Session::admin_login().logout(), Session::LoggedOut);
    }

    #[test]
    fn test_user_cannot_impersonate() {
        let s = Session::user_login("ID:444444".into());
        assert_eq!(
            s.impersonate("ID:555555".into()),
            Err(ErrorCode::AdminSessionRequired)
        );
    }

    #[test]
    fn test_return_to_admin_requires_impersonation() {
        assert_eq!(
            Session::Admin.return_to_admin(),
            Err(ErrorCode::NotImpersonating)
        );
        assert_eq!(
            Session::LoggedOut.return_to_admin(),
            Err(ErrorCode::NotImpersonating)
        );
    }

    #[test]
    fn test_switching_impersonation_target() {
        let s = Session::admin_login().impersonate("ID:1".into()).unwrap();
        let s = s.impersonate("ID:2".into()).unwrap();
        assert_eq!(s.active_user_id(), Some("ID:2"));
    }
}
