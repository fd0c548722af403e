// The in-memory mirror of every persisted collection. The store is the only
// writer; screens read through snapshots.

use wealthdesk_core::db::models::{
    ActivityLogEntry, Admin, ChatSession, Comment, InvestmentPlan, PaymentSettings,
    PendingDeposit, Prize, SocialLinks, User,
};

#[derive(Debug, Default)]
pub struct AppState {
    pub users: Vec<User>,
    pub admin: Option<Admin>,
    pub plans: Vec<InvestmentPlan>,
    pub prizes: Vec<Prize>,
    pub chats: Vec<ChatSession>,
    pub comments: Vec<Comment>,
    pub social_links: SocialLinks,
    pub payment_settings: PaymentSettings,
    pub activity_log: Vec<ActivityLogEntry>,
    pub app_name: String,
    pub app_logo: Option<String>,
    pub theme_color: Option<String>,
    pub pending_deposit: Option<PendingDeposit>,
}

impl AppState {
    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn find_user_by_phone(&self, phone: &str) -> Option<&User> {
        self.users.iter().find(|u| u.phone == phone)
    }

    /// Match a login identifier against phone first, then id.
    pub fn find_user_by_identifier(&self, identifier: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.phone == identifier || u.id == identifier)
    }

    pub fn find_plan(&self, id: &str) -> Option<&InvestmentPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn chat_for(&self, user_id: &str) -> Option<&ChatSession> {
        self.chats.iter().find(|c| c.user_id == user_id)
    }

    /// The user's chat session, created lazily on first use.
    pub fn chat_for_mut(&mut self, user_id: &str) -> &mut ChatSession {
        if let Some(idx) = self.chats.iter().position(|c| c.user_id == user_id) {
            &mut self.chats[idx]
        } else {
            self.chats.push(ChatSession::new(user_id.to_string()));
            self.chats.last_mut().expect("just pushed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, phone: &str) -> User {
        User::new(id.into(), phone.into(), "h".into(), "n".into())
    }

    #[test]
    fn test_identifier_matches_phone_or_id() {
        let mut state = AppState::default();
        state.users.push(user("ID:111111", "+911111111111"));

        assert!(state.find_user_by_identifier("+911111111111").is_some());
        assert!(state.find_user_by_identifier("ID:111111").is_some());
        assert!(state.find_user_by_identifier("ID:999999").is_none());
    }

    #[test]
    fn test_chat_created_lazily_once() {
        let mut state = AppState::default();
        state.chat_for_mut("ID:1").user_unread_count = 2;
        state.chat_for_mut("ID:1").admin_unread_count = 1;
        assert_eq!(state.chats.len(), 1);
        assert_eq!(state.chats[0].user_unread_count, 2);
        assert_eq!(state.chats[0].admin_unread_count, 1);
    }
}
