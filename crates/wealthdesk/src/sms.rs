// Simulated SMS side channel. Codes are delivered as in-memory
// notifications: at most a handful visible at once, each auto-dismissed a
// few seconds after issue. Expired entries are pruned on access rather than
// by a background task.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct SmsNotification {
    pub id: String,
    pub phone: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SmsChannel {
    queue: VecDeque<SmsNotification>,
    visible_limit: usize,
    ttl: Duration,
}

impl SmsChannel {
    pub fn new(visible_limit: usize, ttl_secs: u64) -> Self {
        Self {
            queue: VecDeque::new(),
            visible_limit,
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Queue a notification. When the queue is full the oldest one is
    /// dropped to make room.
    pub fn push(&mut self, phone: &str, body: String) {
        self.push_at(phone, body, Utc::now());
    }

    pub fn push_at(&mut self, phone: &str, body: String, now: DateTime<Utc>) {
        self.prune(now);
        while self.queue.len() >= self.visible_limit {
            self.queue.pop_front();
        }
        self.queue.push_back(SmsNotification {
            id: uuid::Uuid::new_v4().to_string(),
            phone: phone.to_string(),
            body,
            sent_at: now,
        });
    }

    /// The currently visible notifications, oldest first.
    pub fn visible(&mut self) -> Vec<SmsNotification> {
        self.visible_at(Utc::now())
    }

    pub fn visible_at(&mut self, now: DateTime<Utc>) -> Vec<SmsNotification> {
        self.prune(now);
        self.queue.iter().cloned().collect()
    }

    /// Dismiss one notification by id.
    pub fn dismiss(&mut self, id: &str) {
        self.queue.retain(|n| n.id != id);
    }

    fn prune(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.queue.retain(|n| now - n.sent_at < ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read() {
        let mut sms = SmsChannel::new(3, 15);
        sms.push("+911111111111", "Your code is 123456".into());
        let visible = sms.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].phone, "+911111111111");
    }

    #[test]
    fn test_visible_limit_drops_oldest() {
        let now = Utc::now();
        let mut sms = SmsChannel::new(3, 15);
        for i in 0..4 {
            sms.push_at("+91", format!("code {i}"), now);
        }
        let visible = sms.visible_at(now);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].body, "code 1");
        assert_eq!(visible[2].body, "code 3");
    }

    #[test]
    fn test_auto_dismiss_after_ttl() {
        let now = Utc::now();
        let mut sms = SmsChannel::new(3, 15);
        sms.push_at("+91", "stale".into(), now);
        sms.push_at("+91", "fresh".into(), now + Duration::seconds(10));

        let later = now + Duration::seconds(16);
        let visible = sms.visible_at(later);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].body, "fresh");
    }

    #[test]
    fn test_manual_dismiss() {
        let mut sms = SmsChannel::new(3, 15);
        sms.push("+91", "one".into());
        sms.push("+91", "two".into());
        let id = sms.visible()[0].id.clone();
        sms.dismiss(&id);
        let visible = sms.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].body, "two");
    }
}
