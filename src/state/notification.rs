//! Error Banner State
//!
//! A single message with an expiry timestamp. Anything reading it passes the
//! current time, so an expired message is never shown even if the clearing
//! timer is late.

use std::time::Duration;

/// Milliseconds since the Unix epoch, as reported by `Date.now()`
pub type Millis = u64;

#[cfg(target_arch = "wasm32")]
pub fn now() -> Millis {
    js_sys::Date::now() as Millis
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> Millis {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
struct Active {
    message: String,
    expires_at: Millis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    ttl: Duration,
    active: Option<Active>,
}

impl Notification {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, active: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Show `message`, replacing whatever was there and restarting the clock
    pub fn show(&mut self, message: impl Into<String>, now: Millis) {
        let ttl = u64::try_from(self.ttl.as_millis()).unwrap_or(u64::MAX);
        self.active = Some(Active {
            message: message.into(),
            expires_at: now.saturating_add(ttl),
        });
    }

    pub fn current(&self, now: Millis) -> Option<&str> {
        self.active
            .as_ref()
            .filter(|a| now < a.expires_at)
            .map(|a| a.message.as_str())
    }

    /// Milliseconds until the active message expires, `Some(0)` once it is due
    pub fn time_left(&self, now: Millis) -> Option<Millis> {
        self.active.as_ref().map(|a| a.expires_at.saturating_sub(now))
    }

    /// Drop the message once its time is up. Returns true if one was dropped.
    pub fn clear_expired(&mut self, now: Millis) -> bool {
        let expired = self.active.as_ref().is_some_and(|a| now >= a.expires_at);
        if expired {
            self.active = None;
        }
        expired
    }

    pub fn dismiss(&mut self) {
        self.active = None;
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::new(crate::config::NOTIFICATION_TTL)
    }
}
