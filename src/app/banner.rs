//! The shared error banner.
//!
//! One banner serves every screen. A new message replaces the previous one
//! and no history is kept.

/// Last error shown to the user, if still visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    /// Makes the banner visible with `message`, replacing any previous one.
    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(message = %message, "showing error");
        self.message = Some(message);
    }

    pub fn hide(&mut self) {
        self.message = None;
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_message_wins() {
        let mut banner = ErrorBanner::default();
        banner.show("first");
        banner.show("second");
        assert_eq!(banner.message(), Some("second"));
        banner.hide();
        assert!(!banner.is_visible());
    }
}
