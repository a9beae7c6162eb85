use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warn,
    Error,
}

/// Transient message shown in the corner of the shell.
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
    pub shown_at: Option<Instant>,
    pub duration: Duration,
}

impl Toast {
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(4);

    #[must_use]
    pub fn new(level: ToastLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            shown_at: None,
            duration: Self::DEFAULT_DURATION,
        }
    }

    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, title, message)
    }

    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, title, message)
    }

    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, title, message)
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Expiry is measured from the first time the toast was displayed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.shown_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    pub fn mark_shown(&mut self) {
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_not_expired_before_shown() {
        let toast = Toast::info("Title", "Message").with_duration(Duration::ZERO);
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_toast_expiry() {
        let mut toast =
            Toast::success("Booked", "Order ZW003 confirmed").with_duration(Duration::from_nanos(1));
        toast.mark_shown();
        std::thread::sleep(Duration::from_millis(1));
        assert!(toast.is_expired());
        assert_eq!(toast.level, ToastLevel::Success);
    }
}
