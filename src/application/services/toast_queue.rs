use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::Toast;

/// FIFO of toasts; only the front one is displayed.
#[derive(Debug)]
pub struct ToastQueue {
    queue: VecDeque<Toast>,
    duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Toast::DEFAULT_DURATION)
    }
}

impl ToastQueue {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            duration,
        }
    }

    /// Queues a toast using the configured display duration.
    pub fn push(&mut self, toast: Toast) {
        self.queue.push_back(toast.with_duration(self.duration));
    }

    /// Drops the front toast once it has expired.
    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_shown();
            if front.is_expired() {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_shown();
                }
            }
        }
    }

    /// Dismisses the current toast immediately.
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.queue.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_push_applies_configured_duration() {
        let mut queue = ToastQueue::new(Duration::from_secs(9));
        queue.push(Toast::info("Info", "Test message"));

        assert_eq!(queue.current().unwrap().duration, Duration::from_secs(9));
        queue.tick();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_expired_toast_advances_queue() {
        let mut queue = ToastQueue::default();
        queue.push(Toast::info("1", "First"));
        queue.push(Toast::info("2", "Second"));

        queue.tick();
        queue.queue.front_mut().unwrap().shown_at =
            Some(Instant::now().checked_sub(Duration::from_secs(60)).unwrap());
        queue.tick();

        let second = queue.current().unwrap();
        assert_eq!(second.title, "2");
        assert!(second.shown_at.unwrap().elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        queue.push(Toast::error("Oops", "Something"));
        queue.dismiss();
        assert!(queue.is_empty());
    }
}
