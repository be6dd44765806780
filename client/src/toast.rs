use std::sync::Mutex;
use std::time::Duration;

use crate::ports::{Level, Notification, Notifier};

/// Keeps at most one notification on screen.
pub struct Toaster {
    notifier: Box<dyn Notifier>,
    duration: Duration,
    current: Mutex<Option<Notification>>,
}

impl Toaster {
    pub fn new(notifier: Box<dyn Notifier>, duration: Duration) -> Self {
        Self {
            notifier,
            duration,
            current: Mutex::new(None),
        }
    }

    pub fn success(&self, title: impl Into<String>) {
        self.notify(Level::Success, title, None);
    }

    pub fn info(&self, title: impl Into<String>) {
        self.notify(Level::Info, title, None);
    }

    pub fn warning(&self, title: impl Into<String>) {
        self.notify(Level::Warning, title, None);
    }

    pub fn notify(&self, level: Level, title: impl Into<String>, detail: Option<String>) {
        let title = title.into();
        let notification = Notification {
            level,
            title,
            detail,
            duration: self.duration,
        };
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = current.take() {
            self.notifier.clear(&previous);
        }
        self.notifier.show(&notification);
        *current = Some(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Default)]
    struct Screen {
        visible: Mutex<Vec<Notification>>,
    }

    impl Notifier for Arc<Screen> {
        fn show(&self, notification: &Notification) {
            self.visible.lock().unwrap().push(notification.clone());
        }

        fn clear(&self, notification: &Notification) {
            self.visible.lock().unwrap().retain(|n| n != notification);
        }
    }

    #[test]
    fn test_new_notification_replaces_previous() {
        let screen = Arc::new(Screen::default());
        let toaster = Toaster::new(Box::new(Arc::clone(&screen)), Duration::from_millis(3000));

        toaster.success("Job saved successfully!");
        toaster.notify(Level::Error, "Server Error", Some("boom".into()));

        let visible = screen.visible.lock().unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].level, Level::Error);
        assert_eq!(visible[0].detail.as_deref(), Some("boom"));
        assert_eq!(visible[0].duration, Duration::from_secs(3));
    }
}
