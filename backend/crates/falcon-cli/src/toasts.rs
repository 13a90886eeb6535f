use falcon_auth::{Notification, NotificationLevel, Notifier};

/// Prints notifications to the terminal: successes on stdout, errors on stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn format(notification: &Notification) -> String {
        match notification.level {
            NotificationLevel::Success => format!("✓ {}", notification.message),
            NotificationLevel::Error => format!("✗ {}", notification.message),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = Self::format(&notification);
        match notification.level {
            NotificationLevel::Success => println!("{line}"),
            NotificationLevel::Error => eprintln!("{line}"),
        }
    }
}
