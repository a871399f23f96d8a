#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Reminder,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
    pub timestamp: &'static str,
    pub kind: NotificationKind,
    pub read: bool,
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "New event approved",
            message: "Your event \"React Workshop\" has been approved and is now live! 🎉",
            timestamp: "5 minutes ago",
            kind: NotificationKind::Success,
            read: false,
        },
        Notification {
            id: 2,
            title: "Survey Request",
            message: "Please rate your experience with the Web Development course",
            timestamp: "1 hour ago",
            kind: NotificationKind::Info,
            read: false,
        },
        Notification {
            id: 3,
            title: "Exam Reminder",
            message: "Data Structures exam tomorrow at 10:00 AM in Room 204",
            timestamp: "2 hours ago",
            kind: NotificationKind::Reminder,
            read: false,
        },
        Notification {
            id: 4,
            title: "Event Starting Soon",
            message: "Career Fair starts in 30 minutes at Main Hall",
            timestamp: "3 hours ago",
            kind: NotificationKind::Reminder,
            read: true,
        },
        Notification {
            id: 5,
            title: "New Social Post",
            message: "Sarah Chen mentioned you in a post on the Social Wall",
            timestamp: "5 hours ago",
            kind: NotificationKind::Message,
            read: true,
        },
        Notification {
            id: 6,
            title: "Mensa Menu Updated",
            message: "Today's special: Free desserts with any main course! 🍰",
            timestamp: "1 day ago",
            kind: NotificationKind::Info,
            read: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_unread() {
        assert_eq!(unread_count(&sample_notifications()), 3);
    }
}
