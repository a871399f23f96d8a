//! Dashboard content and the signed-in user card.

use super::SOCIAL_WALL_URL;
use crate::state::Screen;

/// Where a dashboard tile leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Screen(Screen),
    External(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselItem {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub link: Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentUpdate {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub is_new: bool,
    pub link: Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub student_id: &'static str,
}

pub const GREETING: &str = "Good Morning,";
pub const TODAY: &str = "Friday, October 24, 2025";
/// Label next to "Recent Updates"; fixed, not counted.
pub const RECENT_UPDATES_BADGE: &str = "3 New";

pub const USER: UserProfile = UserProfile {
    name: "Antman",
    email: "antman@student.whz.de",
    student_id: "252035",
};

pub fn carousel() -> Vec<CarouselItem> {
    vec![
        CarouselItem {
            title: "Mensa Menu",
            description: "Free desserts today! 🍰",
        },
        CarouselItem {
            title: "Career Fair",
            description: "Today at 5 PM in Main Hall",
        },
        CarouselItem {
            title: "Campus News",
            description: "New EV lab inaugurated",
        },
    ]
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            label: "Timetable",
            link: Link::Screen(Screen::MenuSchedule),
        },
        QuickAction {
            label: "Social Wall",
            link: Link::External(SOCIAL_WALL_URL),
        },
        QuickAction {
            label: "Ask Pixi",
            link: Link::Screen(Screen::Assistant),
        },
        QuickAction {
            label: "My Space",
            link: Link::Screen(Screen::Events),
        },
    ]
}

pub fn recent_updates() -> Vec<RecentUpdate> {
    vec![
        RecentUpdate {
            title: "Tech Workshop Tomorrow",
            subtitle: "React & AI Development - 2:00 PM",
            is_new: true,
            link: Link::Screen(Screen::Events),
        },
        RecentUpdate {
            title: "15 New Posts",
            subtitle: "Check out the latest from your community",
            is_new: false,
            link: Link::External(SOCIAL_WALL_URL),
        },
        RecentUpdate {
            title: "Today's Special Menu",
            subtitle: "Vegetarian options available",
            is_new: false,
            link: Link::Screen(Screen::MenuSchedule),
        },
    ]
}
