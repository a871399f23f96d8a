//! Compiled-in sample data.
//!
//! Every screen starts from a fresh copy of these collections when it is
//! mounted; nothing here is ever written back.

pub mod campus;
pub mod dashboard;
pub mod events;
pub mod intro;
pub mod notifications;
pub mod posts;

pub use campus::{ClassKind, ClassSession, Diet, MenuItem};
pub use dashboard::{CarouselItem, Link, QuickAction, RecentUpdate, UserProfile};
pub use events::{Event, EventCategory, EventDetails};
pub use intro::Slide;
pub use notifications::{Notification, NotificationKind};
pub use posts::Post;

/// Community channel behind "Social Wall" and "15 New Posts".
pub const SOCIAL_WALL_URL: &str = "https://app.slack.com/client/T09P1CYEF4G/C09N47EK70T";
