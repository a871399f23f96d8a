//! Screen controllers, one per view.
//!
//! Each controller implements [`Screen`], owns its local state and reports
//! what should happen next as a [`ScreenAction`]. The app mounts a fresh
//! controller through [`mount`] whenever the active view changes.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ App                                          │
//! │   view = controller.view()                   │
//! │   if view changed: screen = mount(view, ..)  │
//! │   screen.handle_event(..) -> ScreenAction    │
//! │     Intent     -> controller.apply           │
//! │     ShowToast  -> toasts.push                │
//! └──────────────────────────────────────────────┘
//! ```

pub mod assistant;
pub mod dashboard;
pub mod event_details;
pub mod events;
pub mod login;
pub mod menu_schedule;
pub mod notifications;
pub mod onboarding;
pub mod profile;
pub mod screen_trait;
pub mod social;
pub mod splash;

pub use assistant::AssistantScreen;
pub use dashboard::DashboardScreen;
pub use event_details::EventDetailsScreen;
pub use events::EventsScreen;
pub use login::LoginScreen;
pub use menu_schedule::MenuScheduleScreen;
pub use notifications::NotificationsScreen;
pub use onboarding::OnboardingScreen;
pub use profile::ProfileScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use social::SocialScreen;
pub use splash::SplashScreen;

use crate::assistant::Assistant;
use crate::config::AssistantConfig;
use crate::state::{ActiveView, EventId, Screen as ScreenId};

/// Build the controller for `view`.
///
/// Event details without a selection cannot be reached through the flow
/// controller; should it happen anyway the details card reports the event as
/// missing.
pub fn mount(
    view: ActiveView,
    selected_event: Option<EventId>,
    assistant: &AssistantConfig,
) -> Box<dyn Screen> {
    match view {
        ActiveView::Splash => Box::new(SplashScreen::new()),
        ActiveView::Onboarding => Box::new(OnboardingScreen::new()),
        ActiveView::Login => Box::new(LoginScreen::new()),
        ActiveView::Main(screen) => match screen {
            ScreenId::Dashboard => Box::new(DashboardScreen::new()),
            ScreenId::Events => Box::new(EventsScreen::new()),
            ScreenId::EventDetails => Box::new(EventDetailsScreen::new(selected_event)),
            ScreenId::Social => Box::new(SocialScreen::new()),
            ScreenId::Assistant => Box::new(AssistantScreen::new(Assistant::new(assistant))),
            ScreenId::MenuSchedule => Box::new(MenuScheduleScreen::new()),
            ScreenId::Notifications => Box::new(NotificationsScreen::new()),
            ScreenId::Profile => Box::new(ProfileScreen::new()),
        },
    }
}
