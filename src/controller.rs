//! Application flow controller.
//!
//! Owns the [`SessionState`] and the splash auto-advance timer, and is the
//! only place either is mutated. Every transition is total: an intent that
//! does not apply to the current stage is ignored and logged.

use crate::config::Config;
use crate::scheduler::{Scheduler, TimerId};
use crate::state::{ActiveView, EventId, FlowStage, Screen, SessionState, UserRole};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Requests a screen can make of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ConfirmSplash,
    CompleteOnboarding,
    Login(UserRole),
    Logout,
    Navigate(Screen),
    SelectEvent(EventId),
    /// Leave event details
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowTimer {
    SplashAdvance,
}

pub struct FlowController {
    session: SessionState,
    timers: Scheduler<FlowTimer>,
    splash_timer: Option<TimerId>,
    splash_delay: Duration,
    notification_badge: u32,
}

impl FlowController {
    /// Start at Splash with the auto-advance timer armed relative to `now`.
    pub fn new(config: &Config, now: Instant) -> Self {
        let mut controller = Self {
            session: SessionState::new(),
            timers: Scheduler::new(),
            splash_timer: None,
            splash_delay: config.splash_delay(),
            notification_badge: config.notification_badge,
        };
        controller.arm_splash_timer(now);
        controller
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn stage(&self) -> FlowStage {
        self.session.stage()
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn selected_event(&self) -> Option<EventId> {
        self.session.selected_event()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.role()
    }

    pub fn view(&self) -> ActiveView {
        self.session.view()
    }

    /// Bottom navigation is drawn on every main screen except event details.
    pub fn shows_bottom_nav(&self) -> bool {
        self.stage() == FlowStage::Main && self.screen().shows_bottom_nav()
    }

    /// Configured constant; not derived from notification state.
    pub fn notification_badge(&self) -> u32 {
        self.notification_badge
    }

    pub fn splash_timer_pending(&self) -> bool {
        self.splash_timer.is_some_and(|id| self.timers.is_pending(id))
    }

    /// Splash -> Onboarding, cancelling the pending auto-advance.
    pub fn confirm_splash(&mut self) {
        if !self.expect_stage(FlowStage::Splash, "confirm splash") {
            return;
        }
        self.leave_splash();
        info!("Splash confirmed, entering onboarding");
    }

    /// Onboarding -> Login.
    pub fn complete_onboarding(&mut self) {
        if !self.expect_stage(FlowStage::Onboarding, "complete onboarding") {
            return;
        }
        self.session.set_stage(FlowStage::Login);
        info!("Onboarding complete, entering login");
    }

    /// Login -> Main with `role`, landing on the dashboard.
    pub fn login(&mut self, role: UserRole) {
        if !self.expect_stage(FlowStage::Login, "login") {
            return;
        }
        self.session.set_role(role);
        self.session.set_screen(Screen::Dashboard);
        self.session.set_stage(FlowStage::Main);
        info!(role = %role, "Logged in");
    }

    /// Main -> Splash. Clears the session and re-arms the splash timer.
    pub fn logout(&mut self, now: Instant) {
        if !self.expect_stage(FlowStage::Main, "logout") {
            return;
        }
        self.session.reset();
        self.arm_splash_timer(now);
        info!("Logged out, back to splash");
    }

    /// Flat screen switch inside Main.
    ///
    /// EventDetails is only accepted when an event has been selected before.
    pub fn navigate(&mut self, screen: Screen) {
        if !self.expect_stage(FlowStage::Main, "navigate") {
            return;
        }
        if screen == Screen::EventDetails && self.session.selected_event().is_none() {
            warn!("Refusing to open event details without a selected event");
            return;
        }
        if screen != self.session.screen() {
            debug!(from = %self.session.screen(), to = %screen, "Navigate");
        }
        self.session.set_screen(screen);
    }

    /// Open event details for `id`.
    pub fn select_event(&mut self, id: EventId) {
        if !self.expect_stage(FlowStage::Main, "select event") {
            return;
        }
        self.session.set_selected_event(id);
        self.session.set_screen(Screen::EventDetails);
        debug!(event_id = id, "Event selected");
    }

    /// Always returns to the events list, wherever details were opened from.
    pub fn back_from_event_details(&mut self) {
        if !self.expect_stage(FlowStage::Main, "back") {
            return;
        }
        if self.session.screen() != Screen::EventDetails {
            debug!(screen = %self.session.screen(), "Back ignored outside event details");
            return;
        }
        self.session.set_screen(Screen::Events);
    }

    pub fn apply(&mut self, intent: Intent, now: Instant) {
        match intent {
            Intent::ConfirmSplash => self.confirm_splash(),
            Intent::CompleteOnboarding => self.complete_onboarding(),
            Intent::Login(role) => self.login(role),
            Intent::Logout => self.logout(now),
            Intent::Navigate(screen) => self.navigate(screen),
            Intent::SelectEvent(id) => self.select_event(id),
            Intent::Back => self.back_from_event_details(),
        }
    }

    /// Fire due timers. Returns true when the visible view changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.view();
        for (id, timer) in self.timers.due(now) {
            match timer {
                FlowTimer::SplashAdvance => {
                    if self.splash_timer != Some(id) || self.stage() != FlowStage::Splash {
                        debug!("Stale splash timer dropped");
                        continue;
                    }
                    self.leave_splash();
                    info!("Splash timed out, entering onboarding");
                }
            }
        }
        self.view() != before
    }

    fn arm_splash_timer(&mut self, now: Instant) {
        if let Some(old) = self.splash_timer.take() {
            self.timers.cancel(old);
        }
        let id = self
            .timers
            .schedule_in(now, self.splash_delay, FlowTimer::SplashAdvance);
        self.splash_timer = Some(id);
        debug!(delay_ms = self.splash_delay.as_millis() as u64, "Splash timer armed");
    }

    fn leave_splash(&mut self) {
        if let Some(id) = self.splash_timer.take() {
            self.timers.cancel(id);
        }
        self.session.set_stage(FlowStage::Onboarding);
    }

    fn expect_stage(&self, stage: FlowStage, what: &str) -> bool {
        if self.stage() == stage {
            true
        } else {
            debug!(stage = self.stage().name(), "Ignoring {} outside {}", what, stage.name());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> (FlowController, Instant) {
        let now = Instant::now();
        (FlowController::new(&Config::default(), now), now)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn logged_in(role: UserRole) -> (FlowController, Instant) {
        let (mut c, now) = controller();
        c.confirm_splash();
        c.complete_onboarding();
        c.login(role);
        (c, now)
    }

    #[test]
    fn test_initial_state() {
        let (c, _) = controller();
        assert_eq!(c.stage(), FlowStage::Splash);
        assert_eq!(c.screen(), Screen::Dashboard);
        assert_eq!(c.role(), None);
        assert_eq!(c.selected_event(), None);
        assert!(c.splash_timer_pending());
        assert!(!c.shows_bottom_nav());
    }

    #[test]
    fn test_splash_auto_advances_after_delay() {
        let (mut c, now) = controller();
        assert!(!c.tick(now + ms(1999)));
        assert_eq!(c.stage(), FlowStage::Splash);

        assert!(c.tick(now + ms(2000)));
        assert_eq!(c.stage(), FlowStage::Onboarding);
        assert!(!c.splash_timer_pending());
    }

    #[test]
    fn test_confirm_cancels_splash_timer() {
        let (mut c, now) = controller();
        c.confirm_splash();
        assert_eq!(c.stage(), FlowStage::Onboarding);
        assert!(!c.splash_timer_pending());

        c.complete_onboarding();
        assert!(!c.tick(now + ms(5000)));
        assert_eq!(c.stage(), FlowStage::Login);
    }

    #[test]
    fn test_intents_for_other_stages_are_ignored() {
        let (mut c, now) = controller();
        c.login(UserRole::Admin);
        c.complete_onboarding();
        c.navigate(Screen::Social);
        c.select_event(1);
        c.logout(now);
        assert_eq!(c.stage(), FlowStage::Splash);
        assert_eq!(c.role(), None);
        assert_eq!(c.selected_event(), None);
    }

    #[test]
    fn test_login_lands_on_dashboard() {
        let (c, _) = logged_in(UserRole::Student);
        assert_eq!(c.view(), ActiveView::Main(Screen::Dashboard));
        assert_eq!(c.role(), Some(UserRole::Student));
        assert!(c.shows_bottom_nav());
    }

    #[test]
    fn test_event_details_requires_selection() {
        let (mut c, _) = logged_in(UserRole::Student);
        c.navigate(Screen::EventDetails);
        assert_eq!(c.screen(), Screen::Dashboard);

        c.select_event(3);
        assert_eq!(c.screen(), Screen::EventDetails);
        assert_eq!(c.selected_event(), Some(3));
        assert!(!c.shows_bottom_nav());
    }

    #[test]
    fn test_back_always_goes_to_events() {
        let (mut c, _) = logged_in(UserRole::Student);
        c.navigate(Screen::Profile);
        c.select_event(2);
        c.back_from_event_details();
        assert_eq!(c.screen(), Screen::Events);
        // Selection survives leaving details
        assert_eq!(c.selected_event(), Some(2));
    }

    #[test]
    fn test_back_outside_details_is_ignored() {
        let (mut c, _) = logged_in(UserRole::Student);
        c.navigate(Screen::Social);
        c.back_from_event_details();
        assert_eq!(c.screen(), Screen::Social);
    }

    #[test]
    fn test_logout_resets_and_rearms_splash() {
        let (mut c, now) = logged_in(UserRole::Admin);
        c.select_event(5);
        let later = now + ms(10_000);
        c.logout(later);

        assert_eq!(c.stage(), FlowStage::Splash);
        assert_eq!(c.screen(), Screen::Dashboard);
        assert_eq!(c.role(), None);
        assert_eq!(c.selected_event(), None);
        assert!(c.splash_timer_pending());

        assert!(!c.tick(later + ms(1999)));
        assert!(c.tick(later + ms(2000)));
        assert_eq!(c.stage(), FlowStage::Onboarding);
    }

    #[test]
    fn test_apply_routes_intents() {
        let (mut c, now) = controller();
        for intent in [
            Intent::ConfirmSplash,
            Intent::CompleteOnboarding,
            Intent::Login(UserRole::AssistantMode),
            Intent::Navigate(Screen::Events),
            Intent::SelectEvent(1),
        ] {
            c.apply(intent, now);
        }
        assert_eq!(c.view(), ActiveView::Main(Screen::EventDetails));
        c.apply(Intent::Back, now);
        assert_eq!(c.view(), ActiveView::Main(Screen::Events));
        c.apply(Intent::Logout, now);
        assert_eq!(c.view(), ActiveView::Splash);
    }

    #[test]
    fn test_badge_is_configured_constant() {
        let mut config = Config::default();
        config.notification_badge = 7;
        let c = FlowController::new(&config, Instant::now());
        assert_eq!(c.notification_badge(), 7);
    }
}
