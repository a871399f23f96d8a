mod common;

use common::TestApp;
use crossterm::event::KeyCode;
use zwickly::{ActiveView, FlowStage, Screen, UserRole};

#[test]
fn test_splash_times_out_into_login_and_dashboard() {
    let mut t = TestApp::with_defaults();
    assert_eq!(t.view(), ActiveView::Splash);

    t.advance(1999);
    assert_eq!(t.view(), ActiveView::Splash);
    t.advance(1);
    assert_eq!(t.view(), ActiveView::Onboarding);

    t.press(KeyCode::Char('s'));
    assert_eq!(t.view(), ActiveView::Login);

    t.type_text("antman@student.whz.de");
    t.press(KeyCode::Enter);
    t.press(KeyCode::Enter);
    assert_eq!(t.view(), ActiveView::Main(Screen::Dashboard));
    assert_eq!(t.app.controller().role(), Some(UserRole::Student));
}

#[test]
fn test_get_started_cancels_splash_timer() {
    let mut t = TestApp::with_defaults();
    t.press(KeyCode::Enter);
    assert_eq!(t.view(), ActiveView::Onboarding);
    assert!(!t.app.controller().splash_timer_pending());

    // The old deadline passing changes nothing
    t.advance(5000);
    assert_eq!(t.view(), ActiveView::Onboarding);
}

#[test]
fn test_onboarding_walks_all_slides() {
    let mut t = TestApp::with_defaults();
    t.press(KeyCode::Enter);
    for _ in 0..2 {
        t.press(KeyCode::Enter);
        assert_eq!(t.view(), ActiveView::Onboarding);
    }
    t.press(KeyCode::Enter);
    assert_eq!(t.view(), ActiveView::Login);
}

#[test]
fn test_typing_shortcut_keys_into_email() {
    let mut t = TestApp::with_defaults();
    t.press(KeyCode::Enter);
    t.press(KeyCode::Char('s'));

    // 'q', '?' and digits are text while the email field has focus
    t.type_text("q?2@x.de");
    assert!(!t.app.should_quit());
    assert!(!t.app.is_help_visible());
    assert_eq!(t.view(), ActiveView::Login);
    assert!(t.screen_contains("q?2@x.de"));
}

#[test]
fn test_logout_from_any_screen_resets_session() {
    for tab in ['1', '2', '3', '4', '5', 'n'] {
        let mut t = TestApp::with_defaults();
        t.login_as_student();
        t.press(KeyCode::Char(tab));
        if t.view() == ActiveView::Main(Screen::Assistant) {
            // Leave the chat input so tab keys are shortcuts again
            t.press(KeyCode::Esc);
        }
        t.press(KeyCode::Char('5'));
        assert_eq!(t.view(), ActiveView::Main(Screen::Profile));

        t.press(KeyCode::End);
        t.press(KeyCode::Enter);
        assert_eq!(t.view(), ActiveView::Splash, "logout after tab {tab}");
        let controller = t.app.controller();
        assert_eq!(controller.stage(), FlowStage::Splash);
        assert_eq!(controller.screen(), Screen::Dashboard);
        assert_eq!(controller.role(), None);
        assert_eq!(controller.selected_event(), None);

        // Logout re-arms the splash timer
        assert!(controller.splash_timer_pending());
        t.advance(2000);
        assert_eq!(t.view(), ActiveView::Onboarding);
    }
}

#[test]
fn test_event_details_and_back() {
    let mut t = TestApp::with_defaults();
    t.login_as_student();
    t.press(KeyCode::Char('2'));
    assert_eq!(t.view(), ActiveView::Main(Screen::Events));

    t.press(KeyCode::Down);
    t.press(KeyCode::Enter);
    assert_eq!(t.view(), ActiveView::Main(Screen::EventDetails));
    let selected = t.app.controller().selected_event();
    assert!(selected.is_some());

    // No bottom navigation on the details page
    let rows = t.screen_text(80, 40);
    assert!(!rows[38..].iter().any(|row| row.contains("Home")));

    t.press(KeyCode::Esc);
    assert_eq!(t.view(), ActiveView::Main(Screen::Events));
    // Selection survives leaving details
    assert_eq!(t.app.controller().selected_event(), selected);
}

#[test]
fn test_tab_keys_ignored_on_event_details() {
    let mut t = TestApp::with_defaults();
    t.login_as_student();
    t.press(KeyCode::Char('2'));
    t.press(KeyCode::Enter);
    assert_eq!(t.view(), ActiveView::Main(Screen::EventDetails));

    for tab in ['1', '3', '4', '5', 'n'] {
        t.press(KeyCode::Char(tab));
        assert_eq!(
            t.view(),
            ActiveView::Main(Screen::EventDetails),
            "tab key {tab} on details"
        );
    }

    // Back is the only way out
    t.press(KeyCode::Esc);
    assert_eq!(t.view(), ActiveView::Main(Screen::Events));
}

#[test]
fn test_quit_and_help() {
    let mut t = TestApp::with_defaults();
    t.login_as_student();
    t.press(KeyCode::Char('?'));
    assert!(t.app.is_help_visible());
    assert!(t.screen_contains("Keyboard Shortcuts"));

    t.press(KeyCode::Char('q'));
    assert!(!t.app.should_quit(), "first key only closes help");
    t.press(KeyCode::Char('q'));
    assert!(t.app.should_quit());
}
