//! Shared helpers for driving the app without a terminal.
//!
//! `TestApp` wraps [`App`] with a manual clock so timers fire exactly when a
//! test says so, and renders into a ratatui `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use zwickly::config::Config;
use zwickly::{ActiveView, App};

pub struct TestApp {
    pub app: App,
    pub now: Instant,
}

impl TestApp {
    pub fn new(config: Config) -> Self {
        let now = Instant::now();
        Self {
            app: App::new(config, PathBuf::from("config.toml"), false, now),
            now,
        }
    }

    /// Default config with ASCII icons so rendered text is predictable.
    pub fn with_defaults() -> Self {
        Self::new(ascii_config())
    }

    pub fn view(&self) -> ActiveView {
        self.app.view()
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        self.app.tick(self.now).unwrap();
    }

    pub fn press(&mut self, code: KeyCode) {
        self.send(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn send(&mut self, key: KeyEvent) {
        self.app.handle_event(Event::Key(key), self.now).unwrap();
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Splash -> onboarding -> login -> Student dashboard.
    pub fn login_as_student(&mut self) {
        self.press(KeyCode::Enter);
        self.press(KeyCode::Char('s'));
        self.type_text("antman@student.whz.de");
        self.press(KeyCode::Enter);
        self.press(KeyCode::Enter);
    }

    /// Render a frame and return it as one string per row.
    pub fn screen_text(&mut self, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| self.app.render(frame).unwrap())
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    pub fn screen_contains(&mut self, needle: &str) -> bool {
        self.screen_text(100, 40).iter().any(|row| row.contains(needle))
    }
}

pub fn ascii_config() -> Config {
    Config {
        icons: "ascii".to_string(),
        ..Config::default()
    }
}
