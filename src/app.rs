use crate::components::{BottomNav, HelpOverlay};
use crate::config::Config;
use crate::controller::{FlowController, Intent};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::{self, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ActiveView;
use crate::tui::Tui;
use crate::widgets::{Toast, ToastManager};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long the loop waits for input before ticking timers.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    icons: Icons,
    controller: FlowController,
    /// Controller for the view in `mounted`
    screen: Box<dyn Screen>,
    mounted: ActiveView,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf, skip_splash: bool, now: Instant) -> Self {
        let mut controller = FlowController::new(&config, now);
        if skip_splash {
            controller.apply(Intent::ConfirmSplash, now);
        }
        let mounted = controller.view();
        let screen = screens::mount(mounted, controller.selected_event(), &config.assistant);
        info!(view = ?mounted, "Initial screen mounted");
        Self {
            icons: Icons::from_config(&config),
            config,
            config_path,
            controller,
            screen,
            mounted,
            toasts: ToastManager::new(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &FlowController {
        &self.controller
    }

    pub fn view(&self) -> ActiveView {
        self.mounted
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn current_toast(&self) -> Option<&Toast> {
        self.toasts.current()
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        let now = Instant::now();
        {
            let ctx = ScreenContext::new(&self.config, self.controller.session(), now);
            self.screen.on_enter(&ctx)?;
        }

        let result = self.event_loop(&mut tui);
        tui.exit()?;
        info!("Zwickly exited");
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            let mut rendered = Ok(());
            tui.terminal_mut().draw(|frame| rendered = self.render(frame))?;
            rendered?;

            if self.should_quit {
                return Ok(());
            }

            if let Some(event) = tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(event, Instant::now())?;
            }
            self.tick(Instant::now())?;
        }
    }

    /// Route one terminal event: overlay first, then global shortcuts, then
    /// the mounted screen.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                info!("Ctrl+C received, quitting");
                self.should_quit = true;
                return Ok(());
            }
            if self.show_help {
                self.show_help = false;
                return Ok(());
            }
            if !self.screen.is_input_focused() {
                if let Some(action) = self.config.keymap.action_for(key) {
                    if self.apply_global(action) {
                        return self.sync_view(now);
                    }
                }
            }
        }

        let action = {
            let ctx = ScreenContext::new(&self.config, self.controller.session(), now);
            self.screen.handle_event(event, &ctx)?
        };
        self.dispatch(action, now);
        self.sync_view(now)
    }

    /// Fire due timers everywhere.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if self.controller.tick(now) {
            debug!("Flow timer changed the view");
        }
        let action = self.screen.tick(now);
        self.dispatch(action, now);
        self.toasts.tick(now);
        self.sync_view(now)
    }

    pub fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(
            &self.config,
            self.controller.session(),
            &self.icons,
            self.controller.notification_badge(),
        );

        if self.controller.shows_bottom_nav() {
            let [content, nav] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(BottomNav::HEIGHT)])
                    .areas(area);
            self.screen.render(frame, content, &ctx)?;
            BottomNav::render(
                frame,
                nav,
                self.controller.screen(),
                ctx.notification_badge,
                &self.icons,
            );
        } else {
            self.screen.render(frame, area, &ctx)?;
        }

        self.toasts.render(frame, area);
        if self.show_help {
            HelpOverlay::render(
                frame,
                area,
                &self.config.keymap,
                &self.config_path.display().to_string(),
            );
        }
        Ok(())
    }

    /// Shortcuts that apply on every screen. Returns true if consumed.
    fn apply_global(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                true
            }
            Action::Help => {
                self.show_help = true;
                true
            }
            _ => match action.nav_target() {
                // Tab shortcuts follow the visible navigation bar
                Some(target) if self.controller.shows_bottom_nav() => {
                    self.controller.navigate(target);
                    true
                }
                _ => false,
            },
        }
    }

    fn dispatch(&mut self, action: ScreenAction, now: Instant) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Intent(intent) => {
                debug!(?intent, "Applying intent");
                self.controller.apply(intent, now);
            }
            ScreenAction::ShowToast(toast) => self.toasts.push(toast.created_at(now)),
            ScreenAction::OpenExternal(url) => {
                info!(url, "External link requested");
                self.toasts
                    .push(Toast::info(format!("Opening {}", url)).created_at(now));
            }
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Quit => self.should_quit = true,
        }
    }

    /// Remount the screen controller when the controller's view moved.
    fn sync_view(&mut self, now: Instant) -> Result<()> {
        let view = self.controller.view();
        if view == self.mounted {
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config, self.controller.session(), now);
        self.screen.on_exit(&ctx)?;
        self.screen = screens::mount(
            view,
            self.controller.selected_event(),
            &self.config.assistant,
        );
        self.screen.on_enter(&ctx)?;
        info!(from = ?self.mounted, to = ?view, "Screen mounted");
        self.mounted = view;
        Ok(())
    }
}
