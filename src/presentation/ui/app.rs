//! Main application orchestrator.

use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, Timelike};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, MouseButton,
    MouseEvent, MouseEventKind,
};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::{ScreenRouter, ToastQueue};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{CatalogPort, Screen, Toast};
use crate::infrastructure::AppConfig;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::naira;
use crate::presentation::ui::{
    BookingScreen, BookingScreenState, HelpPopup, HomeScreen, HomeScreenState, ProfileScreen,
    ProfileScreenState, ScreenAction, TrackingScreen, TrackingScreenState, WalletScreen,
    WalletScreenState,
};
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, TabBar, ToastPopup,
};

const TICK_RATE: Duration = Duration::from_millis(250);
const APP_TITLE: &str = "Zap Wash";
const BATTERY_PERCENT: u8 = 100;
const PROFILE_ALERTS: u32 = 3;

pub struct App {
    router: ScreenRouter,
    registry: CommandRegistry,
    theme: Theme,
    toasts: ToastQueue,
    show_help: bool,
    show_clock: bool,
    clock_format: String,
    mouse: bool,
    tab_bar_area: Rect,
    should_quit: bool,
    home: HomeScreenState,
    booking: BookingScreenState,
    tracking: TrackingScreenState,
    wallet: WalletScreenState,
    profile: ProfileScreenState,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig, catalog: Arc<dyn CatalogPort>) -> Self {
        let mut router = ScreenRouter::new();
        if let Some(start) = &config.start_screen {
            router.navigate_to(start);
        }

        let mut app = Self {
            router,
            registry: CommandRegistry::new(),
            theme: Theme::from_config(&config.theme),
            toasts: ToastQueue::new(Duration::from_secs(config.ui.notification_duration)),
            show_help: false,
            show_clock: config.ui.show_clock,
            clock_format: config.ui.clock_format.clone(),
            mouse: config.mouse,
            tab_bar_area: Rect::default(),
            should_quit: false,
            home: HomeScreenState::new(catalog.clone()),
            booking: BookingScreenState::new(catalog.clone()),
            tracking: TrackingScreenState::new(catalog.clone()),
            wallet: WalletScreenState::new(catalog.clone()),
            profile: ProfileScreenState::new(catalog),
        };
        app.tick();
        app
    }

    #[must_use]
    pub const fn current_screen(&self) -> Screen {
        self.router.current()
    }

    /// # Errors
    /// Returns error if the terminal cannot be drawn or mouse capture fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if self.mouse {
            crossterm::execute!(stdout(), EnableMouseCapture)?;
        }

        let result = self.run_event_loop(terminal).await;

        if self.mouse {
            crossterm::execute!(stdout(), DisableMouseCapture)?;
        }
        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.should_quit {
            tokio::select! {
                Some(event) = terminal_events.next() => {
                    match event {
                        Ok(event) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.should_quit = true;
                            }
                        }
                        Err(e) => warn!(error = %e, "Failed to read terminal event"),
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = tick_interval.tick() => {
                    self.tick();
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn tick(&mut self) {
        self.toasts.tick();
        let now = Local::now();
        self.home.set_hour(now.hour());
        self.wallet
            .set_date_label(format!("Today, {}", now.format("%-I:%M %p")));
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            Event::Mouse(mouse) if self.mouse => self.handle_mouse(mouse),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit(&key) {
            return EventResult::Exit;
        }

        if self.show_help {
            let closes = key.code == KeyCode::Esc
                || self.registry.find_action(key) == Some(Action::ToggleHelp);
            if closes {
                self.show_help = false;
            }
            return EventResult::Consumed;
        }

        let consumed = match self.router.current() {
            Screen::Booking => self.booking.handle_key(key),
            Screen::Wallet => self.wallet.handle_key(key),
            Screen::Home | Screen::Tracking | Screen::Profile => None,
        };
        if let Some(result) = consumed {
            self.apply(result);
            return EventResult::Consumed;
        }

        match self.registry.find_action(key) {
            Some(action) => self.handle_action(action),
            None => EventResult::Continue,
        }
    }

    fn handle_action(&mut self, action: Action) -> EventResult {
        debug!(?action, screen = %self.router.current(), "Action");
        match action {
            Action::Quit => return EventResult::Exit,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::NextTab => self.change_screen(ScreenRouter::next_tab),
            Action::PreviousTab => self.change_screen(ScreenRouter::previous_tab),
            Action::GoHome => self.navigate(Screen::Home),
            Action::GoBooking => self.navigate(Screen::Booking),
            Action::GoWallet => self.navigate(Screen::Wallet),
            Action::GoProfile => self.navigate(Screen::Profile),
            other => {
                let result = match self.router.current() {
                    Screen::Home => self.home.handle_action(other),
                    Screen::Booking => self.booking.handle_action(other),
                    Screen::Tracking => self.tracking.handle_action(other),
                    Screen::Wallet => self.wallet.handle_action(other),
                    Screen::Profile => self.profile.handle_action(other),
                };
                if result.is_none() {
                    return EventResult::Continue;
                }
                self.apply(result);
            }
        }
        EventResult::Consumed
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Continue;
        }
        let area = self.tab_bar_area;
        if area.width == 0 || !area.contains(Position::new(mouse.column, mouse.row)) {
            // Clicking anywhere else closes the visible toast.
            if self.toasts.is_empty() {
                return EventResult::Continue;
            }
            self.toasts.dismiss();
            return EventResult::Consumed;
        }

        let offset = usize::from(mouse.column - area.x);
        let index = offset * Screen::TABS.len() / usize::from(area.width);
        if let Some(screen) = Screen::TABS.get(index) {
            self.navigate(*screen);
        }
        EventResult::Consumed
    }

    fn apply(&mut self, result: ScreenAction) {
        match result {
            ScreenAction::None => {}
            ScreenAction::Navigate(screen) => self.navigate(screen),
            ScreenAction::Toast(toast) => self.toasts.push(toast),
            ScreenAction::Booked(order) => {
                self.home.add_order(&order);
                self.toasts.push(Toast::success(
                    "Booking confirmed",
                    format!("Order #{} · {}", order.reference, naira(order.total)),
                ));
                self.tracking.set_latest_booking(*order);
                self.navigate(Screen::Tracking);
            }
        }
    }

    fn navigate(&mut self, screen: Screen) {
        self.change_screen(|router| router.navigate(screen));
    }

    /// Runs a router transition; leaving the booking screen discards its draft.
    fn change_screen(&mut self, transition: impl FnOnce(&mut ScreenRouter)) {
        let previous = self.router.current();
        transition(&mut self.router);
        let current = self.router.current();

        if previous == Screen::Booking && current != Screen::Booking {
            debug!("Booking draft discarded");
            self.booking.reset();
        }
    }

    fn profile_badge(&self) -> Option<u32> {
        self.profile
            .push_notifications()
            .then_some(PROFILE_ALERTS)
    }

    fn global_commands(&self) -> Vec<Keybind> {
        [
            (Action::Quit, "Quit"),
            (Action::ToggleHelp, "Help"),
            (Action::NextTab, "Next Tab"),
            (Action::PreviousTab, "Previous Tab"),
            (Action::GoHome, "Home"),
            (Action::GoBooking, "Book"),
            (Action::GoWallet, "Wallet"),
            (Action::GoProfile, "Profile"),
        ]
        .into_iter()
        .filter_map(|(action, label)| self.registry.keybind(action, label))
        .collect()
    }

    fn screen_commands(&self) -> Vec<Keybind> {
        match self.router.current() {
            Screen::Home => self.home.get_commands(&self.registry),
            Screen::Booking => self.booking.get_commands(&self.registry),
            Screen::Tracking => self.tracking.get_commands(&self.registry),
            Screen::Wallet => self.wallet.get_commands(&self.registry),
            Screen::Profile => self.profile.get_commands(&self.registry),
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header, title, body, tabs, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let clock = self
            .show_clock
            .then(|| Local::now().format(&self.clock_format).to_string());
        frame.render_widget(
            HeaderBar::new(APP_TITLE)
                .clock(clock.as_deref())
                .battery(BATTERY_PERCENT)
                .style(HeaderBarStyle::from_theme(&self.theme)),
            header,
        );

        let screen = self.router.current();
        let mut title_spans = Vec::new();
        if screen != Screen::Home {
            title_spans.push(Span::styled("← Esc  ", self.theme.dimmed_style));
        }
        title_spans.push(Span::styled(screen.title(), self.theme.title_style));
        frame.render_widget(Paragraph::new(Line::from(title_spans)), title);

        self.render_screen(frame, body);

        self.tab_bar_area = tabs;
        frame.render_widget(
            TabBar::new(screen, &self.theme).profile_badge(self.profile_badge()),
            tabs,
        );

        // The title row already shows the Esc hint.
        let mut bindings: Vec<Keybind> = self
            .screen_commands()
            .into_iter()
            .map(|k| if k.action == Action::Back { k.hidden() } else { k })
            .collect();
        bindings.extend(self.registry.keybind(Action::ToggleHelp, "Help"));
        frame.render_widget(
            FooterBar::new(&bindings)
                .context(screen.tab_label())
                .style(FooterBarStyle::from_theme(&self.theme)),
            footer,
        );

        if let Some(toast) = self.toasts.current() {
            frame.render_widget(ToastPopup::new(toast, &self.theme), frame.area());
        }

        if self.show_help {
            let global = self.global_commands();
            let local = self.screen_commands();
            frame.render_widget(
                HelpPopup::new(&global, &local, screen.title(), &self.theme),
                frame.area(),
            );
        }
    }

    fn render_screen(&mut self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        match self.router.current() {
            Screen::Home => {
                frame.render_stateful_widget(HomeScreen::new(theme), area, &mut self.home);
            }
            Screen::Booking => {
                frame.render_stateful_widget(BookingScreen::new(theme), area, &mut self.booking);
            }
            Screen::Tracking => {
                frame.render_stateful_widget(
                    TrackingScreen::new(theme),
                    area,
                    &mut self.tracking,
                );
            }
            Screen::Wallet => {
                frame.render_stateful_widget(WalletScreen::new(theme), area, &mut self.wallet);
            }
            Screen::Profile => {
                frame.render_stateful_widget(ProfileScreen::new(theme), area, &mut self.profile);
            }
        }
    }
}
