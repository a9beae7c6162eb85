//! Booking screen: service, quantity, pickup schedule and confirmation.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};
use tracing::debug;
use tui_textarea::{CursorMove, TextArea};

use crate::application::OrderConfigurator;
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::entities::SERVICE_FEE;
use crate::domain::{CatalogPort, Screen, Toast};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::ui::ScreenAction;
use crate::presentation::ui::utils::{cursor_marker, naira, panel};

const INSTRUCTIONS_PLACEHOLDER: &str = "Any special instructions for handling your items...";

/// Focusable element of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFocus {
    Service(usize),
    Quantity,
    Date(usize),
    Slot(usize),
    Instructions,
    Confirm,
}

impl BookingFocus {
    const fn section(self) -> usize {
        match self {
            Self::Service(_) => 0,
            Self::Quantity => 1,
            Self::Date(_) => 2,
            Self::Slot(_) => 3,
            Self::Instructions => 4,
            Self::Confirm => 5,
        }
    }

    const fn first_of(section: usize) -> Self {
        match section {
            0 => Self::Service(0),
            1 => Self::Quantity,
            2 => Self::Date(0),
            3 => Self::Slot(0),
            4 => Self::Instructions,
            _ => Self::Confirm,
        }
    }
}

pub struct BookingScreenState {
    configurator: OrderConfigurator,
    focus: BookingFocus,
    instructions: TextArea<'static>,
    editing: bool,
}

impl BookingScreenState {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            configurator: OrderConfigurator::new(catalog),
            focus: BookingFocus::Service(0),
            instructions: TextArea::default(),
            editing: false,
        }
    }

    #[must_use]
    pub const fn configurator(&self) -> &OrderConfigurator {
        &self.configurator
    }

    #[must_use]
    pub const fn focus(&self) -> BookingFocus {
        self.focus
    }

    /// True while keystrokes go to the instructions field.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Discards the draft and returns the form to its initial focus.
    pub fn reset(&mut self) {
        self.configurator.reset();
        self.instructions = TextArea::default();
        self.focus = BookingFocus::Service(0);
        self.editing = false;
    }

    pub fn handle_action(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::Back => ScreenAction::Navigate(Screen::Home),
            Action::NavigateDown => {
                self.focus = self.below(self.focus);
                ScreenAction::None
            }
            Action::NavigateUp => {
                self.focus = self.above(self.focus);
                ScreenAction::None
            }
            Action::NavigateLeft => self.horizontal(-1),
            Action::NavigateRight => self.horizontal(1),
            Action::NextSection => {
                self.focus = BookingFocus::first_of(self.focus.section() + 1);
                ScreenAction::None
            }
            Action::PreviousSection => {
                self.focus = BookingFocus::first_of(self.focus.section().saturating_sub(1));
                ScreenAction::None
            }
            Action::IncreaseQuantity => {
                self.configurator.increment_quantity();
                ScreenAction::None
            }
            Action::DecreaseQuantity => {
                self.configurator.decrement_quantity();
                ScreenAction::None
            }
            Action::EditInstructions => {
                self.focus = BookingFocus::Instructions;
                self.editing = true;
                ScreenAction::None
            }
            Action::BookNow => self.book(),
            Action::Select => self.activate(),
            _ => ScreenAction::None,
        }
    }

    /// Feeds a key to the instructions field while editing.
    ///
    /// Returns `None` when the key was not consumed and should be resolved
    /// through the command registry.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        if !self.editing {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.editing = false;
            }
            KeyCode::Char(c) if !ctrl => self.instructions.insert_char(c),
            KeyCode::Enter => self.instructions.insert_newline(),
            KeyCode::Backspace => {
                self.instructions.delete_char();
            }
            KeyCode::Delete => {
                self.instructions.delete_next_char();
            }
            KeyCode::Left => self.instructions.move_cursor(CursorMove::Back),
            KeyCode::Right => self.instructions.move_cursor(CursorMove::Forward),
            KeyCode::Up => self.instructions.move_cursor(CursorMove::Up),
            KeyCode::Down => self.instructions.move_cursor(CursorMove::Down),
            KeyCode::Home => self.instructions.move_cursor(CursorMove::Head),
            KeyCode::End => self.instructions.move_cursor(CursorMove::End),
            _ => return None,
        }
        self.configurator
            .set_instructions(self.instructions.lines().join("\n"));
        Some(ScreenAction::None)
    }

    fn catalog_len(&self) -> (usize, usize, usize) {
        let catalog = self.configurator.catalog();
        (
            catalog.services().len(),
            catalog.pickup_dates().len(),
            catalog.time_slots().len(),
        )
    }

    fn below(&self, focus: BookingFocus) -> BookingFocus {
        let (services, _, slots) = self.catalog_len();
        match focus {
            BookingFocus::Service(i) if i + 1 < services => BookingFocus::Service(i + 1),
            BookingFocus::Service(_) => BookingFocus::Quantity,
            BookingFocus::Quantity => BookingFocus::Date(0),
            BookingFocus::Date(_) => BookingFocus::Slot(0),
            BookingFocus::Slot(i) if i + 1 < slots => BookingFocus::Slot(i + 1),
            BookingFocus::Slot(_) => BookingFocus::Instructions,
            BookingFocus::Instructions | BookingFocus::Confirm => BookingFocus::Confirm,
        }
    }

    fn above(&self, focus: BookingFocus) -> BookingFocus {
        let (services, _, slots) = self.catalog_len();
        match focus {
            BookingFocus::Service(i) => BookingFocus::Service(i.saturating_sub(1)),
            BookingFocus::Quantity => BookingFocus::Service(services.saturating_sub(1)),
            BookingFocus::Date(_) => BookingFocus::Quantity,
            BookingFocus::Slot(0) => BookingFocus::Date(0),
            BookingFocus::Slot(i) => BookingFocus::Slot(i - 1),
            BookingFocus::Instructions => BookingFocus::Slot(slots.saturating_sub(1)),
            BookingFocus::Confirm => BookingFocus::Instructions,
        }
    }

    fn horizontal(&mut self, delta: isize) -> ScreenAction {
        let (_, dates, _) = self.catalog_len();
        match self.focus {
            BookingFocus::Quantity if delta < 0 => self.configurator.decrement_quantity(),
            BookingFocus::Quantity => self.configurator.increment_quantity(),
            BookingFocus::Date(i) => {
                let next = i.saturating_add_signed(delta).min(dates.saturating_sub(1));
                self.focus = BookingFocus::Date(next);
            }
            _ => {}
        }
        ScreenAction::None
    }

    fn activate(&mut self) -> ScreenAction {
        let result = match self.focus {
            BookingFocus::Service(i) => {
                let id = self
                    .configurator
                    .catalog()
                    .services()
                    .get(i)
                    .map(|s| s.id.as_str().to_string());
                id.map(|id| self.configurator.select_service(&id))
            }
            BookingFocus::Date(i) => {
                let label = self
                    .configurator
                    .catalog()
                    .pickup_dates()
                    .get(i)
                    .map(|d| d.as_str().to_string());
                label.map(|label| self.configurator.set_pickup_date(&label))
            }
            BookingFocus::Slot(i) => {
                let label = self
                    .configurator
                    .catalog()
                    .time_slots()
                    .get(i)
                    .map(|t| t.as_str().to_string());
                label.map(|label| self.configurator.set_pickup_time_slot(&label))
            }
            BookingFocus::Quantity => None,
            BookingFocus::Instructions => {
                self.editing = true;
                None
            }
            BookingFocus::Confirm => return self.book(),
        };

        match result {
            Some(Err(e)) => ScreenAction::Toast(Toast::error("Booking", e.to_string())),
            _ => ScreenAction::None,
        }
    }

    fn book(&mut self) -> ScreenAction {
        match self.configurator.confirm() {
            Ok(order) => {
                self.instructions = TextArea::default();
                self.focus = BookingFocus::Service(0);
                self.editing = false;
                ScreenAction::Booked(Box::new(order))
            }
            Err(e) => {
                debug!(error = %e, "Booking rejected");
                ScreenAction::Toast(Toast::error(
                    "Incomplete booking",
                    "Choose a service, pickup date and time slot",
                ))
            }
        }
    }
}

impl HasCommands for BookingScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        if self.editing {
            return vec![Keybind::new(
                KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                Action::Back,
                "Done",
            )];
        }
        [
            (Action::Select, "Choose"),
            (Action::IncreaseQuantity, "More"),
            (Action::DecreaseQuantity, "Less"),
            (Action::EditInstructions, "Instructions"),
            (Action::BookNow, "Book"),
            (Action::Back, "Back"),
        ]
        .into_iter()
        .filter_map(|(action, label)| registry.keybind(action, label))
        .collect()
    }
}

pub struct BookingScreen<'a> {
    theme: &'a Theme,
}

impl<'a> BookingScreen<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn option_line<'l>(
        &self,
        focused: bool,
        chosen: bool,
        text: impl Into<std::borrow::Cow<'l, str>>,
    ) -> Line<'l> {
        let style = match (focused, chosen) {
            (true, _) => self.theme.selection_style,
            (false, true) => Style::default()
                .fg(self.theme.accent_text)
                .add_modifier(Modifier::BOLD),
            (false, false) => self.theme.base_style,
        };
        Line::from(vec![
            Span::raw(cursor_marker(focused)),
            Span::raw(if chosen { "● " } else { "○ " }),
            Span::styled(text.into(), style),
        ])
    }

    fn render_services(&self, state: &BookingScreenState, area: Rect, buf: &mut Buffer) {
        let focused = matches!(state.focus, BookingFocus::Service(_));
        let draft = state.configurator.draft();
        let lines: Vec<Line> = state
            .configurator
            .catalog()
            .services()
            .iter()
            .enumerate()
            .map(|(i, service)| {
                let chosen = draft.service_id.as_ref() == Some(&service.id);
                self.option_line(
                    state.focus == BookingFocus::Service(i),
                    chosen,
                    format!(
                        "{} {}  {}  {}",
                        service.icon,
                        service.name,
                        service.price_label(),
                        service.description
                    ),
                )
            })
            .collect();
        Paragraph::new(lines)
            .block(panel("Select Service", self.theme, focused))
            .render(area, buf);
    }

    fn render_quantity(&self, state: &BookingScreenState, area: Rect, buf: &mut Buffer) {
        let focused = state.focus == BookingFocus::Quantity;
        let line = state.configurator.selected_service().map_or_else(
            || Line::from(Span::styled("Select a service first", self.theme.dimmed_style)),
            |service| {
                Line::from(vec![
                    Span::raw(cursor_marker(focused)),
                    Span::raw(format!("Number of {}  ", service.unit.plural())),
                    Span::styled("[-]", self.theme.dimmed_style),
                    Span::styled(
                        format!(" {} ", state.configurator.draft().quantity),
                        self.theme.title_style,
                    ),
                    Span::styled("[+]", self.theme.dimmed_style),
                ])
            },
        );
        Paragraph::new(line)
            .block(panel("Quantity", self.theme, focused))
            .render(area, buf);
    }

    fn render_dates(&self, state: &BookingScreenState, area: Rect, buf: &mut Buffer) {
        let focused = matches!(state.focus, BookingFocus::Date(_));
        let chosen = state.configurator.draft().pickup_date.as_ref();
        let mut spans = Vec::new();
        for (i, date) in state.configurator.catalog().pickup_dates().iter().enumerate() {
            let style = if state.focus == BookingFocus::Date(i) {
                self.theme.selection_style
            } else if chosen == Some(date) {
                self.theme.active_tab_style
            } else {
                self.theme.base_style
            };
            spans.push(Span::styled(format!(" 📅 {date} "), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans))
            .block(panel("Pickup Date", self.theme, focused))
            .render(area, buf);
    }

    fn render_slots(&self, state: &BookingScreenState, area: Rect, buf: &mut Buffer) {
        let focused = matches!(state.focus, BookingFocus::Slot(_));
        let chosen = state.configurator.draft().time_slot.as_ref();
        let lines: Vec<Line> = state
            .configurator
            .catalog()
            .time_slots()
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                self.option_line(
                    state.focus == BookingFocus::Slot(i),
                    chosen == Some(slot),
                    slot.as_str(),
                )
            })
            .collect();
        Paragraph::new(lines)
            .block(panel("Pickup Time", self.theme, focused))
            .render(area, buf);
    }

    fn render_address(&self, state: &BookingScreenState, area: Rect, buf: &mut Buffer) {
        let address = state.configurator.catalog().profile().address.clone();
        Paragraph::new(Line::from(vec![Span::raw("📍 "), Span::raw(address)]))
            .wrap(Wrap { trim: true })
            .block(panel("Pickup Address", self.theme, false))
            .render(area, buf);
    }

    fn render_instructions(&self, state: &BookingScreenState, area: Rect, buf: &mut Buffer) {
        let focused = state.focus == BookingFocus::Instructions;
        let title = if state.editing {
            "Special Instructions (editing, Esc to finish)"
        } else {
            "Special Instructions"
        };

        let lines: Vec<Line> = if state.instructions.is_empty() && !state.editing {
            vec![Line::from(Span::styled(
                INSTRUCTIONS_PLACEHOLDER,
                self.theme.dimmed_style,
            ))]
        } else {
            let (cursor_row, cursor_col) = state.instructions.cursor();
            state
                .instructions
                .lines()
                .iter()
                .enumerate()
                .map(|(row, text)| {
                    if !state.editing || row != cursor_row {
                        return Line::from(text.clone());
                    }
                    let before: String = text.chars().take(cursor_col).collect();
                    let at: String = text.chars().nth(cursor_col).map_or(" ".into(), String::from);
                    let after: String = text.chars().skip(cursor_col + 1).collect();
                    Line::from(vec![
                        Span::raw(before),
                        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
                        Span::raw(after),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel(title, self.theme, focused || state.editing))
            .render(area, buf);
    }

    fn render_summary(&self, state: &BookingScreenState, area: Rect, buf: &mut Buffer) {
        let config = &state.configurator;
        let lines = config.selected_service().map_or_else(
            || {
                vec![Line::from(Span::styled(
                    "No service selected",
                    self.theme.dimmed_style,
                ))]
            },
            |service| {
                vec![
                    Line::from(format!(
                        "{} x{}  {}",
                        service.name,
                        config.draft().quantity,
                        naira(config.compute_total())
                    )),
                    Line::from(Span::styled(
                        format!("Service fee  {}", naira(SERVICE_FEE)),
                        self.theme.dimmed_style,
                    )),
                    Line::from(Span::styled(
                        format!("Total  {}", naira(config.compute_total_with_fee())),
                        self.theme.title_style,
                    )),
                ]
            },
        );
        Paragraph::new(lines)
            .block(panel("Order Summary", self.theme, false))
            .render(area, buf);
    }

    fn render_confirm(&self, state: &BookingScreenState, area: Rect, buf: &mut Buffer) {
        let config = &state.configurator;
        let focused = state.focus == BookingFocus::Confirm;
        let style = if !config.can_confirm() {
            self.theme.dimmed_style
        } else if focused {
            self.theme.selection_style
        } else {
            self.theme.active_tab_style
        };
        Paragraph::new(
            Line::from(format!(
                "{}Book Now - {}",
                cursor_marker(focused),
                naira(config.compute_total_with_fee())
            ))
            .centered(),
        )
        .style(style)
        .block(panel("", self.theme, focused))
        .render(area, buf);
    }
}

impl StatefulWidget for BookingScreen<'_> {
    type State = BookingScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let (services, _, slots) = state.catalog_len();
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(area);

        let [service_area, quantity_area, date_area, slot_area] = Layout::vertical([
            Constraint::Length(u16::try_from(services).unwrap_or(4) + 2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(u16::try_from(slots).unwrap_or(6).min(6) + 2),
        ])
        .areas(left);

        let [address_area, instructions_area, summary_area, confirm_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .areas(right);

        self.render_services(state, service_area, buf);
        self.render_quantity(state, quantity_area, buf);
        self.render_dates(state, date_area, buf);
        self.render_slots(state, slot_area, buf);
        self.render_address(state, address_area, buf);
        self.render_instructions(state, instructions_area, buf);
        self.render_summary(state, summary_area, buf);
        self.render_confirm(state, confirm_area, buf);
    }
}
