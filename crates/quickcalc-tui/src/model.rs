//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use quickcalc_core::constants::TAPE_CAPACITY;
use quickcalc_core::{Action, Controller, Focus, Mode};

use crate::footer::render_footer;
use crate::header::{render_header, toggle_rect};
use crate::keymap::{map_key, KeyAction};
use crate::keypad::{button_at, compute_panel_layout, render_standard};
use crate::menu::{self, menu_rect, render_menu};
use crate::messages::TuiMessage;
use crate::percent_panel::{compute_percent_layout, hit_test, render_percent, PercentHit};
use crate::styles::ColorTheme;
use crate::tape::{render_tape, TapeScrollState};

/// Lines moved by PgUp/PgDn in the tape.
const PAGE_SIZE: usize = 10;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// The calculator widget being driven.
    pub controller: Controller,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Completed computations and log lines, oldest first.
    pub tape: Vec<String>,
    /// Tape scroll position.
    pub tape_scroll: TapeScrollState,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    theme: ColorTheme,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create a new TUI app around `controller`.
    ///
    /// `rx` receives messages from a `TuiBridgeObserver` registered on the
    /// same controller.
    #[must_use]
    pub fn new(controller: Controller, rx: Receiver<TuiMessage>) -> Self {
        Self {
            controller,
            should_quit: false,
            tape: Vec::new(),
            tape_scroll: TapeScrollState::new(),
            terminal_width: 80,
            terminal_height: 24,
            theme: ColorTheme::default(),
            rx,
        }
    }

    /// Full screen area as last reported by the terminal.
    #[must_use]
    pub fn screen(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Tape(line) => self.push_tape(line),
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Click { column, row } => self.handle_click(column, row),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Tick => {}
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    fn push_tape(&mut self, line: String) {
        self.tape.push(line);
        if self.tape.len() > TAPE_CAPACITY {
            self.tape.remove(0);
            self.tape_scroll.on_line_dropped();
        }
        self.tape_scroll.on_new_line(self.tape.len());
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Calc(action) => {
                self.controller.dispatch(action);
            }
            KeyAction::ToggleMenu => {
                self.controller.dispatch(Action::ToggleMenu);
            }
            KeyAction::MenuUp => {
                self.controller.move_menu_highlight(-1);
            }
            KeyAction::MenuDown => {
                self.controller.move_menu_highlight(1);
            }
            KeyAction::MenuSelect => {
                self.controller.select_highlighted();
            }
            KeyAction::MenuPick(mode) => {
                self.controller.dispatch(Action::SelectMode(mode));
            }
            KeyAction::Escape => {
                self.controller.dispatch(Action::Escape);
            }
            KeyAction::FieldChar(c) => self.edit_field(|text| text.push(c)),
            KeyAction::FieldBackspace => self.edit_field(|text| {
                text.pop();
            }),
            KeyAction::NextField => {
                let next = self
                    .controller
                    .focus()
                    .field()
                    .map_or(Focus::Base, |field| Focus::from(field.other()));
                self.controller.dispatch(Action::Focus(next));
            }
            KeyAction::ComputePercent => {
                self.controller.dispatch(Action::ComputePercent);
            }
            KeyAction::ScrollUp => self.tape_scroll.scroll_up(),
            KeyAction::ScrollDown => self.tape_scroll.scroll_down(self.tape.len()),
            KeyAction::PageUp => self.tape_scroll.page_up(PAGE_SIZE),
            KeyAction::PageDown => self.tape_scroll.page_down(PAGE_SIZE, self.tape.len()),
            KeyAction::Home => self.tape_scroll.home(),
            KeyAction::End => self.tape_scroll.end(self.tape.len()),
            KeyAction::None => {}
        }
    }

    /// Apply `edit` to the focused percent field, if any.
    fn edit_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.controller.focus().field() else {
            return;
        };
        let mut text = self.controller.percent().field(field).to_string();
        edit(&mut text);
        self.controller.dispatch(Action::FieldInput(field, text));
    }

    /// Handle a left click at a terminal cell.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let (header, panel, _, _) = Self::compute_layout(self.screen());
        let toggle = toggle_rect(header);
        let on_toggle = menu::contains(toggle, column, row);

        if self.controller.menu().is_open() {
            let menu_area = menu_rect(header, self.screen());
            if menu::contains(menu_area, column, row) {
                if let Some(mode) = menu::entry_at(menu_area, column, row) {
                    self.controller.dispatch(Action::SelectMode(mode));
                }
                return;
            }
            if !on_toggle {
                debug!(column, row, "click outside menu");
                self.controller.dispatch(Action::OutsideClick);
            }
        }

        if on_toggle {
            self.controller.dispatch(Action::ToggleMenu);
            return;
        }

        match self.controller.mode() {
            Mode::Standard => {
                let (_, keypad) = compute_panel_layout(panel);
                if let Some(button) = button_at(keypad, column, row) {
                    self.controller.dispatch(button.action.clone());
                }
            }
            Mode::Percent => match hit_test(&compute_percent_layout(panel), column, row) {
                Some(PercentHit::Field(field)) => {
                    self.controller.dispatch(Action::Focus(Focus::from(field)));
                }
                Some(PercentHit::Compute) => {
                    self.controller.dispatch(Action::ComputePercent);
                }
                None => {}
            },
        }
    }

    /// Compute the layout.
    ///
    /// Returns (header, panel, tape, footer) rects; the main area is split
    /// 60/40 between the active panel and the tape.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer[1]);

        (outer[0], main[0], main[1], outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let screen = frame.area();
        let (header_area, panel_area, tape_area, footer_area) = Self::compute_layout(screen);
        let display = self.controller.display();

        render_header(frame, header_area, display, &self.theme);
        if display.standard_visible() {
            render_standard(frame, panel_area, display, &self.theme);
        } else {
            render_percent(frame, panel_area, display, &self.theme);
        }
        render_tape(
            frame,
            tape_area,
            &self.tape,
            self.tape_scroll.offset,
            &self.theme,
        );
        render_footer(frame, footer_area, display.panel);

        if display.menu_open() {
            render_menu(
                frame,
                menu_rect(header_area, screen),
                self.controller.menu(),
                self.controller.mode(),
                &self.theme,
            );
        }
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Convert a terminal event into a message.
    fn message_for(&self, event: Event) -> Option<TuiMessage> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let display = self.controller.display();
                Some(TuiMessage::KeyPress(map_key(
                    key,
                    display.focus,
                    display.menu_open(),
                )))
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiMessage::Click {
                    column: mouse.column,
                    row: mouse.row,
                })
            }
            Event::Resize(width, height) => Some(TuiMessage::Resize { width, height }),
            _ => None,
        }
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            let msg = if event::poll(tick_rate)? {
                self.message_for(event::read()?)
            } else {
                Some(TuiMessage::Tick)
            };
            if let Some(msg) = msg {
                self.handle_message(msg);
            }

            // Pick up tape records produced by the dispatch above
            self.update();
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
