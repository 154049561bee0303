//! The display controller: one owned widget state, one dispatch entry point.
//!
//! Every action mutates state and then renders synchronously, in the same
//! call. Observers see each render and each completed computation.

use std::sync::Arc;

use tracing::debug;

use crate::action::{parse_script, Action};
use crate::calculator::{CalcError, CalculatorState, ComputeRecord};
use crate::display::{render, Display, Focus};
use crate::mode::{Mode, ModeMenu};
use crate::observer::{DisplayObserver, ObserverSubject};
use crate::percent::PercentPanel;

/// Calculator widget: arithmetic state, percent panel, mode menu and focus.
pub struct Controller {
    state: CalculatorState,
    percent: PercentPanel,
    menu: ModeMenu,
    focus: Focus,
    display: Display,
    observers: ObserverSubject,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Create a controller in standard mode.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(Mode::Standard)
    }

    /// Create a controller starting in `mode`.
    #[must_use]
    pub fn with_mode(mode: Mode) -> Self {
        let state = CalculatorState::with_mode(mode);
        let percent = PercentPanel::new();
        let menu = ModeMenu::new();
        let focus = focus_for(mode);
        let display = render(&state, &percent, &menu, focus);
        Self {
            state,
            percent,
            menu,
            focus,
            display,
            observers: ObserverSubject::new(),
        }
    }

    /// Register an observer for renders and computations.
    pub fn register(&self, observer: Arc<dyn DisplayObserver>) {
        self.observers.register(observer);
    }

    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    #[must_use]
    pub fn percent(&self) -> &PercentPanel {
        &self.percent
    }

    #[must_use]
    pub fn menu(&self) -> &ModeMenu {
        &self.menu
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// The last rendered display.
    #[must_use]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Handle one action, then render.
    pub fn dispatch(&mut self, action: Action) -> &Display {
        debug!(?action, "dispatch");
        let record = self.apply(action);
        if let Some(record) = &record {
            self.observers.on_compute(record);
        }
        self.render()
    }

    /// Parse and dispatch a key script.
    ///
    /// Nothing is dispatched when the script fails to parse.
    pub fn run_script(&mut self, script: &str) -> Result<&Display, CalcError> {
        let actions = parse_script(script)?;
        for action in actions {
            self.dispatch(action);
        }
        Ok(&self.display)
    }

    /// Move the highlight of the open menu.
    pub fn move_menu_highlight(&mut self, delta: isize) -> &Display {
        self.menu.move_highlight(delta);
        self.render()
    }

    /// Select the highlighted menu entry.
    pub fn select_highlighted(&mut self) -> &Display {
        let mode = self.menu.highlighted();
        self.dispatch(Action::SelectMode(mode))
    }

    /// Write state to the display and notify observers.
    pub fn render(&mut self) -> &Display {
        self.display = render(&self.state, &self.percent, &self.menu, self.focus);
        self.observers.on_render(&self.display);
        &self.display
    }

    fn apply(&mut self, action: Action) -> Option<ComputeRecord> {
        match action {
            Action::Digit(key) => self.state.input(key),
            Action::Operator(op) => return self.state.apply_operator(op),
            Action::Equals => return self.state.compute(),
            Action::Clear => self.state.reset(),
            Action::InvertSign => self.state.invert_sign(),
            Action::QuickPercent => self.state.quick_percent(),
            Action::ToggleMenu => self.menu.toggle(self.state.mode()),
            Action::SelectMode(mode) => self.switch_mode(mode),
            Action::OutsideClick | Action::Escape => self.menu.close(),
            Action::FieldInput(field, text) => self.percent.set_field(field, text),
            Action::ComputePercent => {
                self.percent.compute();
            }
            Action::Focus(focus) => self.focus = focus,
        }
        None
    }

    fn switch_mode(&mut self, mode: Mode) {
        debug!(from = %self.state.mode(), to = %mode, "mode switch");
        self.state.set_mode(mode);
        self.focus = focus_for(mode);
        self.menu.close();
    }
}

/// Focus after switching to `mode`.
fn focus_for(mode: Mode) -> Focus {
    match mode {
        Mode::Standard => Focus::Keypad,
        Mode::Percent => Focus::Base,
    }
}
