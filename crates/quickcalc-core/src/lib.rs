//! # quickcalc-core
//!
//! Core library for the QuickCalc widget: a four-function calculator state
//! machine, an independent percent panel, the mode menu, and the controller
//! that renders all of it to display text.

pub mod action;
pub mod calculator;
pub mod constants;
pub mod controller;
pub mod display;
pub mod mode;
pub mod observer;
pub mod observers;
pub mod operand;
pub mod operator;
pub mod percent;

// Re-exports
pub use action::{parse_script, Action};
pub use calculator::{CalcError, CalculatorState, ComputeRecord, Pending};
pub use constants::{exit_codes, INFINITY_GLYPH, INITIAL_DISPLAY};
pub use controller::Controller;
pub use display::{Display, Focus};
pub use mode::{Mode, ModeMenu};
pub use observer::{DisplayObserver, ObserverSubject};
pub use operand::{EntryKey, Operand};
pub use operator::Operator;
pub use percent::{Field, PercentOutcome, PercentPanel};

/// Run a key script on a fresh calculator and return the displayed value.
///
/// This is a convenience function for simple use cases. For observers,
/// modes and the percent panel, use [`Controller`] directly.
///
/// # Example
/// ```
/// assert_eq!(quickcalc_core::evaluate("5 + 3 =").unwrap(), "8");
/// assert_eq!(quickcalc_core::evaluate("6 / 0 =").unwrap(), "∞");
/// ```
pub fn evaluate(script: &str) -> Result<String, CalcError> {
    let mut controller = Controller::new();
    controller.run_script(script).map(|d| d.value.clone())
}
