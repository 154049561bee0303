//! # quickcalc-cli
//!
//! Non-interactive output: result presentation, JSON reports, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CliPresenter, Verbosity};
