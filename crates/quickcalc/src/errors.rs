//! Error handling and exit codes.

use quickcalc_core::constants::exit_codes;
use quickcalc_core::CalcError;

/// Exit code for a calculator error.
#[must_use]
pub fn handle_error(err: &CalcError) -> i32 {
    match err {
        CalcError::UnknownKey { .. } | CalcError::InvalidOperator(_) => exit_codes::ERROR_INPUT,
        CalcError::InvalidMode(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for any application error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CalcError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
