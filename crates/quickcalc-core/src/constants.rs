//! Display constants and exit codes.

/// Text shown for a freshly cleared operand.
pub const INITIAL_DISPLAY: &str = "0";

/// Glyph shown for positive infinity, including division by zero.
pub const INFINITY_GLYPH: &str = "∞";

/// Glyph shown for negative infinity.
pub const NEG_INFINITY_GLYPH: &str = "-∞";

/// Decimal places used by the percent panel sentence.
pub const PERCENT_DECIMALS: usize = 2;

/// Maximum number of records kept on the tape.
pub const TAPE_CAPACITY: usize = 500;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed key script or field input.
    pub const ERROR_INPUT: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
