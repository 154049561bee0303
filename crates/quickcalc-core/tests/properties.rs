//! Property-based tests for the calculator state machine.
//!
//! These tests drive `Controller` through key scripts, the same way the
//! CLI and the TUI do.

use proptest::prelude::*;

use quickcalc_core::operand::format_number;
use quickcalc_core::{Action, Controller, Operator};

/// Strategy for arbitrary key scripts over the full keypad alphabet.
fn key_script() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop::sample::select(vec![
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '=', 'c',
            '~', '%',
        ]),
        0..40,
    )
    .prop_map(|keys| keys.into_iter().collect())
}

/// Expected text after typing `int_part`, then optionally `.` and `frac_part`.
fn expected_entry(int_part: &str, frac: Option<&str>) -> String {
    let trimmed = int_part.trim_start_matches('0');
    let mut expected = if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    };
    if let Some(frac) = frac {
        expected.push('.');
        expected.push_str(frac);
    }
    expected
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Typed digits with at most one point read back literally, minus leading zeros.
    #[test]
    fn digit_entry_is_literal(int_part in "[0-9]{0,12}", frac in proptest::option::of("[0-9]{0,8}")) {
        let mut script = int_part.clone();
        if let Some(frac) = &frac {
            script.push('.');
            script.push_str(frac);
        }
        prop_assume!(!script.is_empty());
        let mut controller = Controller::new();
        controller.run_script(&script).unwrap();
        prop_assert_eq!(
            controller.display().value.as_str(),
            expected_entry(&int_part, frac.as_deref())
        );
    }

    /// A second decimal point never changes the entry.
    #[test]
    fn second_point_is_ignored(a in "[1-9][0-9]{0,5}", b in "[0-9]{1,5}", c in "[0-9]{0,5}") {
        let mut with_extra = Controller::new();
        with_extra.run_script(&format!("{a}.{b}.{c}")).unwrap();
        let mut without = Controller::new();
        without.run_script(&format!("{a}.{b}{c}")).unwrap();
        prop_assert_eq!(&with_extra.display().value, &without.display().value);
    }

    /// `previous` and `operator` are always set or unset together.
    #[test]
    fn operator_iff_previous(script in key_script()) {
        let mut controller = Controller::new();
        for action in quickcalc_core::parse_script(&script).unwrap() {
            controller.dispatch(action);
            let state = controller.state();
            prop_assert_eq!(state.previous().is_some(), state.operator().is_some());
        }
    }

    /// Equals with nothing pending leaves everything unchanged.
    #[test]
    fn compute_idempotent_when_idle(script in key_script()) {
        let mut controller = Controller::new();
        controller.run_script(&script).unwrap();
        controller.dispatch(Action::Equals);
        let before = controller.state().clone();
        prop_assume!(before.operator().is_none());
        controller.dispatch(Action::Equals);
        prop_assert_eq!(controller.state(), &before);
    }

    /// Add, subtract and multiply give the exact f64 result.
    #[test]
    fn non_divide_results_are_exact(
        a in 0u32..1_000_000,
        b in 0u32..1_000_000,
        op in prop::sample::select(vec![Operator::Add, Operator::Subtract, Operator::Multiply]),
    ) {
        let key = match op {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        };
        let mut controller = Controller::new();
        controller.run_script(&format!("{a}{key}{b}=")).unwrap();
        let expected = format_number(op.apply(f64::from(a), f64::from(b)));
        prop_assert_eq!(&controller.display().value, &expected);
    }

    /// Division by zero always shows the glyph.
    #[test]
    fn divide_by_zero_shows_glyph(a in "[0-9]{1,8}") {
        let mut controller = Controller::new();
        controller.run_script(&format!("{a}/0=")).unwrap();
        prop_assert_eq!(controller.display().value.as_str(), "∞");
    }

    /// Operand values stay finite and the display never shows NaN.
    #[test]
    fn values_stay_finite(script in key_script()) {
        let mut controller = Controller::new();
        for action in quickcalc_core::parse_script(&script).unwrap() {
            controller.dispatch(action);
            let state = controller.state();
            prop_assert!(state.current_operand().value().is_finite());
            prop_assert!(!controller.display().value.contains("NaN"));
            prop_assert!(!controller.display().expression.contains("NaN"));
        }
    }

    /// Clear after anything restores the initial state.
    #[test]
    fn clear_restores_initial(script in key_script()) {
        let mut controller = Controller::new();
        controller.run_script(&script).unwrap();
        controller.dispatch(Action::Clear);
        prop_assert!(controller.state().is_initial());
        prop_assert_eq!(controller.display().value.as_str(), "0");
        prop_assert_eq!(controller.display().expression.as_str(), "0");
    }

    /// Sign inversion twice is the identity for non-zero typed integers.
    #[test]
    fn invert_twice_is_identity(a in "[1-9][0-9]{0,8}") {
        let mut controller = Controller::new();
        controller.run_script(&format!("{a}~~")).unwrap();
        prop_assert_eq!(&controller.display().value, &a);
    }
}
