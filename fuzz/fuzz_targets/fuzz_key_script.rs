#![no_main]

use libfuzzer_sys::fuzz_target;

use quickcalc_core::{parse_script, Controller};

fuzz_target!(|data: &[u8]| {
    let Ok(script) = std::str::from_utf8(data) else {
        return;
    };

    let mut controller = Controller::new();
    let parsed = parse_script(script);
    let result = controller.run_script(script);

    // Parsing and running agree, and a rejected script dispatches nothing
    assert_eq!(parsed.is_ok(), result.is_ok());
    if parsed.is_err() {
        assert_eq!(controller.display(), Controller::new().display());
        return;
    }

    // A left operand exists exactly when an operator is pending
    let state = controller.state();
    assert_eq!(state.previous().is_some(), state.operator().is_some());
    assert!(!controller.display().value.is_empty());
    assert!(state.current_operand().value().is_finite());
    assert!(!controller.display().value.contains("NaN"));
});
