#![no_main]

use libfuzzer_sys::fuzz_target;

use quickcalc_core::{Field, PercentPanel};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let text: &str = &text;
    let (base, rate) = text.split_once('\n').unwrap_or((text, ""));

    let mut panel = PercentPanel::new();
    panel.set_field(Field::Base, base);
    panel.set_field(Field::Rate, rate);

    // Free-form input never fails and always yields a full sentence
    let outcome = panel.outcome();
    assert!(outcome.base.is_finite());
    assert!(outcome.rate.is_finite());
    assert!(panel.sentence().contains("% of "));
    assert!(panel.sentence().contains(" = "));
});
