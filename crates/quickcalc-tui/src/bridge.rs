//! Bridge between controller notifications and TUI messages.

use crossbeam_channel::Sender;

use quickcalc_core::{ComputeRecord, Display, DisplayObserver};

use crate::messages::TuiMessage;

/// Observer that forwards completed computations to the TUI channel.
///
/// Register it on the `Controller` the TUI drives; the model drains the
/// channel after every event.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl DisplayObserver for TuiBridgeObserver {
    fn on_render(&self, _display: &Display) {}

    fn on_compute(&self, record: &ComputeRecord) {
        let _ = self.tx.try_send(TuiMessage::Tape(record.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use quickcalc_core::Operator;

    #[test]
    fn forwards_compute_records() {
        let (tx, rx) = unbounded();
        let bridge = TuiBridgeObserver::new(tx);
        bridge.on_compute(&ComputeRecord {
            left: "6".into(),
            operator: Operator::Divide,
            right: "0".into(),
            result: "∞".into(),
        });
        assert_eq!(rx.try_recv().unwrap(), TuiMessage::Tape("6 ÷ 0 = ∞".into()));
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (tx, rx) = unbounded();
        drop(rx);
        let bridge = TuiBridgeObserver::new(tx);
        bridge.on_compute(&ComputeRecord {
            left: "1".into(),
            operator: Operator::Add,
            right: "1".into(),
            result: "2".into(),
        });
    }
}
