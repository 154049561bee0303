//! Concrete observer implementations.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{info, trace};

use crate::calculator::ComputeRecord;
use crate::constants::TAPE_CAPACITY;
use crate::display::Display;
use crate::observer::DisplayObserver;

/// Observer that ignores all notifications.
#[derive(Debug, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DisplayObserver for NoOpObserver {
    fn on_render(&self, _display: &Display) {}
}

/// Observer that emits `tracing` events.
#[derive(Debug, Default)]
pub struct LoggingObserver {
    renders: AtomicU64,
}

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of renders seen so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.renders.load(Ordering::Relaxed)
    }
}

impl DisplayObserver for LoggingObserver {
    fn on_render(&self, snapshot: &Display) {
        let n = self.renders.fetch_add(1, Ordering::Relaxed) + 1;
        trace!(
            render = n,
            mode = snapshot.mode_tag,
            value = %snapshot.value,
            expression = %snapshot.expression,
            "render"
        );
    }

    fn on_compute(&self, record: &ComputeRecord) {
        info!(%record, "computation");
    }
}

/// Observer that keeps the most recent computations (the tape).
pub struct RecordingObserver {
    records: Mutex<VecDeque<ComputeRecord>>,
    capacity: usize,
}

impl RecordingObserver {
    /// Create a recorder holding up to `TAPE_CAPACITY` records.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(TAPE_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Snapshot of the recorded computations, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<ComputeRecord> {
        self.records.lock().iter().cloned().collect()
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayObserver for RecordingObserver {
    fn on_render(&self, _display: &Display) {}

    fn on_compute(&self, record: &ComputeRecord) {
        let mut records = self.records.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record.clone());
    }
}
