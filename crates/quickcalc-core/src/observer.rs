//! Observer pattern for render and compute notifications.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::ComputeRecord;
use crate::display::Display;

/// Observer trait for receiving controller notifications.
pub trait DisplayObserver: Send + Sync {
    /// Called after every render.
    fn on_render(&self, display: &Display);

    /// Called after every completed computation, including chained ones.
    fn on_compute(&self, _record: &ComputeRecord) {}
}

/// Subject that manages a collection of observers.
pub struct ObserverSubject {
    observers: RwLock<Vec<Arc<dyn DisplayObserver>>>,
}

impl ObserverSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn DisplayObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }
}

impl Default for ObserverSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayObserver for ObserverSubject {
    fn on_render(&self, display: &Display) {
        for observer in self.observers.read().iter() {
            observer.on_render(display);
        }
    }

    fn on_compute(&self, record: &ComputeRecord) {
        for observer in self.observers.read().iter() {
            observer.on_compute(record);
        }
    }
}
