//! Process-wide viewport classification with subscribe/unsubscribe lifecycle.
//!
//! One provider observes resizes; every consumer that cares about the mobile/desktop split
//! subscribes to it instead of keeping its own resize listener.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use crate::foundation::core::ViewportClass;

/// Message sent to subscribers when the viewport class flips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportChange {
    /// Width that caused the change.
    pub width: f64,
    /// New class.
    pub class: ViewportClass,
}

/// Handle identifying a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Receiving end of a subscription.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    rx: Receiver<ViewportChange>,
}

impl Subscription {
    /// Identity to pass to [`ViewportProvider::unsubscribe`].
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Drain pending changes and return the most recent one.
    ///
    /// Intermediate flips collapse; only the last class matters to consumers.
    pub fn latest(&self) -> Option<ViewportChange> {
        let mut last = None;
        loop {
            match self.rx.try_recv() {
                Ok(change) => last = Some(change),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return last,
            }
        }
    }
}

/// Classifies viewport widths and notifies subscribers on class changes.
#[derive(Debug)]
pub struct ViewportProvider {
    breakpoint: f64,
    width: f64,
    class: ViewportClass,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<ViewportChange>)>,
}

impl ViewportProvider {
    /// Create a provider and classify `initial_width`.
    pub fn new(breakpoint: f64, initial_width: f64) -> Self {
        Self {
            breakpoint,
            width: initial_width,
            class: ViewportClass::classify(initial_width, breakpoint),
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Current class.
    pub fn class(&self) -> ViewportClass {
        self.class
    }

    /// Width seen by the last resize.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Register a consumer.
    pub fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let (tx, rx) = channel();
        self.subscribers.push((id, tx));
        Subscription { id, rx }
    }

    /// Drop a consumer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Observe a resize. Returns the new class when it changed.
    ///
    /// Reclassifies on every call; subscribers whose receiver was dropped are pruned.
    pub fn resize(&mut self, width: f64) -> Option<ViewportClass> {
        self.width = width;
        let class = ViewportClass::classify(width, self.breakpoint);
        if class == self.class {
            return None;
        }
        self.class = class;
        tracing::debug!(width, ?class, "viewport reclassified");

        let change = ViewportChange { width, class };
        self.subscribers.retain(|(_, tx)| tx.send(change).is_ok());
        Some(class)
    }
}

#[cfg(test)]
#[path = "../tests/unit/viewport.rs"]
mod tests;
