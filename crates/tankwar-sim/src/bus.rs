//! Event bus — typed, synchronous notification fan-out.
//!
//! Subscribers register before the match starts; `publish` delivers to every
//! subscriber in registration order, within the tick that produced the
//! event. Events are additionally accumulated into the tick's snapshot by
//! the engine, so a frontend can consume them without subscribing.

use tankwar_core::events::GameEvent;

type Callback = Box<dyn FnMut(&GameEvent)>;

/// Ordered list of event callbacks.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Callback>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Delivery order follows registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Deliver one event to every subscriber, synchronously.
    pub fn publish(&mut self, event: &GameEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
