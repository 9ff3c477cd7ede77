use std::collections::VecDeque;

use crate::event::Event;

/// FIFO queue between input polling and event handling.
///
/// Each loop iteration publishes whatever input and timers produced, then
/// drains the queue in order and applies every event before the next draw.
pub struct EventBus {
    queue: VecDeque<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create an empty event bus.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue an event at the back of the queue.
    pub fn publish(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Remove and return all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }

    /// Return `true` if the queue contains at least one event.
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Gesture;

    #[test]
    fn drain_returns_all_and_empties() {
        let mut bus = EventBus::new();
        bus.publish(Event::Tick);
        bus.publish(Event::Gesture(Gesture::Quit));
        assert!(bus.has_pending());
        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(!bus.has_pending());
    }

    #[test]
    fn drain_on_empty_returns_empty() {
        let mut bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn preserves_order() {
        let mut bus = EventBus::new();
        bus.publish(Event::Gesture(Gesture::SwipeUp));
        bus.publish(Event::Resize { cols: 80, rows: 24 });
        bus.publish(Event::Gesture(Gesture::SwipeDown));
        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                Event::Gesture(Gesture::SwipeUp),
                Event::Resize { cols: 80, rows: 24 },
                Event::Gesture(Gesture::SwipeDown),
            ]
        );
    }
}
