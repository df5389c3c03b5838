//! Topic-based event bus implementation.

use game_core::SimEvent;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::SessionEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Gameplay events produced by the engine
    Simulation,
    /// Session lifecycle
    Session,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Sim(SimEvent),
    Session(SessionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Sim(_) => Topic::Simulation,
            Event::Session(_) => Topic::Session,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Clones share the same channels.
#[derive(Clone)]
pub struct EventBus {
    simulation: broadcast::Sender<Event>,
    session: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            simulation: broadcast::channel(capacity).0,
            session: broadcast::channel(capacity).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Simulation => &self.simulation,
            Topic::Session => &self.session,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channel(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::debug!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channel(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_only_reach_their_topic() {
        let bus = EventBus::with_capacity(4);
        let mut session = bus.subscribe(Topic::Session);
        let mut simulation = bus.subscribe(Topic::Simulation);

        bus.publish(Event::Session(SessionEvent::Started { level: 0 }));

        assert_eq!(
            session.try_recv().unwrap(),
            Event::Session(SessionEvent::Started { level: 0 })
        );
        assert!(simulation.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_harmless() {
        let bus = EventBus::default();
        bus.publish(Event::Session(SessionEvent::Stopped { frames: 3 }));

        let clone = bus.clone();
        let mut late = clone.subscribe(Topic::Session);
        bus.publish(Event::Session(SessionEvent::Stopped { frames: 4 }));
        assert_eq!(
            late.try_recv().unwrap(),
            Event::Session(SessionEvent::Stopped { frames: 4 })
        );
    }
}
