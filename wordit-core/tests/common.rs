use std::sync::{Arc, Mutex};

use wordit_core::{GameSession, SessionEvent, SessionEventHandler, WordValidator};
use wordit_types::LetterPair;

/// Creates the reference round: start with A, end with E, 180 seconds
pub fn create_test_session() -> GameSession {
    create_session_with_pair('A', 'E', 180)
}

pub fn create_session_with_pair(first: char, last: char, seconds: u32) -> GameSession {
    GameSession::new(LetterPair::new(first, last), seconds)
}

/// Creates a validator with the dictionary capability off
pub fn create_test_validator() -> WordValidator {
    WordValidator::new(LetterPair::new('A', 'E'))
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_event(&self) -> Option<SessionEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&SessionEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl SessionEventHandler for EventCollector {
    fn handle_event(&mut self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Attaches a collector to a session and returns a handle to it
pub fn attach_collector(session: &mut GameSession) -> EventCollector {
    let collector = EventCollector::new();
    session.event_bus.add_handler(Box::new(collector.clone()));
    collector
}
