use wordit_types::{RejectReason, WordEntry};

#[derive(Debug, Clone)]
pub enum SessionEvent {
    Tick {
        remaining_seconds: u32,
    },
    WordAccepted {
        entry: WordEntry,
        total_score: i32,
    },
    WordRejected {
        word: String,
        reason: RejectReason,
    },
    SessionEnded {
        total_score: i32,
        words_count: usize,
    },
}

/// Event handler trait for observing a session (a renderer, typically)
pub trait SessionEventHandler {
    fn handle_event(&mut self, event: SessionEvent);
}

/// Simple event bus distributing session events to registered handlers
pub struct SessionEventBus {
    handlers: Vec<Box<dyn SessionEventHandler>>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn SessionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: SessionEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct CountingHandler {
        seen: Arc<Mutex<Vec<SessionEvent>>>,
    }

    impl SessionEventHandler for CountingHandler {
        fn handle_event(&mut self, event: SessionEvent) {
            self.seen.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_bus_delivers_to_all_handlers() {
        let seen_a = Arc::new(Mutex::new(Vec::new()));
        let seen_b = Arc::new(Mutex::new(Vec::new()));

        let mut bus = SessionEventBus::new();
        bus.add_handler(Box::new(CountingHandler {
            seen: seen_a.clone(),
        }));
        bus.add_handler(Box::new(CountingHandler {
            seen: seen_b.clone(),
        }));

        bus.publish(SessionEvent::Tick {
            remaining_seconds: 42,
        });

        assert_eq!(seen_a.lock().unwrap().len(), 1);
        assert_eq!(seen_b.lock().unwrap().len(), 1);
        assert!(matches!(
            seen_a.lock().unwrap()[0],
            SessionEvent::Tick {
                remaining_seconds: 42
            }
        ));
    }
}
