use crate::modules::calendar::adapters::outbound::in_memory_event_store::InMemoryEventStore;
use crate::modules::calendar::core::ports::EventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEventStore::new()))
    }
}
