// Shared fixtures for unit and end to end tests.
//
// The seeded calendar holds, for owner 1:
// - id 1: 2023-12-25 "Christmas"  (2023-W52)
// - id 2: 2023-12-26 "Boxing Day" (2023-W52)
// - id 3: 2024-01-01 "New Year"   (2024-W01)

pub mod logs;

use crate::modules::calendar::adapters::outbound::in_memory_event_store::InMemoryEventStore;
use crate::modules::calendar::core::event::{Event, EventId};
use crate::modules::calendar::core::ports::EventStore;
use crate::shell::state::AppState;
use chrono::NaiveDate;
use std::sync::Arc;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn ids_of(events: &[Event]) -> Vec<EventId> {
    events.iter().map(|event| event.id).collect()
}

pub async fn seed(store: &dyn EventStore) {
    store.create(1, date(2023, 12, 25), "Christmas".into()).await;
    store.create(1, date(2023, 12, 26), "Boxing Day".into()).await;
    store.create(1, date(2024, 1, 1), "New Year".into()).await;
}

pub async fn seeded_store() -> InMemoryEventStore {
    let store = InMemoryEventStore::new();
    seed(&store).await;
    store
}

pub async fn seeded_state() -> AppState {
    AppState::new(Arc::new(seeded_store().await))
}
