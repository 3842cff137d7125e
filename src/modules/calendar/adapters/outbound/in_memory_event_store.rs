// In memory implementation of the EventStore port.
//
// Responsibilities
// - Own every event and the id counter behind one reader/writer lock.
// - Writers (create, update, delete) take the write guard; range queries share the read guard.
// - Never reuse an id, even after the event holding it was deleted.

use crate::modules::calendar::core::event::{Event, EventId, OwnerId};
use crate::modules::calendar::core::period::Period;
use crate::modules::calendar::core::ports::{EventStore, EventStoreError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;

const FIRST_EVENT_ID: EventId = 1;

struct Calendar {
    events: HashMap<EventId, Event>,
    next_id: EventId,
}

pub struct InMemoryEventStore {
    inner: RwLock<Calendar>,
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Calendar {
                events: HashMap::new(),
                next_id: FIRST_EVENT_ID,
            }),
        }
    }

    async fn select(&self, owner: OwnerId, period: Period, anchor: NaiveDate) -> Vec<Event> {
        let guard = self.inner.read().await;
        guard
            .events
            .values()
            .filter(|event| event.owner == owner && period.contains(anchor, event.occurs_on))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, owner: OwnerId, occurs_on: NaiveDate, title: String) -> Event {
        let mut guard = self.inner.write().await;
        let event = Event {
            id: guard.next_id,
            owner,
            occurs_on,
            title,
        };
        guard.next_id += 1;
        guard.events.insert(event.id, event.clone());
        event
    }

    async fn update(
        &self,
        id: EventId,
        occurs_on: NaiveDate,
        title: String,
    ) -> Result<(), EventStoreError> {
        let mut guard = self.inner.write().await;
        let event = guard
            .events
            .get_mut(&id)
            .ok_or(EventStoreError::NotFound { id })?;
        event.occurs_on = occurs_on;
        event.title = title;
        Ok(())
    }

    async fn delete(&self, id: EventId) -> Result<(), EventStoreError> {
        let mut guard = self.inner.write().await;
        guard
            .events
            .remove(&id)
            .map(|_| ())
            .ok_or(EventStoreError::NotFound { id })
    }

    async fn events_for_day(&self, owner: OwnerId, day: NaiveDate) -> Vec<Event> {
        self.select(owner, Period::Day, day).await
    }

    async fn events_for_week(&self, owner: OwnerId, day: NaiveDate) -> Vec<Event> {
        self.select(owner, Period::Week, day).await
    }

    async fn events_for_month(&self, owner: OwnerId, day: NaiveDate) -> Vec<Event> {
        self.select(owner, Period::Month, day).await
    }
}
