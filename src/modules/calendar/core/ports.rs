// Ports define what the inbound adapters need from the event store, without implementing it.
//
// Boundaries
// - Arguments arrive already validated. The store never rejects input.
// - Reads hand out owned copies; nothing outside the store holds a reference into it.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::calendar::core::event::{Event, EventId, OwnerId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("event not found")]
    NotFound { id: EventId },
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create(&self, owner: OwnerId, occurs_on: NaiveDate, title: String) -> Event;

    async fn update(
        &self,
        id: EventId,
        occurs_on: NaiveDate,
        title: String,
    ) -> Result<(), EventStoreError>;

    async fn delete(&self, id: EventId) -> Result<(), EventStoreError>;

    async fn events_for_day(&self, owner: OwnerId, day: NaiveDate) -> Vec<Event>;

    async fn events_for_week(&self, owner: OwnerId, day: NaiveDate) -> Vec<Event>;

    async fn events_for_month(&self, owner: OwnerId, day: NaiveDate) -> Vec<Event>;
}
