use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type EventId = u64;
pub type OwnerId = u64;

/// A single calendar entry. `id` and `owner` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(rename = "user_id")]
    pub owner: OwnerId,
    #[serde(rename = "date")]
    pub occurs_on: NaiveDate,
    pub title: String,
}
