use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::calendar::core::event::EventId;
use crate::shared::core::validation::{ValidationError, non_empty, parse_date, positive};

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEventBody {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
}

/// Replaces the date and title of an existing event. The owner is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEvent {
    pub id: EventId,
    pub occurs_on: NaiveDate,
    pub title: String,
}

impl TryFrom<UpdateEventBody> for UpdateEvent {
    type Error = ValidationError;

    fn try_from(body: UpdateEventBody) -> Result<Self, Self::Error> {
        let id = positive(body.id, ValidationError::NonPositiveId)?;
        let title = non_empty(body.title)?;
        let occurs_on = parse_date(&body.date)?;
        Ok(Self {
            id,
            occurs_on,
            title,
        })
    }
}
