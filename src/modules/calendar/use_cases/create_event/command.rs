use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::calendar::core::event::OwnerId;
use crate::shared::core::validation::{ValidationError, non_empty, parse_date, positive};

/// Transport shape shared by the HTTP and GraphQL inbound adapters.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventBody {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub owner: OwnerId,
    pub occurs_on: NaiveDate,
    pub title: String,
}

impl TryFrom<CreateEventBody> for CreateEvent {
    type Error = ValidationError;

    fn try_from(body: CreateEventBody) -> Result<Self, Self::Error> {
        let owner = positive(body.user_id, ValidationError::NonPositiveUserId)?;
        let title = non_empty(body.title)?;
        let occurs_on = parse_date(&body.date)?;
        Ok(Self {
            owner,
            occurs_on,
            title,
        })
    }
}
