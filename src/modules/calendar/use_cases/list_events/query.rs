use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::calendar::core::event::{Event, OwnerId};
use crate::modules::calendar::core::period::Period;
use crate::modules::calendar::core::ports::EventStore;
use crate::shared::core::validation::{ValidationError, parse_date, positive};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEventsParams {
    pub user_id: Option<i64>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEvents {
    pub owner: OwnerId,
    pub day: NaiveDate,
}

impl TryFrom<ListEventsParams> for ListEvents {
    type Error = ValidationError;

    fn try_from(params: ListEventsParams) -> Result<Self, Self::Error> {
        let owner = positive(
            params.user_id.unwrap_or_default(),
            ValidationError::InvalidUserId,
        )?;
        let day = match params.date.as_deref() {
            None | Some("") => return Err(ValidationError::MissingDate),
            Some(raw) => parse_date(raw)?,
        };
        Ok(Self { owner, day })
    }
}

impl ListEvents {
    pub async fn run(self, store: &dyn EventStore, period: Period) -> Vec<Event> {
        match period {
            Period::Day => store.events_for_day(self.owner, self.day).await,
            Period::Week => store.events_for_week(self.owner, self.day).await,
            Period::Month => store.events_for_month(self.owner, self.day).await,
        }
    }
}
