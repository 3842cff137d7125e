use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::period::Period;
use crate::modules::calendar::use_cases::list_events::query::{ListEvents, ListEventsParams};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Event")]
pub struct GqlEvent {
    pub id: u64,
    pub user_id: u64,
    pub date: NaiveDate,
    pub title: String,
}

impl From<Event> for GqlEvent {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            user_id: event.owner,
            date: event.occurs_on,
            title: event.title,
        }
    }
}

async fn list(
    context: &Context<'_>,
    user_id: i64,
    date: String,
    period: Period,
) -> GqlResult<Vec<GqlEvent>> {
    let state = context.data_unchecked::<AppState>();
    let query = ListEvents::try_from(ListEventsParams {
        user_id: Some(user_id),
        date: Some(date),
    })
    .inspect_err(|error| {
        tracing::warn!(%error, ?period, "list events rejected");
    })?;
    let events = query.run(state.store.as_ref(), period).await;
    Ok(events.into_iter().map(Into::into).collect())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn events_for_day(
        &self,
        context: &Context<'_>,
        user_id: i64,
        date: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        list(context, user_id, date, Period::Day).await
    }

    async fn events_for_week(
        &self,
        context: &Context<'_>,
        user_id: i64,
        date: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        list(context, user_id, date, Period::Week).await
    }

    async fn events_for_month(
        &self,
        context: &Context<'_>,
        user_id: i64,
        date: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        list(context, user_id, date, Period::Month).await
    }
}
