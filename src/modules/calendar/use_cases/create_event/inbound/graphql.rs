use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::calendar::use_cases::create_event::command::{CreateEvent, CreateEventBody};
use crate::modules::calendar::use_cases::list_events::inbound::graphql::GqlEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateEventMutation;

#[Object]
impl CreateEventMutation {
    async fn create_event(
        &self,
        context: &Context<'_>,
        user_id: i64,
        date: String,
        title: String,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateEvent::try_from(CreateEventBody {
            user_id,
            date,
            title,
        })
        .inspect_err(|error| {
            tracing::warn!(%error, "create_event rejected");
        })?;

        let event = state
            .store
            .create(command.owner, command.occurs_on, command.title)
            .await;
        tracing::info!(event_id = event.id, user_id = event.owner, "event created");

        Ok(event.into())
    }
}
