use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::calendar::use_cases::update_event::command::{UpdateEvent, UpdateEventBody};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateEventMutation;

#[Object]
impl UpdateEventMutation {
    async fn update_event(
        &self,
        context: &Context<'_>,
        id: i64,
        date: String,
        title: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command =
            UpdateEvent::try_from(UpdateEventBody { id, date, title }).inspect_err(|error| {
                tracing::warn!(%error, "update_event rejected");
            })?;

        state
            .store
            .update(command.id, command.occurs_on, command.title)
            .await
            .inspect_err(|error| tracing::warn!(event_id = command.id, %error, "update_event failed"))?;
        tracing::info!(event_id = command.id, "event updated");

        Ok(true)
    }
}
