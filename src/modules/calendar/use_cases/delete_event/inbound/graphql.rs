use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::calendar::use_cases::delete_event::command::{DeleteEvent, DeleteEventBody};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteEventMutation;

#[Object]
impl DeleteEventMutation {
    async fn delete_event(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = DeleteEvent::try_from(DeleteEventBody { id }).inspect_err(|error| {
            tracing::warn!(%error, "delete_event rejected");
        })?;

        state
            .store
            .delete(command.id)
            .await
            .inspect_err(|error| tracing::warn!(event_id = command.id, %error, "delete_event failed"))?;
        tracing::info!(event_id = command.id, "event deleted");

        Ok(true)
    }
}
