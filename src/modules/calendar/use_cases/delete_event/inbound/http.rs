use axum::{extract::State, response::IntoResponse};

use crate::modules::calendar::use_cases::delete_event::command::{DeleteEvent, DeleteEventBody};
use crate::shared::infrastructure::http::json_or_form::JsonOrForm;
use crate::shared::infrastructure::http::response::{ApiError, ApiResult};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<DeleteEventBody>,
) -> Result<impl IntoResponse, ApiError> {
    let command = DeleteEvent::try_from(body).inspect_err(|error| {
        tracing::warn!(%error, "delete_event rejected");
    })?;

    state
        .store
        .delete(command.id)
        .await
        .inspect_err(|error| tracing::warn!(event_id = command.id, %error, "delete_event failed"))?;
    tracing::info!(event_id = command.id, "event deleted");

    Ok(ApiResult::new("event deleted successfully"))
}
