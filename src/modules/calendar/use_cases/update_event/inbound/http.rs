use axum::{extract::State, response::IntoResponse};

use crate::modules::calendar::use_cases::update_event::command::{UpdateEvent, UpdateEventBody};
use crate::shared::infrastructure::http::json_or_form::JsonOrForm;
use crate::shared::infrastructure::http::response::{ApiError, ApiResult};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<UpdateEventBody>,
) -> Result<impl IntoResponse, ApiError> {
    let command = UpdateEvent::try_from(body).inspect_err(|error| {
        tracing::warn!(%error, "update_event rejected");
    })?;

    state
        .store
        .update(command.id, command.occurs_on, command.title)
        .await
        .inspect_err(|error| tracing::warn!(event_id = command.id, %error, "update_event failed"))?;
    tracing::info!(event_id = command.id, "event updated");

    Ok(ApiResult::new("event updated successfully"))
}
