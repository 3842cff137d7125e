use axum::{extract::State, response::IntoResponse};

use crate::modules::calendar::use_cases::create_event::command::{CreateEvent, CreateEventBody};
use crate::shared::infrastructure::http::json_or_form::JsonOrForm;
use crate::shared::infrastructure::http::response::{ApiError, ApiResult};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<CreateEventBody>,
) -> Result<impl IntoResponse, ApiError> {
    let command = CreateEvent::try_from(body).inspect_err(|error| {
        tracing::warn!(%error, "create_event rejected");
    })?;

    let event = state
        .store
        .create(command.owner, command.occurs_on, command.title)
        .await;
    tracing::info!(event_id = event.id, user_id = event.owner, "event created");

    Ok(ApiResult::new(event))
}
