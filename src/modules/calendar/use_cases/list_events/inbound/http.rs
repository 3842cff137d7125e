use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::modules::calendar::core::period::Period;
use crate::modules::calendar::use_cases::list_events::query::{ListEvents, ListEventsParams};
use crate::shared::infrastructure::http::response::{ApiError, ApiResult};
use crate::shell::state::AppState;

type Params = Result<Query<ListEventsParams>, QueryRejection>;

pub async fn for_day(state: State<AppState>, params: Params) -> impl IntoResponse {
    list(state, params, Period::Day).await
}

pub async fn for_week(state: State<AppState>, params: Params) -> impl IntoResponse {
    list(state, params, Period::Week).await
}

pub async fn for_month(state: State<AppState>, params: Params) -> impl IntoResponse {
    list(state, params, Period::Month).await
}

async fn list(
    State(state): State<AppState>,
    params: Params,
    period: Period,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params.map_err(|_| ApiError::bad_request("invalid request parameters"))?;
    let query = ListEvents::try_from(params).inspect_err(|error| {
        tracing::warn!(%error, ?period, "list events rejected");
    })?;

    let events = query.run(state.store.as_ref(), period).await;
    tracing::debug!(
        user_id = query.owner,
        day = %query.day,
        ?period,
        found = events.len(),
        "events listed"
    );

    Ok(ApiResult::new(events))
}
