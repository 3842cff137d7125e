use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::shared::infrastructure::http::response::ApiError;

/// Decodes a JSON body when the request says so, an url-encoded form otherwise.
pub struct JsonOrForm<T>(pub T);

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&request) {
            let Json(value) = Json::<T>::from_request(request, state)
                .await
                .map_err(|_| ApiError::bad_request("invalid JSON request body"))?;
            return Ok(Self(value));
        }
        let Form(value) = Form::<T>::from_request(request, state)
            .await
            .map_err(|_| ApiError::bad_request("invalid form data"))?;
        Ok(Self(value))
    }
}
