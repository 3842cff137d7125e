use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::time::Duration;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

fn app() -> Router {
    router(AppState::in_memory(), Duration::from_secs(5))
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: &Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    call(
        app,
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(app: &Router, uri: &str) -> serde_json::Value {
    let (status, json) = call(app, Request::get(uri).body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK, "GET {uri} -> {json}");
    json
}

fn sorted_ids(json: &serde_json::Value) -> Vec<u64> {
    let mut ids: Vec<u64> = json["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["id"].as_u64().unwrap())
        .collect();
    ids.sort_unstable();
    ids
}

async fn create(app: &Router, user_id: i64, date: &str, title: &str) -> u64 {
    let (status, json) = post(
        app,
        "/create_event",
        serde_json::json!({ "user_id": user_id, "date": date, "title": title }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create -> {json}");
    json["result"]["id"].as_u64().unwrap()
}

#[tokio::test]
async fn holiday_week_is_grouped_by_iso_week_and_month() {
    let app = app();

    assert_eq!(create(&app, 1, "2023-12-25", "Christmas").await, 1);
    assert_eq!(create(&app, 1, "2023-12-26", "Boxing Day").await, 2);

    let week = get(&app, "/events_for_week?user_id=1&date=2023-12-25").await;
    let month = get(&app, "/events_for_month?user_id=1&date=2023-12-25").await;
    let day = get(&app, "/events_for_day?user_id=1&date=2023-12-25").await;
    assert_eq!(sorted_ids(&week), vec![1, 2]);
    assert_eq!(sorted_ids(&month), vec![1, 2]);
    assert_eq!(sorted_ids(&day), vec![1]);

    assert_eq!(create(&app, 1, "2024-01-01", "New Year").await, 3);
    let week = get(&app, "/events_for_week?user_id=1&date=2023-12-25").await;
    assert_eq!(sorted_ids(&week), vec![1, 2]);

    let (status, _) = post(
        &app,
        "/update_event",
        serde_json::json!({ "id": 2, "date": "2023-12-26", "title": "Boxing Day Renamed" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let boxing_day = get(&app, "/events_for_day?user_id=1&date=2023-12-26").await;
    assert_eq!(
        boxing_day,
        serde_json::json!({
            "result": [{ "id": 2, "user_id": 1, "date": "2023-12-26", "title": "Boxing Day Renamed" }]
        })
    );
}

#[tokio::test]
async fn failed_update_leaves_the_calendar_untouched() {
    let app = app();
    create(&app, 1, "2023-12-25", "Christmas").await;
    let before = get(&app, "/events_for_month?user_id=1&date=2023-12-01").await;

    let (status, json) = post(
        &app,
        "/update_event",
        serde_json::json!({ "id": 7, "date": "2023-12-31", "title": "Nope" }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json, serde_json::json!({ "error": "event not found" }));
    let after = get(&app, "/events_for_month?user_id=1&date=2023-12-01").await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn deleted_ids_never_come_back() {
    let app = app();
    let christmas = create(&app, 1, "2023-12-25", "Christmas").await;
    create(&app, 1, "2023-12-26", "Boxing Day").await;

    let (status, _) = post(&app, "/delete_event", serde_json::json!({ "id": christmas })).await;
    assert_eq!(status, StatusCode::OK);

    let replacement = create(&app, 1, "2023-12-25", "Christmas again").await;
    assert_eq!(replacement, 3);

    for uri in [
        "/events_for_day?user_id=1&date=2023-12-25",
        "/events_for_week?user_id=1&date=2023-12-25",
        "/events_for_month?user_id=1&date=2023-12-25",
    ] {
        let json = get(&app, uri).await;
        assert!(!sorted_ids(&json).contains(&christmas), "{uri} returned a deleted event");
    }
}

#[tokio::test]
async fn owners_only_see_their_own_events() {
    let app = app();
    let mine = create(&app, 1, "2023-12-25", "Mine").await;
    let theirs = create(&app, 2, "2023-12-25", "Theirs").await;

    let one = get(&app, "/events_for_day?user_id=1&date=2023-12-25").await;
    let two = get(&app, "/events_for_day?user_id=2&date=2023-12-25").await;

    assert_eq!(sorted_ids(&one), vec![mine]);
    assert_eq!(sorted_ids(&two), vec![theirs]);
}

#[tokio::test]
async fn graphql_endpoint_shares_the_store_with_http() {
    let app = app();
    create(&app, 1, "2023-12-25", "Christmas").await;

    let (status, json) = post(
        &app,
        "/gql",
        serde_json::json!({ "query": "{ eventsForMonth(userId: 1, date: \"2023-12-01\") { id title } }" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({ "data": { "eventsForMonth": [{ "id": 1, "title": "Christmas" }] } })
    );
}
