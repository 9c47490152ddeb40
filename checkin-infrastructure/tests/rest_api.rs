use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use checkin_domain::{
    ApiError, AttendeeGateway, AttendeeId, AttendeeQuery, CheckinRequest, EventGateway, EventId,
};
use checkin_infrastructure::{HttpClient, RestAttendeeApi, RestEventApi};

const TOKEN: &str = "Bearer test-token";

#[derive(Clone, Default)]
struct Recorded {
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    content_types: Arc<Mutex<Vec<String>>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == TOKEN)
        .unwrap_or(false)
}

fn record_content_type(recorded: &Recorded, headers: &HeaderMap) {
    let value = headers
        .get("Content-Type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();
    recorded.content_types.lock().expect("lock").push(value);
}

async fn event(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
) -> Response {
    record_content_type(&recorded, &headers);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if event_id == "broken" {
        return (StatusCode::OK, "not json").into_response();
    }
    Json(json!({
        "id": event_id,
        "title": "Rust Meetup",
        "startsAt": "2026-10-16T19:00:00Z",
        "endsAt": "2026-10-16T22:00:00-03:00",
        "location": "Auditorium",
        "stats": {"total": 45, "checkedIn": 12, "absent": 33}
    }))
    .into_response()
}

async fn attendees(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    recorded.queries.lock().expect("lock").push(params.clone());
    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    Json(json!({
        "data": [
            {"id": "A1", "name": "Ana Lima", "email": "ana@example.com", "checkedInAt": null},
            {"id": "A2", "name": "Mariana Costa", "document": "123", "checkedInAt": "2026-10-16T19:05:00Z"}
        ],
        "page": page,
        "limit": 20,
        "total": 2
    }))
    .into_response()
}

async fn checkin(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record_content_type(&recorded, &headers);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let attendee_id = body
        .get("attendeeId")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    match attendee_id.as_str() {
        "A-dup" => (StatusCode::CONFLICT, "already checked in").into_response(),
        "A-err" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => Json(json!({
            "attendeeId": attendee_id,
            "checkedInAt": "2026-10-16T20:00:00Z"
        }))
        .into_response(),
    }
}

async fn spawn_api() -> (String, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/events/:event_id", get(event))
        .route("/events/:event_id/attendees", get(attendees))
        .route("/events/:event_id/checkin", post(checkin))
        .with_state(recorded.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    (format!("http://{addr}"), recorded)
}

fn client(base_url: &str, token: Option<&str>) -> Arc<HttpClient> {
    Arc::new(HttpClient::new(base_url, token.map(ToString::to_string)).expect("client"))
}

#[tokio::test]
async fn fetches_event_with_auth_and_json_headers() {
    let (base_url, recorded) = spawn_api().await;
    let api = RestEventApi::new(client(&base_url, Some(TOKEN)));

    let event = api.fetch_event(&EventId::from("E1")).await.expect("event");
    assert_eq!(event.id, EventId::from("E1"));
    assert_eq!(event.stats.checked_in, 12);
    assert_eq!(event.ends_at.to_rfc3339(), "2026-10-17T01:00:00+00:00");
    assert_eq!(
        recorded.content_types.lock().expect("lock").as_slice(),
        ["application/json".to_string()]
    );
}

#[tokio::test]
async fn missing_token_surfaces_status() {
    let (base_url, _) = spawn_api().await;
    let api = RestEventApi::new(client(&base_url, None));

    let err = api.fetch_event(&EventId::from("E1")).await.expect_err("unauthorized");
    assert_eq!(err.status(), Some(401));
    assert!(!err.is_conflict());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (base_url, _) = spawn_api().await;
    let api = RestEventApi::new(client(&base_url, Some(TOKEN)));

    let err = api.fetch_event(&EventId::from("broken")).await.expect_err("decode");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn attendee_page_sends_search_page_and_limit() {
    let (base_url, recorded) = spawn_api().await;
    let api = RestAttendeeApi::new(client(&base_url, Some(TOKEN)));

    let query = AttendeeQuery {
        search: "ana".to_string(),
        page: 2,
        limit: 20,
    };
    let page = api
        .fetch_attendees(&EventId::from("E1"), &query)
        .await
        .expect("page");
    assert_eq!(page.page, 2);
    assert_eq!(page.total, 2);
    assert!(!page.data[0].is_checked_in());
    assert!(page.data[1].is_checked_in());

    api.fetch_attendees(&EventId::from("E1"), &AttendeeQuery::first_page("", 20))
        .await
        .expect("page");

    let queries = recorded.queries.lock().expect("lock").clone();
    assert_eq!(queries[0].get("search").map(String::as_str), Some("ana"));
    assert_eq!(queries[0].get("page").map(String::as_str), Some("2"));
    assert_eq!(queries[0].get("limit").map(String::as_str), Some("20"));
    assert!(!queries[1].contains_key("search"));
}

#[tokio::test]
async fn checkin_maps_success_conflict_and_failure() {
    let (base_url, recorded) = spawn_api().await;
    let api = RestAttendeeApi::new(client(&base_url, Some(TOKEN)));
    let event_id = EventId::from("E1");

    let receipt = api
        .submit_checkin(
            &event_id,
            &CheckinRequest {
                attendee_id: AttendeeId::from("A1"),
            },
        )
        .await
        .expect("receipt");
    assert_eq!(receipt.attendee_id, AttendeeId::from("A1"));
    assert_eq!(receipt.checked_in_at.to_rfc3339(), "2026-10-16T20:00:00+00:00");

    let conflict = api
        .submit_checkin(
            &event_id,
            &CheckinRequest {
                attendee_id: AttendeeId::from("A-dup"),
            },
        )
        .await
        .expect_err("conflict");
    assert_eq!(
        conflict,
        ApiError::Conflict {
            body: "already checked in".to_string()
        }
    );

    let failure = api
        .submit_checkin(
            &event_id,
            &CheckinRequest {
                attendee_id: AttendeeId::from("A-err"),
            },
        )
        .await
        .expect_err("failure");
    assert_eq!(failure.status(), Some(500));

    assert!(recorded
        .content_types
        .lock()
        .expect("lock")
        .iter()
        .all(|value| value == "application/json"));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let api = RestEventApi::new(client(&format!("http://{addr}"), Some(TOKEN)));
    let err = api.fetch_event(&EventId::from("E1")).await.expect_err("transport");
    assert!(matches!(err, ApiError::Transport(_)));
}
