use api_client::ApiClient;
use axum::{
    extract::{Path, Query, Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TICKETER_EMAIL: &str = "ticketer@kronotrack.test";
pub const ADMIN_EMAIL: &str = "admin@kronotrack.test";
pub const PASSWORD: &str = "correct-horse";
pub const TICKETER_TOKEN: &str = "ticketer-token";
pub const ADMIN_TOKEN: &str = "admin-token";
/// Login with this email fails with an empty body.
pub const SILENT_FAILURE_EMAIL: &str = "silent@kronotrack.test";
/// Creating a ticket for this user id is rejected by the backend.
pub const UNKNOWN_USER_ID: i64 = 999;

/// One request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Clone, Default)]
struct MockState {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    tickets: Arc<Mutex<Vec<Value>>>,
}

/// In-process stand-in for the Kronotrack API, listening on a random port.
pub struct MockBackend {
    pub base_url: String,
    state: MockState,
}

impl MockBackend {
    /// Anonymous client pointed at this backend.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<RecordedCall> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }
}

/// Start a fresh backend seeded with three tickets: two for user 12
/// (one validated) and one for user 40.
pub async fn spawn_backend() -> MockBackend {
    let state = MockState::default();
    *state.tickets.lock().unwrap() = vec![
        ticket_json(1, 12, false, "2025-03-01T09:15:00.000Z"),
        ticket_json(2, 12, true, "2025-03-02T10:00:00.000Z"),
        ticket_json(3, 40, false, "2025-03-02T11:30:00.000Z"),
    ];

    let app = Router::new()
        .route("/v1/api/auth/login", post(login))
        .route("/v1/api/tickets", get(list_tickets).post(create_ticket))
        .route("/v1/api/tickets/{id}", patch(update_ticket))
        .layer(middleware::from_fn_with_state(state.clone(), record_call))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read mock address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend stopped");
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    format!("http://{addr}")
}

async fn record_call(State(state): State<MockState>, req: Request, next: Next) -> Response {
    let call = RecordedCall {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        authorization: req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    state.calls.lock().unwrap().push(call);
    next.run(req).await
}

fn user_json(id: i64, email: &str, full_name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "roleId": 2,
        "email": email,
        "phone": "+2348000000000",
        "fullName": full_name,
        "address": null,
        "rfid_tag": null,
        "registered_by": 1,
        "vehicle_id": null,
        "created_at": "2025-01-10T08:00:00.000Z",
        "updated_at": "2025-01-10T08:00:00.000Z",
        "role": {"id": 2, "name": role, "description": format!("{role} account")}
    })
}

fn ticket_json(id: i64, user_id: i64, validated: bool, created_at: &str) -> Value {
    let validator = if validated {
        json!({"id": 3, "fullName": "Tolu Ade", "email": TICKETER_EMAIL, "role": {"name": "ticketer"}})
    } else {
        Value::Null
    };
    json!({
        "id": id,
        "userId": user_id,
        "validatedBy": if validated { json!(3) } else { Value::Null },
        "isValidated": validated,
        "validatedAt": if validated { json!(created_at) } else { Value::Null },
        "created_at": created_at,
        "updated_at": created_at,
        "user": {"id": user_id, "fullName": format!("Rider {user_id}"), "email": format!("rider{user_id}@kronotrack.test"), "role": {"name": "private"}},
        "validator": validator
    })
}

fn ok(status: StatusCode, message: &str, data: Value) -> Response {
    (
        status,
        Json(json!({"status": "success", "message": message, "data": data})),
    )
        .into_response()
}

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"status": "error", "message": message}))).into_response()
}

fn bearer_is_valid(headers: &HeaderMap) -> bool {
    let expected = [format!("Bearer {TICKETER_TOKEN}"), format!("Bearer {ADMIN_TOKEN}")];
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| expected.iter().any(|e| e == v))
        .unwrap_or(false)
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    if email == SILENT_FAILURE_EMAIL {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if password != PASSWORD {
        return fail(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    match email {
        TICKETER_EMAIL => ok(
            StatusCode::OK,
            "Login successful",
            json!({"user": user_json(3, TICKETER_EMAIL, "Tolu Ade", "ticketer"), "token": TICKETER_TOKEN}),
        ),
        ADMIN_EMAIL => ok(
            StatusCode::OK,
            "Login successful",
            json!({"user": user_json(1, ADMIN_EMAIL, "Ada Obi", "admin"), "token": ADMIN_TOKEN}),
        ),
        _ => fail(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn list_tickets(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !bearer_is_valid(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let filter = params.get("userId").and_then(|v| v.parse::<i64>().ok());
    let tickets: Vec<Value> = state
        .tickets
        .lock()
        .unwrap()
        .iter()
        .filter(|t| filter.map_or(true, |id| t["userId"] == json!(id)))
        .cloned()
        .collect();
    ok(StatusCode::OK, "Tickets retrieved", Value::Array(tickets))
}

async fn create_ticket(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !bearer_is_valid(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let Some(user_id) = body["userId"].as_i64() else {
        return fail(StatusCode::BAD_REQUEST, "userId is required");
    };
    if user_id == UNKNOWN_USER_ID {
        return fail(StatusCode::NOT_FOUND, "User not found");
    }
    let mut tickets = state.tickets.lock().unwrap();
    let id = tickets.len() as i64 + 1;
    let ticket = ticket_json(id, user_id, false, "2025-03-03T12:00:00.000Z");
    tickets.push(ticket.clone());
    ok(StatusCode::CREATED, "Ticket created", ticket)
}

async fn update_ticket(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    if !bearer_is_valid(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let Some(validated) = body["isValidated"].as_bool() else {
        return fail(StatusCode::BAD_REQUEST, "isValidated is required");
    };
    let mut tickets = state.tickets.lock().unwrap();
    let Some(ticket) = tickets.iter_mut().find(|t| t["id"] == json!(id)) else {
        return fail(StatusCode::NOT_FOUND, "Ticket not found");
    };
    let user_id = ticket["userId"].as_i64().unwrap_or_default();
    let created_at = ticket["created_at"].as_str().unwrap_or_default().to_string();
    *ticket = ticket_json(id, user_id, validated, &created_at);
    ok(StatusCode::OK, "Ticket updated", ticket.clone())
}
