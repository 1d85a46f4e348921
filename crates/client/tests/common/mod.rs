//! In-process backend double for client integration tests.
//!
//! Serves the endpoints the portal calls and records every request it
//! receives. A few magic values drive failure paths:
//! - journal description `"closed period"` -> 422 with a message
//! - journal description `"crash"` -> 500 with a non-JSON body
//! - journal description `"quiet"` -> 201 without a body
//! - journal description `"terse"` -> 201 with `{}`
//! - login password other than `"secret"` -> 401
//! - general ledger always -> 503 without a body

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use ledgerdesk_client::PortalClient;
use ledgerdesk_shared::Session;
use ledgerdesk_shared::config::ApiConfig;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// One request seen by the backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

/// A file received on `/api/upload`.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub field: String,
    pub filename: String,
    pub size: usize,
}

#[derive(Default)]
pub struct Recorder {
    requests: Mutex<Vec<RecordedRequest>>,
    uploads: Mutex<Vec<RecordedUpload>>,
}

impl Recorder {
    fn record(&self, path: &str, headers: &HeaderMap, body: Value) {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        self.requests.lock().unwrap().push(RecordedRequest {
            path: path.to_string(),
            authorization,
            body,
        });
    }

    /// Requests received on `path`, in arrival order.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

/// A running backend double.
pub struct Backend {
    pub base_url: String,
    pub recorder: Arc<Recorder>,
}

impl Backend {
    /// Binds to an ephemeral port and serves in the background.
    pub async fn start() -> Self {
        let recorder = Arc::new(Recorder::default());
        let app = Router::new()
            .route("/api/accounting/journal-entry", post(create_journal_entry))
            .route("/api/accounting/accounts", get(list_accounts))
            .route("/api/accounting/summary", get(summary))
            .route("/api/accounting/cash-flow", get(cash_flow))
            .route("/api/accounting/general-ledger", get(general_ledger))
            .route("/api/upload", post(upload))
            .route("/api/auth/login", post(login))
            .route("/api/consultation", post(consultation))
            .route("/api/checklist", post(checklist))
            .route("/api/blog", get(blog))
            .route("/api/admin/content", post(admin_content))
            .with_state(Arc::clone(&recorder));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            recorder,
        }
    }

    /// A client for this backend.
    pub fn client(&self, session: Session) -> PortalClient {
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
            ..ApiConfig::default()
        };
        PortalClient::new(&config, session).unwrap()
    }
}

type Shared = State<Arc<Recorder>>;

async fn create_journal_entry(
    State(recorder): Shared,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    recorder.record("/api/accounting/journal-entry", &headers, body.clone());
    match body["description"].as_str() {
        Some("closed period") => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "message": "Accounting period is closed" })),
        )
            .into_response(),
        Some("crash") => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        Some("quiet") => StatusCode::CREATED.into_response(),
        Some("terse") => (StatusCode::CREATED, Json(json!({}))).into_response(),
        _ => (
            StatusCode::CREATED,
            Json(json!({ "journalEntry": { "id": "je-1", "description": body["description"] } })),
        )
            .into_response(),
    }
}

async fn list_accounts(State(recorder): Shared, headers: HeaderMap) -> Json<Value> {
    recorder.record("/api/accounting/accounts", &headers, Value::Null);
    Json(json!({
        "accounts": [
            { "accountNumber": "1000", "accountName": "Cash", "accountType": "asset" },
            { "accountNumber": "4000", "accountName": "Revenue", "fsliCategory": "Income" }
        ]
    }))
}

async fn summary() -> Json<Value> {
    Json(json!({
        "summary": { "revenue": 12000, "expenses": 9000, "netIncome": 3000, "cashBalance": "5000.50" }
    }))
}

async fn cash_flow() -> Json<Value> {
    Json(json!({
        "cashFlow": [
            { "period": "2024-01", "inflow": 100, "outflow": 40 },
            { "period": "2024-02", "inflow": 10, "outflow": 50 }
        ]
    }))
}

async fn general_ledger() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

async fn upload(State(recorder): Shared, headers: HeaderMap, mut multipart: Multipart) -> Response {
    recorder.record("/api/upload", &headers, Value::Null);
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap();
        recorder.uploads.lock().unwrap().push(RecordedUpload {
            field: name,
            filename,
            size: bytes.len(),
        });
    }
    Json(json!({ "success": true })).into_response()
}

async fn login(State(recorder): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    recorder.record("/api/auth/login", &headers, body.clone());
    if body["password"] == "secret" {
        Json(json!({
            "token": "tok-123",
            "user": { "email": body["email"], "name": "Dana Reyes", "role": "client" }
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid email or password" })),
        )
            .into_response()
    }
}

async fn consultation(State(recorder): Shared, headers: HeaderMap, Json(body): Json<Value>) -> StatusCode {
    recorder.record("/api/consultation", &headers, body);
    StatusCode::CREATED
}

async fn checklist(State(recorder): Shared, headers: HeaderMap, Json(body): Json<Value>) -> StatusCode {
    recorder.record("/api/checklist", &headers, body);
    StatusCode::CREATED
}

async fn blog() -> Json<Value> {
    Json(json!({
        "posts": [{
            "id": "p1",
            "title": "Year-End Tax Tips",
            "slug": "year-end-tax-tips",
            "excerpt": "Five things to do before December 31.",
            "author": "Dana Reyes",
            "publishedAt": "2024-11-15T09:00:00Z"
        }]
    }))
}

async fn admin_content(State(recorder): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    recorder.record("/api/admin/content", &headers, body);
    if headers.contains_key(header::AUTHORIZATION) {
        StatusCode::OK.into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Login required" }))).into_response()
    }
}
