//! In-process stand-in for the remote ticket service.
//!
//! Serves `GET /tickets` and `PATCH /tickets/{id}` from memory on an
//! ephemeral port, records what it received and can be told to fail.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde_json::{Value, json};

/// Build a wire-format ticket record
pub fn ticket_json(id: &str, email: &str, category: &str, is_paid: bool, is_used: bool) -> Value {
    json!({
        "ticketId": id,
        "email": email,
        "category": category,
        "quantity": 1,
        "amount": 50,
        "isPaid": is_paid,
        "isUsed": is_used,
        "purchaseDate": "2025-01-01T10:00:00Z",
    })
}

#[derive(Clone, Default)]
struct Shared {
    tickets: Arc<Mutex<Vec<Value>>>,
    patches: Arc<Mutex<Vec<(String, Value)>>>,
    authorization: Arc<Mutex<Vec<Option<String>>>>,
    fail_list: Arc<AtomicBool>,
    fail_patch: Arc<AtomicBool>,
}

impl Shared {
    fn record_auth(&self, headers: &HeaderMap) {
        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.authorization.lock().unwrap().push(value);
    }
}

pub struct FakeTicketService {
    pub url: String,
    shared: Shared,
}

impl FakeTicketService {
    /// Start serving `tickets` on 127.0.0.1 in a background thread
    pub fn start(tickets: Vec<Value>) -> Self {
        let shared = Shared {
            tickets: Arc::new(Mutex::new(tickets)),
            ..Default::default()
        };

        let app = Router::new()
            .route("/tickets", get(list_tickets))
            .route("/tickets/:id", patch(patch_ticket))
            .with_state(shared.clone());

        let (tx, rx) = std::sync::mpsc::channel::<SocketAddr>();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind");
                tx.send(listener.local_addr().expect("local addr"))
                    .expect("Failed to report address");
                axum::serve(listener, app).await.expect("server error");
            });
        });

        let addr = rx.recv().expect("Fake service did not start");
        FakeTicketService {
            url: format!("http://{addr}"),
            shared,
        }
    }

    pub fn fail_list(&self, fail: bool) {
        self.shared.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_patch(&self, fail: bool) {
        self.shared.fail_patch.store(fail, Ordering::SeqCst);
    }

    /// Every PATCH received, as (decoded id, body)
    pub fn patches(&self) -> Vec<(String, Value)> {
        self.shared.patches.lock().unwrap().clone()
    }

    /// Authorization header of every request, in arrival order
    pub fn authorization_headers(&self) -> Vec<Option<String>> {
        self.shared.authorization.lock().unwrap().clone()
    }

    /// Server-side `isUsed` of a ticket
    pub fn is_used(&self, ticket_id: &str) -> Option<bool> {
        self.shared
            .tickets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t["ticketId"] == ticket_id)
            .and_then(|t| t["isUsed"].as_bool())
    }
}

async fn list_tickets(State(shared): State<Shared>, headers: HeaderMap) -> Response {
    shared.record_auth(&headers);
    if shared.fail_list.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    let tickets = shared.tickets.lock().unwrap().clone();
    Json(Value::Array(tickets)).into_response()
}

async fn patch_ticket(
    State(shared): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    shared.record_auth(&headers);
    shared.patches.lock().unwrap().push((id.clone(), body.clone()));
    if shared.fail_patch.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    let mut tickets = shared.tickets.lock().unwrap();
    match tickets.iter_mut().find(|t| t["ticketId"] == id.as_str()) {
        Some(ticket) => {
            ticket["isUsed"] = body["isUsed"].clone();
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}
