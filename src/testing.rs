//! In-process stand-in for the lead-capture API, used by the test suites.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Lead {
    pub id: Value,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Deserialize)]
struct CreateLead {
    name: String,
    email: String,
    phone: String,
}

/// Knobs for simulating a misbehaving API.
#[derive(Clone, Copy)]
pub struct MockBehavior {
    pub root_status: StatusCode,
    pub leads_delay: Duration,
    pub list_as_object: bool,
    pub numeric_ids: bool,
}

impl Default for MockBehavior {
    fn default() -> Self {
        MockBehavior {
            root_status: StatusCode::OK,
            leads_delay: Duration::ZERO,
            list_as_object: false,
            numeric_ids: false,
        }
    }
}

#[derive(Clone)]
struct MockState {
    behavior: MockBehavior,
    leads: Arc<Mutex<Vec<Lead>>>,
}

pub struct MockApi {
    base_url: String,
    leads: Arc<Mutex<Vec<Lead>>>,
}

impl MockApi {
    pub async fn spawn() -> MockApi {
        Self::spawn_with(MockBehavior::default()).await
    }

    pub async fn spawn_with(behavior: MockBehavior) -> MockApi {
        let leads = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            behavior,
            leads: Arc::clone(&leads),
        };
        let router = Router::new()
            .route("/api/", get(root))
            .route("/api/leads", get(list_leads).post(create_lead))
            .route("/api/plain", get(|| async { "pong" }))
            .route(
                "/api/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    "late"
                }),
            )
            .with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        MockApi {
            base_url: format!("http://{}", address),
            leads,
        }
    }

    /// A base URL on a port nothing listens on.
    pub async fn unreachable_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", address)
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn leads(&self) -> Vec<Lead> {
        self.leads.lock().unwrap().clone()
    }
}

async fn root(State(state): State<MockState>) -> (StatusCode, Json<Value>) {
    (
        state.behavior.root_status,
        Json(json!({"message": "Hello World"})),
    )
}

async fn create_lead(State(state): State<MockState>, Json(body): Json<CreateLead>) -> Json<Lead> {
    tokio::time::sleep(state.behavior.leads_delay).await;
    let mut leads = state.leads.lock().unwrap();
    let id = if state.behavior.numeric_ids {
        json!(leads.len() + 1)
    } else {
        json!(uuid::Uuid::new_v4().to_string())
    };
    let lead = Lead {
        id,
        name: body.name,
        email: body.email,
        phone: body.phone,
    };
    leads.push(lead.clone());
    Json(lead)
}

async fn list_leads(State(state): State<MockState>) -> Json<Value> {
    let leads = state.leads.lock().unwrap().clone();
    if state.behavior.list_as_object {
        Json(json!({"leads": leads}))
    } else {
        Json(json!(leads))
    }
}
