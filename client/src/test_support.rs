//! Test utilities for the client crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for `cfg(test)` and behind the `test-support` feature.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::ports::{
    HttpTransport, Navigator, TransportError, TransportRequest, TransportResponse,
};
use crate::domain::{
    CostBreakdown, RequestStatus, TravelPlan, TravelRequest, TravelRequestRecord, User,
};
use crate::http::{ApiClient, ClientConfig, ClientError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Encode `data` inside a success envelope (`code: 0`).
///
/// Values that fail to serialise are sent as `null`.
pub fn envelope_bytes<T: Serialize + ?Sized>(data: &T) -> Vec<u8> {
    let data = serde_json::to_value(data).unwrap_or(Value::Null);
    json!({ "code": 0, "message": "success", "data": data })
        .to_string()
        .into_bytes()
}

/// Transport that replays queued replies and records every request.
///
/// When the queue runs dry it answers with a network error, so a test that
/// triggers an unexpected call fails loudly.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    sent: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    /// Empty script.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a raw response.
    pub fn reply(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        lock(&self.replies).push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    /// Queue `200` with `data` wrapped in a success envelope.
    pub fn reply_data<T: Serialize + ?Sized>(&self, data: &T) -> &Self {
        self.reply(200, envelope_bytes(data))
    }

    /// Queue `status` with `body` encoded as JSON.
    pub fn reply_json(&self, status: u16, body: &Value) -> &Self {
        self.reply(status, body.to_string())
    }

    /// Queue a transport failure.
    pub fn fail(&self, err: TransportError) -> &Self {
        lock(&self.replies).push_back(Err(err));
        self
    }

    /// Most recent request.
    pub fn last_request(&self) -> Option<TransportRequest> {
        lock(&self.sent).last().cloned()
    }

    /// Replies not yet consumed.
    pub fn pending(&self) -> usize {
        lock(&self.replies).len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let url = request.url.to_string();
        lock(&self.sent).push(request);
        let next = lock(&self.replies).pop_front();
        next.unwrap_or_else(|| {
            let message = format!("no scripted reply for {url}");
            Err(TransportError::network(message))
        })
    }
}

/// Build a client for `http://api.test/api/v1` on top of `transport`.
///
/// # Errors
///
/// Propagates [`ApiClient`] builder failures.
pub fn scripted_client(transport: &Arc<ScriptedTransport>) -> Result<ApiClient, ClientError> {
    let config = ClientConfig::parse("http://api.test/api/v1")
        .map_err(|err| ClientError::request(err.to_string()))?;
    ApiClient::builder(config)
        .transport(Arc::clone(transport) as Arc<dyn HttpTransport>)
        .build()
}

/// Navigator that remembers every route it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Routes visited, in order.
    pub fn routes(&self) -> Vec<String> {
        lock(&self.routes).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        lock(&self.routes).push(route.to_owned());
    }
}

/// A signed-in traveller.
pub fn sample_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Lin Wei".to_owned(),
        email: "lin.wei@example.com".to_owned(),
        phone: None,
        created_at: Some("2025-01-01T00:00:00Z".to_owned()),
    }
}

/// A three-day domestic trip.
pub fn sample_request() -> TravelRequest {
    TravelRequest {
        destination: "Hangzhou".to_owned(),
        departure_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap_or(NaiveDate::MIN),
        return_date: NaiveDate::from_ymd_opt(2025, 5, 3).unwrap_or(NaiveDate::MIN),
        people_count: 2,
        budget: 6000.0,
        is_domestic: true,
        preferences: Some(vec!["tea".to_owned(), "lakes".to_owned()]),
        special_requirements: None,
    }
}

/// `sample_request` as stored by the backend.
pub fn sample_record(request_id: &str) -> TravelRequestRecord {
    TravelRequestRecord {
        request_id: request_id.to_owned(),
        user_id: "u-1".to_owned(),
        status: RequestStatus::Pending,
        created_at: "2025-04-01T09:00:00Z".to_owned(),
        request: sample_request(),
    }
}

/// A minimal plan with no itinerary days.
pub fn sample_plan(plan_id: &str) -> TravelPlan {
    TravelPlan {
        plan_id: plan_id.to_owned(),
        request_id: "r-1".to_owned(),
        plan_name: format!("Plan {plan_id}"),
        description: "West Lake and tea villages".to_owned(),
        total_cost: 5200.0,
        daily_itinerary: Vec::new(),
        cost_breakdown: CostBreakdown {
            transportation: 800.0,
            accommodation: 2400.0,
            meals: 1200.0,
            attractions: 600.0,
            other: 200.0,
            total: 5200.0,
        },
        highlights: vec!["West Lake".to_owned()],
        notes: None,
        created_at: "2025-04-01T10:00:00Z".to_owned(),
    }
}
