//! HTTP client for communicating with dayplan-server

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dayplan_core::{Event, EventDraft, EventStore, PlanError, PlanResult};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4310";

/// `EventStore` implementation backed by dayplan-server's REST API.
pub struct HttpEventStore {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct DeleteEventsRequest {
    ids: Vec<Uuid>,
}

impl HttpEventStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpEventStore {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL from `$DAYPLAN_SERVER`, falling back to the default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("DAYPLAN_SERVER").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        HttpEventStore::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /api/reset - clear the whole collection (test environments)
    pub async fn reset(&self) -> PlanResult<()> {
        let resp = self
            .http
            .post(self.url("/api/reset"))
            .send()
            .await
            .map_err(connect_error)?;
        expect_ok(resp).await?;
        Ok(())
    }
}

fn connect_error(err: reqwest::Error) -> PlanError {
    PlanError::Store(format!("Failed to reach dayplan-server: {err}"))
}

/// Decode the server's `{ "error": ... }` body on non-success responses.
async fn expect_ok(resp: reqwest::Response) -> PlanResult<reqwest::Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = match resp.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };
    Err(PlanError::Store(message))
}

async fn json_body<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> PlanResult<T> {
    resp.json()
        .await
        .map_err(|e| PlanError::Store(format!("Invalid server response: {e}")))
}

#[async_trait]
impl EventStore for HttpEventStore {
    /// GET /api/events
    async fn list(&self) -> PlanResult<Vec<Event>> {
        let resp = self
            .http
            .get(self.url("/api/events"))
            .send()
            .await
            .map_err(connect_error)?;
        json_body(expect_ok(resp).await?).await
    }

    /// POST /api/events
    async fn create(&self, draft: EventDraft) -> PlanResult<Event> {
        let resp = self
            .http
            .post(self.url("/api/events"))
            .json(&draft)
            .send()
            .await
            .map_err(connect_error)?;
        json_body(expect_ok(resp).await?).await
    }

    /// POST /api/events-list
    async fn create_batch(&self, drafts: Vec<EventDraft>) -> PlanResult<Vec<Event>> {
        let resp = self
            .http
            .post(self.url("/api/events-list"))
            .json(&drafts)
            .send()
            .await
            .map_err(connect_error)?;
        json_body(expect_ok(resp).await?).await
    }

    /// PUT /api/events/:id
    async fn update(&self, event: Event) -> PlanResult<Event> {
        let resp = self
            .http
            .put(self.url(&format!("/api/events/{}", event.id)))
            .json(&event)
            .send()
            .await
            .map_err(connect_error)?;
        json_body(expect_ok(resp).await?).await
    }

    /// PUT /api/events-list
    async fn update_batch(&self, events: Vec<Event>) -> PlanResult<Vec<Event>> {
        let resp = self
            .http
            .put(self.url("/api/events-list"))
            .json(&events)
            .send()
            .await
            .map_err(connect_error)?;
        json_body(expect_ok(resp).await?).await
    }

    /// DELETE /api/events/:id
    async fn delete(&self, id: Uuid) -> PlanResult<()> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/events/{id}")))
            .send()
            .await
            .map_err(connect_error)?;
        expect_ok(resp).await?;
        Ok(())
    }

    /// DELETE /api/events-list
    async fn delete_batch(&self, ids: Vec<Uuid>) -> PlanResult<()> {
        let resp = self
            .http
            .delete(self.url("/api/events-list"))
            .json(&DeleteEventsRequest { ids })
            .send()
            .await
            .map_err(connect_error)?;
        expect_ok(resp).await?;
        Ok(())
    }
}
