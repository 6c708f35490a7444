//! Event collection endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use serde::Deserialize;
use uuid::Uuid;

use dayplan_core::{Event, EventDraft};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/{id}", put(update_event).delete(delete_event))
        .route(
            "/api/events-list",
            post(create_events).put(update_events).delete(delete_events),
        )
        .route("/api/reset", post(reset))
}

/// GET /api/events - the full current collection
async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.events().await)
}

/// POST /api/events - create one event, assigning its id
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let event = state
        .commit(|events| {
            let event = draft.into_event(Uuid::new_v4());
            events.push(event.clone());
            Ok::<_, AppError>(event)
        })
        .await?;

    tracing::debug!(id = %event.id, title = %event.title, "event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// POST /api/events-list - create many events in one atomic operation
async fn create_events(
    State(state): State<AppState>,
    Json(drafts): Json<Vec<EventDraft>>,
) -> Result<(StatusCode, Json<Vec<Event>>), AppError> {
    let created = state
        .commit(|events| {
            let created: Vec<Event> = drafts
                .into_iter()
                .map(|draft| draft.into_event(Uuid::new_v4()))
                .collect();
            events.extend(created.iter().cloned());
            Ok::<_, AppError>(created)
        })
        .await?;

    tracing::debug!(count = created.len(), "events created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/events/:id - replace one event
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut event): Json<Event>,
) -> Result<Json<Event>, AppError> {
    // The path id is authoritative.
    event.id = id;

    let updated = state
        .commit(|events| {
            let slot = events
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| AppError::not_found(id))?;
            *slot = event.clone();
            Ok::<_, AppError>(event)
        })
        .await?;

    tracing::debug!(%id, "event updated");
    Ok(Json(updated))
}

/// PUT /api/events-list - replace many events in one atomic operation
async fn update_events(
    State(state): State<AppState>,
    Json(updates): Json<Vec<Event>>,
) -> Result<Json<Vec<Event>>, AppError> {
    let updated = state
        .commit(|events| {
            // All-or-nothing: verify every id before touching anything.
            for update in &updates {
                if !events.iter().any(|e| e.id == update.id) {
                    return Err(AppError::not_found(update.id));
                }
            }
            for update in &updates {
                if let Some(slot) = events.iter_mut().find(|e| e.id == update.id) {
                    *slot = update.clone();
                }
            }
            Ok(updates)
        })
        .await?;

    tracing::debug!(count = updated.len(), "events updated");
    Ok(Json(updated))
}

/// DELETE /api/events/:id - remove one event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .commit(|events| {
            let before = events.len();
            events.retain(|e| e.id != id);
            if events.len() == before {
                return Err(AppError::not_found(id));
            }
            Ok(())
        })
        .await?;

    tracing::debug!(%id, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct DeleteEventsRequest {
    pub ids: Vec<Uuid>,
}

/// DELETE /api/events-list - remove many events in one atomic operation
async fn delete_events(
    State(state): State<AppState>,
    Json(request): Json<DeleteEventsRequest>,
) -> Result<StatusCode, AppError> {
    state
        .commit(|events| {
            for id in &request.ids {
                if !events.iter().any(|e| e.id == *id) {
                    return Err(AppError::not_found(*id));
                }
            }
            events.retain(|e| !request.ids.contains(&e.id));
            Ok(())
        })
        .await?;

    tracing::debug!(count = request.ids.len(), "events deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/reset - test-only: clear the whole collection
async fn reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state
        .commit(|events| {
            events.clear();
            Ok::<_, AppError>(())
        })
        .await?;

    tracing::info!("event collection reset");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Db;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{NaiveDate, NaiveTime};
    use dayplan_core::{Category, RepeatRule};
    use tower::ServiceExt;

    fn test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(Db::new(dir.path().join("events.json"))).unwrap();
        (router().with_state(state), dir)
    }

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: String::new(),
            location: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            category: Category::Work,
            repeat: RepeatRule::none(),
            notification_minutes: 0,
            series_id: None,
        }
    }

    fn json_request(method: &str, uri: &str, body: impl serde::Serialize) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn list(app: &Router) -> Vec<Event> {
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/events"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    async fn create_assigns_id_and_lists_back() {
        let (app, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/events", draft("원본 일정")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Event = body_json(response).await;
        assert_eq!(created.title, "원본 일정");

        let events = list(&app).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, created.id);
    }

    #[tokio::test]
    async fn batch_create_persists_every_sibling() {
        let (app, _dir) = test_app();

        let series_id = Uuid::new_v4();
        let drafts: Vec<EventDraft> = (20..=23)
            .map(|day| {
                let mut d = draft("매일 운동");
                d.date = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
                d.series_id = Some(series_id);
                d
            })
            .collect();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/events-list", drafts))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Vec<Event> = body_json(response).await;
        assert_eq!(created.len(), 4);

        let events = list(&app).await;
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| e.series_id == Some(series_id)));
    }

    #[tokio::test]
    async fn update_replaces_the_record() {
        let (app, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/events", draft("일정")))
            .await
            .unwrap();
        let mut created: Event = body_json(response).await;

        created.date = NaiveDate::from_ymd_opt(2025, 3, 25).unwrap();
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/events/{}", created.id),
                &created,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let events = list(&app).await;
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2025, 3, 25).unwrap());
    }

    #[tokio::test]
    async fn update_unknown_id_is_404() {
        let (app, _dir) = test_app();

        let event = draft("유령").into_event(Uuid::new_v4());
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/events/{}", event.id),
                &event,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let (app, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/events", draft("첫째")))
            .await
            .unwrap();
        let first: Event = body_json(response).await;
        app.clone()
            .oneshot(json_request("POST", "/api/events", draft("둘째")))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(empty_request(
                "DELETE",
                &format!("/api/events/{}", first.id),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let events = list(&app).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "둘째");
    }

    #[tokio::test]
    async fn delete_unknown_id_is_404() {
        let (app, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(empty_request(
                "DELETE",
                &format!("/api/events/{}", Uuid::new_v4()),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn batch_delete_is_all_or_nothing() {
        let (app, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/events", draft("살아남기")))
            .await
            .unwrap();
        let survivor: Event = body_json(response).await;

        // One real id plus one unknown: nothing may be deleted.
        let body = serde_json::json!({ "ids": [survivor.id, Uuid::new_v4()] });
        let response = app
            .clone()
            .oneshot(json_request("DELETE", "/api/events-list", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(list(&app).await.len(), 1);

        let body = serde_json::json!({ "ids": [survivor.id] });
        let response = app
            .clone()
            .oneshot(json_request("DELETE", "/api/events-list", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(list(&app).await.is_empty());
    }

    #[tokio::test]
    async fn reset_clears_the_collection() {
        let (app, _dir) = test_app();

        app.clone()
            .oneshot(json_request("POST", "/api/events", draft("일정")))
            .await
            .unwrap();
        assert_eq!(list(&app).await.len(), 1);

        let response = app
            .clone()
            .oneshot(empty_request("POST", "/api/reset"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(list(&app).await.is_empty());
    }
}
