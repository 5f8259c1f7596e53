use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    contact::{self, Contact, SaveContactRequest},
    dashboard::{self, DashboardSummary, NamedCount},
    deal::{self, CreateDealRequest, Deal, DealStatus, UpdateDealStatusRequest},
    lead::{self, Lead, LeadNote, LeadSource, LeadStatus, SaveLeadRequest},
    notification::{
        self, MarkAllReadResponse, Notification, NotificationClickResponse, NotificationFeedResponse,
        NotificationKind, NotificationResponse, ReminderEvent, View,
    },
    session::{self, SessionStatus},
    state::AppState,
    task::{self, CreateTaskRequest, ReminderOffset, Task, TaskPriority, UpdateTaskRequest},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        session::session_handlers::get_session,
        session::session_handlers::login,
        session::session_handlers::logout,
        task::task_handlers::get_tasks,
        task::task_handlers::get_task,
        task::task_handlers::create_task,
        task::task_handlers::update_task,
        task::task_handlers::toggle_task,
        task::task_handlers::delete_task,
        lead::lead_handlers::get_leads,
        lead::lead_handlers::get_lead,
        lead::lead_handlers::create_lead,
        lead::lead_handlers::update_lead,
        lead::lead_handlers::delete_lead,
        contact::contact_handlers::get_contacts,
        contact::contact_handlers::get_contact,
        contact::contact_handlers::create_contact,
        contact::contact_handlers::update_contact,
        contact::contact_handlers::delete_contact,
        deal::deal_handlers::get_deals,
        deal::deal_handlers::create_deal,
        deal::deal_handlers::update_deal_status,
        deal::deal_handlers::delete_deal,
        notification::notification_handlers::get_notifications,
        notification::notification_handlers::mark_notification_read,
        notification::notification_handlers::mark_all_notifications_read,
        notification::notification_handlers::notification_stream,
        dashboard::dashboard_handlers::get_dashboard,
    ),
    components(
        schemas(
            SessionStatus,
            Task,
            TaskPriority,
            ReminderOffset,
            CreateTaskRequest,
            UpdateTaskRequest,
            Lead,
            LeadNote,
            LeadSource,
            LeadStatus,
            SaveLeadRequest,
            Contact,
            SaveContactRequest,
            Deal,
            DealStatus,
            CreateDealRequest,
            UpdateDealStatusRequest,
            Notification,
            NotificationKind,
            NotificationResponse,
            NotificationFeedResponse,
            NotificationClickResponse,
            MarkAllReadResponse,
            ReminderEvent,
            View,
            DashboardSummary,
            NamedCount,
        )
    ),
    tags(
        (name = "session", description = "Session lifecycle"),
        (name = "tasks", description = "Task management endpoints"),
        (name = "leads", description = "Lead management endpoints"),
        (name = "contacts", description = "Contact directory endpoints"),
        (name = "deals", description = "Deal pipeline endpoints"),
        (name = "notifications", description = "Notification feed and reminder stream"),
        (name = "dashboard", description = "Dashboard figures")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let session_routes = Router::new()
        .route("/", get(session::get_session))
        .route("/login", post(session::login))
        .route("/logout", post(session::logout));

    let task_routes = Router::new()
        .route("/", get(task::get_tasks).post(task::create_task))
        .route(
            "/:id",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        )
        .route("/:id/toggle", patch(task::toggle_task));

    let lead_routes = Router::new()
        .route("/", get(lead::get_leads).post(lead::create_lead))
        .route(
            "/:id",
            get(lead::get_lead)
                .put(lead::update_lead)
                .delete(lead::delete_lead),
        );

    let contact_routes = Router::new()
        .route("/", get(contact::get_contacts).post(contact::create_contact))
        .route(
            "/:id",
            get(contact::get_contact)
                .put(contact::update_contact)
                .delete(contact::delete_contact),
        );

    let deal_routes = Router::new()
        .route("/", get(deal::get_deals).post(deal::create_deal))
        .route("/:id", axum::routing::delete(deal::delete_deal))
        .route("/:id/status", patch(deal::update_deal_status));

    let notification_routes = Router::new()
        .route("/", get(notification::get_notifications))
        .route("/stream", get(notification::notification_stream))
        .route("/read-all", patch(notification::mark_all_notifications_read))
        .route("/:id/read", patch(notification::mark_notification_read));

    let api_routes = Router::new()
        .nest("/session", session_routes)
        .nest("/tasks", task_routes)
        .nest("/leads", lead_routes)
        .nest("/contacts", contact_routes)
        .nest("/deals", deal_routes)
        .nest("/notifications", notification_routes)
        .route("/dashboard", get(dashboard::get_dashboard));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        reminder::{BroadcastNotifier, PermissionState, ReminderNotifier},
        seed,
        state::Config,
        store::CrmStore,
    };
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use futures::StreamExt;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> (Router, AppState) {
        let store = CrmStore::new(seed::demo_data(Utc::now().date_naive()));
        let state = AppState::new(&Config::default(), store);
        (create_router(state.clone()), state)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(json) => Body::from(json.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_task_crud_over_http() {
        let (app, _) = app();

        let (status, created) = send(
            &app,
            "POST",
            "/api/tasks",
            Some(json!({
                "title": "Send contract",
                "dueDate": "2025-10-01",
                "dueTime": "16:00",
                "relatedTo": "Deal: Design Overhaul",
                "priority": "High",
                "reminder": "1h"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["reminder"], "1h");
        let id = created["id"].as_str().unwrap().to_string();

        let (status, toggled) = send(&app, "PATCH", &format!("/api/tasks/{}/toggle", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(toggled["completed"], true);

        let (status, _) = send(&app, "DELETE", &format!("/api/tasks/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, "GET", &format!("/api/tasks/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Task not found");
    }

    #[tokio::test]
    async fn test_invalid_due_time_is_rejected() {
        let (app, _) = app();

        let (status, _) = send(
            &app,
            "POST",
            "/api/tasks",
            Some(json!({ "title": "Lunch", "dueDate": "2025-10-01", "dueTime": "noon" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_notification_feed_flow() {
        let (app, state) = app();
        state.notification_service.seed_feed(Utc::now()).await;

        let (status, feed) = send(&app, "GET", "/api/notifications", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(feed["unreadCount"], 2);
        assert_eq!(feed["notifications"][0]["type"], "task");

        let (status, opened) =
            send(&app, "PATCH", "/api/notifications/notif_lead_lead_002/read", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(opened["navigateTo"], "leads");
        assert_eq!(opened["lead"]["name"], "Jane Doe");

        let (status, body) = send(&app, "PATCH", "/api/notifications/read-all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["updated"], 1);

        let (_, feed) = send(&app, "GET", "/api/notifications", None).await;
        assert_eq!(feed["unreadCount"], 0);
    }

    #[tokio::test]
    async fn test_deal_status_move_and_dashboard() {
        let (app, _) = app();

        let (status, deal) = send(
            &app,
            "PATCH",
            "/api/deals/deal_001/status",
            Some(json!({ "status": "Closed - Won" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deal["status"], "Closed - Won");

        let (status, summary) = send(&app, "GET", "/api/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["totalRevenue"], 12500.0);
        assert_eq!(summary["dealsInProgress"], 2);
    }

    #[tokio::test]
    async fn test_lead_validation() {
        let (app, _) = app();

        let (status, _) = send(
            &app,
            "POST",
            "/api/leads",
            Some(json!({
                "name": "Sam Park",
                "company": "Nimbus",
                "email": "not-an-email",
                "status": "New",
                "value": 1000.0,
                "lastContact": "2025-09-21",
                "source": "Event"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_contact_crud_over_http() {
        let (app, _) = app();

        let (status, found) = send(&app, "GET", "/api/contacts?search=partner", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found.as_array().unwrap().len(), 1);
        assert_eq!(found[0]["name"], "Sarah Chen");

        let (status, created) = send(
            &app,
            "POST",
            "/api/contacts",
            Some(json!({
                "name": "Sam Park",
                "company": "Nimbus",
                "phone": "555-2468",
                "email": "sam@nimbus.io",
                "tags": [" Prospect ", ""]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["tags"], json!(["Prospect"]));
        let id = created["id"].as_str().unwrap().to_string();

        let (status, updated) = send(
            &app,
            "PUT",
            &format!("/api/contacts/{}", id),
            Some(json!({
                "name": "Sam Park",
                "company": "Nimbus Cloud",
                "phone": "555-2468",
                "email": "sam@nimbus.io"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["company"], "Nimbus Cloud");

        let (status, _) = send(
            &app,
            "POST",
            "/api/contacts",
            Some(json!({ "name": "Bad", "company": "", "phone": "", "email": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "DELETE", &format!("/api/contacts/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, "GET", &format!("/api/contacts/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Contact not found");
    }

    #[tokio::test]
    async fn test_reminder_stream_emits_event() {
        let (app, state) = app();

        let request = Request::builder()
            .uri("/api/notifications/stream")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "text/event-stream"
        );

        let notifier = BroadcastNotifier::new(state.reminder_tx.clone(), PermissionState::Granted, true);
        let task = seed::demo_tasks(Utc::now().date_naive()).remove(1);
        notifier.deliver(&task).unwrap();

        let mut body = response.into_body().into_data_stream();
        let mut frame = String::new();
        while !frame.contains("\n\n") {
            let chunk = tokio::time::timeout(Duration::from_secs(5), body.next())
                .await
                .unwrap()
                .unwrap()
                .unwrap();
            frame.push_str(std::str::from_utf8(&chunk).unwrap());
        }

        assert!(frame.contains("event: reminder"));
        assert!(frame.contains(&format!("\"taskId\":\"{}\"", task.id)));
        assert!(frame.contains("Task Reminder"));
    }
}
