use crate::{
    add_event_dialog_handler, close_dialog_handler, delete_event_dialog_handler,
    events_handler, events_view_handler, index_handler, pending_events_handler,
    EventRepository, HttpEventRepository,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

#[derive(Clone)]
pub struct AppState {
    pub static_dir: String,
    pub events: Arc<dyn EventRepository>,
}

pub fn build_app_state(api_url: String, static_dir: String) -> Result<AppState, anyhow::Error> {
    let events = Arc::new(
        HttpEventRepository::new(api_url)
            .map_err(|e| anyhow!("error setting up event api client: {}", e))?,
    );

    Ok(AppState { static_dir, events })
}

pub fn app(app_state: AppState) -> Router {
    let serve_static = ServeDir::new(&app_state.static_dir);
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // UI routes
        .route("/", get(index_handler))
        .route("/events", get(events_handler))
        // HTMX fragment routes
        .route("/fragments/events", get(events_view_handler))
        .route("/fragments/events/pending", get(pending_events_handler))
        .route("/fragments/dialogs/add-event", get(add_event_dialog_handler))
        .route(
            "/fragments/dialogs/delete-event/{event_id}",
            get(delete_event_dialog_handler),
        )
        .route("/fragments/dialogs/close", get(close_dialog_handler))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .nest_service("/static", serve_static)
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_string();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, path: {}, time: {}", response.status().as_str(), path, response_time);

    response
}
