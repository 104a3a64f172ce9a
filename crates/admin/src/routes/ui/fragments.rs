use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Html,
};

use super::events::EventsQuery;
use crate::{view::EventListView, AppState};

/// Handler for the loading state of a page (GET /fragments/events/pending)
pub async fn pending_events_handler(
    query: Result<Query<EventsQuery>, QueryRejection>,
) -> Html<String> {
    let mut view = EventsQuery::from_query(query).mount();
    view.begin_fetch();
    Html(view.render().into_string())
}

/// Handler that fetches a page and renders the outcome (GET /fragments/events)
/// Fetch failures are rendered in place of the table, never as an error status.
pub async fn events_view_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EventsQuery>, QueryRejection>,
) -> Html<String> {
    let mut view = EventsQuery::from_query(query).mount();
    view.fetch_page(state.events.as_ref()).await;
    Html(view.render().into_string())
}

/// Handler for GET /fragments/dialogs/add-event
pub async fn add_event_dialog_handler() -> Html<String> {
    let mut view = EventListView::default();
    view.open_add_dialog();
    Html(view.render_dialog().into_string())
}

/// Handler for GET /fragments/dialogs/delete-event/{event_id}
pub async fn delete_event_dialog_handler(Path(event_id): Path<i64>) -> Html<String> {
    let mut view = EventListView::default();
    view.open_delete_dialog(event_id);
    Html(view.render_dialog().into_string())
}

/// Handler for GET /fragments/dialogs/close
pub async fn close_dialog_handler() -> Html<String> {
    let mut view = EventListView::default();
    view.close_dialog();
    Html(view.render_dialog().into_string())
}
