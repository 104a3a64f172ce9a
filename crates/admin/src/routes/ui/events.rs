use axum::{
    extract::{rejection::QueryRejection, Query},
    response::{Html, Redirect},
};
use log::debug;
use serde::Deserialize;

use crate::{templates::events_page, view::EventListView};

/// Page position carried in every pager link
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub page: Option<u32>,
    pub max_page: Option<u32>,
}

impl EventsQuery {
    /// Unparseable query strings fall back to the first page
    pub fn from_query(query: Result<Query<EventsQuery>, QueryRejection>) -> Self {
        match query {
            Ok(Query(query)) => query,
            Err(e) => {
                debug!("ignoring invalid events query: {}", e);
                Self::default()
            }
        }
    }

    pub fn mount(&self) -> EventListView {
        EventListView::mount(self.page.unwrap_or(1), self.max_page.unwrap_or(1))
    }
}

/// Handler for GET /
pub async fn index_handler() -> Redirect {
    Redirect::to("/events")
}

/// Handler for the events page (GET /events)
/// The list renders in its loading state and fetches itself once shown.
pub async fn events_handler(query: Result<Query<EventsQuery>, QueryRejection>) -> Html<String> {
    let mut view = EventsQuery::from_query(query).mount();
    view.begin_fetch();
    Html(events_page(view.state()).into_string())
}
