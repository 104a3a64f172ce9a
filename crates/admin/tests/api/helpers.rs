use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use events_admin::{app, AppState, EventPage, EventRecord, EventRepository, FetchError, PageQuery};
use hyper::{header, Method, StatusCode};
use mockall::mock;
use std::sync::Arc;
use tower::ServiceExt;

mock! {
    pub EventRepo {}

    #[async_trait]
    impl EventRepository for EventRepo {
        async fn get_all_events(&self, query: PageQuery) -> Result<EventPage, FetchError>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app(events: Arc<dyn EventRepository>) -> TestApp {
    let app_state = AppState {
        static_dir: String::from("./static"),
        events,
    };

    TestApp {
        app: app(app_state),
    }
}

impl TestApp {
    /// GET `uri` as a browser would and return status plus body
    pub async fn get_html(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap();

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}

pub fn mock_event(id: i64, name: &str) -> EventRecord {
    EventRecord {
        id,
        name: name.to_string(),
        description: format!("About {}", name),
        start_date: String::from("2002-07-06"),
        end_date: String::from("2002-07-07"),
        participants: vec![],
    }
}

pub fn mock_page(data: Vec<EventRecord>, last_page: u32) -> EventPage {
    EventPage { data, last_page }
}
