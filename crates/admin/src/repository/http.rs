use async_trait::async_trait;
use log::debug;
use reqwest::{header::ACCEPT, Client, StatusCode};
use serde::Deserialize;

use super::{EventPage, EventRepository, FetchError, PageQuery};

/// Event repository backed by the REST API
pub struct HttpEventRepository {
    client: Client,
    api_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpEventRepository {
    pub fn new(api_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("events-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, api_url))
    }

    pub fn with_client(client: Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    fn events_url(&self) -> String {
        format!("{}/events", self.api_url)
    }
}

#[async_trait]
impl EventRepository for HttpEventRepository {
    async fn get_all_events(&self, query: PageQuery) -> Result<EventPage, FetchError> {
        let url = self.events_url();
        debug!("requesting: {} page {}", url, query.page);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice::<EventPage>(&body).map_err(|e| FetchError::new(e.to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_connect() || e.is_timeout() {
        FetchError::new("Network Error")
    } else {
        FetchError::new(e.to_string())
    }
}

fn status_error(status: StatusCode, body: &[u8]) -> FetchError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { message }) if !message.is_empty() => FetchError::new(message),
        _ => FetchError::new(format!(
            "Request failed with status code {}",
            status.as_u16()
        )),
    }
}
