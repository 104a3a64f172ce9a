mod http;

pub use http::HttpEventRepository;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

/// An event as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub start_date: String,
    /// Events without an end date come back as `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end_date: String,
    /// Opaque user references, never inspected by the admin page
    #[serde(rename = "users", default)]
    pub participants: Vec<serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of the event collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPage {
    pub data: Vec<EventRecord>,
    pub last_page: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: u32,
}

/// The only failure the event list surfaces; the message is shown verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn get_all_events(&self, query: PageQuery) -> Result<EventPage, FetchError>;
}
