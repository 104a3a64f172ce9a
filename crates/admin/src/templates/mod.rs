pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::{dialog, events_table, events_view};
pub use layouts::PageConfig;
pub use pages::{events_content, events_page};

/// Full page URL for a page of the event list
pub fn page_url(page: u32, max_page: u32) -> String {
    format!("/events?page={}&max_page={}", page, max_page)
}

/// Fragment URL rendering the loading state for a page
pub fn pending_url(page: u32, max_page: u32) -> String {
    format!("/fragments/events/pending?page={}&max_page={}", page, max_page)
}

/// Fragment URL that performs the fetch and renders its outcome
pub fn resolved_url(page: u32, max_page: u32) -> String {
    format!("/fragments/events?page={}&max_page={}", page, max_page)
}
