//! View model for the paginated event list.
//!
//! [`EventListView`] owns the [`PageState`] for one render cycle. A fetch is
//! split into [`EventListView::begin_fetch`] and [`EventListView::finish_fetch`]
//! so that each request carries a token; only the latest issued token may
//! change what is displayed.

mod pager;

pub use pager::{next_page, prev_page};

use log::{debug, warn};
use maud::Markup;

use crate::{
    repository::{EventPage, EventRecord, EventRepository, FetchError, PageQuery},
    templates::{dialog, events_view},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub current_page: u32,
    pub max_page: u32,
    pub loading: bool,
    pub error_message: String,
    pub rows: Vec<EventRecord>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// What the event list shows, highest priority first
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode<'a> {
    Loading,
    Error(&'a str),
    Table(&'a [EventRecord]),
    Empty,
}

impl PageState {
    /// Page numbers below 1 are treated as 1.
    pub fn new(current_page: u32, max_page: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            max_page: max_page.max(1),
            loading: false,
            error_message: String::new(),
            rows: Vec::new(),
        }
    }

    pub fn mode(&self) -> ViewMode<'_> {
        if self.loading {
            ViewMode::Loading
        } else if !self.error_message.is_empty() {
            ViewMode::Error(&self.error_message)
        } else if !self.rows.is_empty() {
            ViewMode::Table(&self.rows)
        } else {
            ViewMode::Empty
        }
    }

    /// Page the "next" control leads to
    pub fn next_target(&self) -> u32 {
        next_page(self.current_page, self.max_page)
    }

    /// Page the "previous" control leads to
    pub fn prev_target(&self) -> u32 {
        prev_page(self.current_page)
    }
}

/// Issued by [`EventListView::begin_fetch`], redeemed by [`EventListView::finish_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    token: u64,
    page: u32,
}

impl FetchTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Which modal is open
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    AddEvent,
    DeleteEvent { event_id: i64 },
}

#[derive(Debug, Default)]
pub struct EventListView {
    state: PageState,
    dialog: Dialog,
    issued: u64,
}

impl EventListView {
    /// Mount the view on `page`. The caller issues the first fetch.
    pub fn mount(page: u32, max_page: u32) -> Self {
        Self {
            state: PageState::new(page, max_page),
            ..Default::default()
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Enter the loading state for the current page.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.state.loading = true;
        self.state.error_message.clear();
        FetchTicket {
            token: self.issued,
            page: self.state.current_page,
        }
    }

    /// Apply a fetch outcome. Returns false, leaving the state untouched,
    /// when a newer fetch has been issued since `ticket`.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<EventPage, FetchError>,
    ) -> bool {
        if !self.is_latest(ticket) {
            debug!(
                "discarding stale response for page {} (request {}, latest {})",
                ticket.page, ticket.token, self.issued
            );
            return false;
        }

        match result {
            Ok(page) => {
                debug!(
                    "fetched page {}: {} events, last page {}",
                    ticket.page,
                    page.data.len(),
                    page.last_page
                );
                self.state.rows = page.data;
                self.state.max_page = page.last_page.max(1);
            }
            Err(e) => {
                warn!("failed to fetch events page {}: {}", ticket.page, e);
                self.state.error_message = e.message().to_string();
            }
        }
        self.state.loading = false;
        true
    }

    /// Fetch the current page from `repo` and apply the outcome.
    ///
    /// Dropping the returned future before it resolves still releases the
    /// loading flag.
    pub async fn fetch_page(&mut self, repo: &dyn EventRepository) -> bool {
        let ticket = self.begin_fetch();
        let in_flight = InFlight {
            view: self,
            ticket: Some(ticket),
        };
        let result = repo.get_all_events(PageQuery { page: ticket.page }).await;
        in_flight.complete(result)
    }

    /// Move to the following page, wrapping to the first after the last.
    /// Returns true when the page changed and a fetch is due.
    pub fn next_page(&mut self) -> bool {
        self.go_to(self.state.next_target())
    }

    /// Move to the preceding page, staying on the first.
    /// Returns true when the page changed and a fetch is due.
    pub fn prev_page(&mut self) -> bool {
        self.go_to(self.state.prev_target())
    }

    fn go_to(&mut self, page: u32) -> bool {
        if page == self.state.current_page {
            return false;
        }
        self.state.current_page = page;
        true
    }

    pub fn open_add_dialog(&mut self) {
        self.dialog = Dialog::AddEvent;
    }

    pub fn open_delete_dialog(&mut self, event_id: i64) {
        self.dialog = Dialog::DeleteEvent { event_id };
    }

    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    /// Render the list area for the current state
    pub fn render(&self) -> Markup {
        events_view(&self.state)
    }

    pub fn render_dialog(&self) -> Markup {
        dialog(&self.dialog)
    }

    fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.token == self.issued
    }

    fn abandon_fetch(&mut self, ticket: FetchTicket) {
        if self.is_latest(ticket) {
            debug!("fetch for page {} dropped before completing", ticket.page);
            self.state.loading = false;
        }
    }
}

/// Releases the loading flag if a fetch is dropped mid-flight
struct InFlight<'a> {
    view: &'a mut EventListView,
    ticket: Option<FetchTicket>,
}

impl InFlight<'_> {
    fn complete(mut self, result: Result<EventPage, FetchError>) -> bool {
        match self.ticket.take() {
            Some(ticket) => self.view.finish_fetch(ticket, result),
            None => false,
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.view.abandon_fetch(ticket);
        }
    }
}
