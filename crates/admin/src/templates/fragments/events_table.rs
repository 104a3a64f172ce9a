use maud::{html, Markup};

use super::event_row::event_row;
use crate::{
    repository::EventRecord,
    templates::{
        components::{loading_indicator, pager},
        resolved_url,
    },
    view::{PageState, ViewMode},
};

/// The event list area, swapped as a whole on every page change
pub fn events_view(state: &PageState) -> Markup {
    html! {
        div id="events-view" class="box" {
            @match state.mode() {
                ViewMode::Loading => {
                    (loading_indicator(&resolved_url(state.current_page, state.max_page)))
                }
                ViewMode::Error(message) => {
                    div class="notification is-danger is-light fetch-error" { (message) }
                }
                ViewMode::Table(rows) => {
                    (events_table(rows))
                }
                ViewMode::Empty => {
                    div class="has-text-centered has-text-grey py-6" {
                        p class="is-size-5" { "No events found" }
                    }
                }
            }

            (pager(state))
        }
    }
}

/// Events table, rows numbered from 1 within the page
pub fn events_table(events: &[EventRecord]) -> Markup {
    html! {
        div class="table-container" {
            table class="table is-fullwidth is-striped is-hoverable" {
                thead {
                    tr {
                        th { "" }
                        th { "Event name" }
                        th { "Description" }
                        th { "Start date" }
                        th { "End date" }
                        th { "" }
                    }
                }
                tbody id="events-tbody" {
                    @for (index, event) in events.iter().enumerate() {
                        (event_row(index + 1, event))
                    }
                }
            }
        }
    }
}
