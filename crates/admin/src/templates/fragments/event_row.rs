use maud::{html, Markup};

use crate::repository::EventRecord;

/// Single event row for the events table
pub fn event_row(position: usize, event: &EventRecord) -> Markup {
    html! {
        tr class="event-row" {
            td { (position) }

            // Detail page is served elsewhere
            td {
                a href=(format!("/events/{}", event.id)) { (event.name) }
            }

            td { (event.description) }

            td {
                span class="is-size-7" { (event.start_date) }
            }

            td {
                span class="is-size-7" { (event.end_date) }
            }

            td {
                div class="buttons are-small is-flex-wrap-nowrap" {
                    a href=(format!("/events/{}/update", event.id))
                      class="button is-success is-light" {
                        "Update"
                    }
                    button class="button is-danger is-light"
                           hx-get=(format!("/fragments/dialogs/delete-event/{}", event.id))
                           hx-target="#dialog-root"
                           hx-swap="innerHTML" {
                        "Delete"
                    }
                }
            }
        }
    }
}
