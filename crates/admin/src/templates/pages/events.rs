use maud::{html, Markup};

use crate::{
    templates::{
        fragments::events_view,
        layouts::{base, PageConfig},
    },
    view::PageState,
};

/// Events page - the list area starts out in whatever state `state` is in
pub fn events_page(state: &PageState) -> Markup {
    let config = PageConfig {
        title: "Events Admin - Events",
    };

    base(&config, events_content(state))
}

pub fn events_content(state: &PageState) -> Markup {
    html! {
        div class="is-flex is-justify-content-space-between is-align-items-center mb-4" {
            h2 class="title is-5 mb-0" { "Events" }

            button class="button is-link"
                   hx-get="/fragments/dialogs/add-event"
                   hx-target="#dialog-root"
                   hx-swap="innerHTML" {
                "Add event"
            }
        }

        (events_view(state))

        div id="dialog-root" {}
    }
}
