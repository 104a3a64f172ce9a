use maud::{html, Markup};

use crate::{
    templates::{page_url, pending_url},
    view::PageState,
};

/// « Page N » controls. A control that would not change the page is disabled.
pub fn pager(state: &PageState) -> Markup {
    let prev = state.prev_target();
    let next = state.next_target();

    html! {
        nav class="is-flex is-justify-content-center mt-4" aria-label="pagination" {
            div class="buttons has-addons" {
                (pager_button("«", "Previous page", prev, state))
                button class="button is-static pager-label" { "Page " (state.current_page) }
                (pager_button("»", "Next page", next, state))
            }
        }
    }
}

fn pager_button(label: &str, aria_label: &str, target: u32, state: &PageState) -> Markup {
    html! {
        button class="button"
               aria-label=(aria_label)
               disabled[target == state.current_page]
               hx-get=(pending_url(target, state.max_page))
               hx-target="#events-view"
               hx-swap="outerHTML"
               hx-sync="#events-view:replace"
               hx-push-url=(page_url(target, state.max_page)) {
            (label)
        }
    }
}
