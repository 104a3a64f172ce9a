use maud::{html, Markup};

/// Spinner that loads `resolve_url` into `#events-view` as soon as it is shown
pub fn loading_indicator(resolve_url: &str) -> Markup {
    html! {
        div class="is-flex is-justify-content-center is-align-items-center py-5"
            hx-get=(resolve_url)
            hx-trigger="load"
            hx-target="#events-view"
            hx-swap="outerHTML"
            hx-sync="#events-view:replace" {
            span class="spinner" role="status" {
                span class="is-sr-only" { "Loading..." }
            }
        }
    }
}
