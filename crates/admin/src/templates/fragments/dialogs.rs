use maud::{html, Markup};

use crate::view::Dialog;

const CLOSE_URL: &str = "/fragments/dialogs/close";

/// Contents of `#dialog-root` for the given dialog state
pub fn dialog(dialog: &Dialog) -> Markup {
    match dialog {
        Dialog::Closed => html! {},
        Dialog::AddEvent => add_event_modal(),
        Dialog::DeleteEvent { event_id } => delete_event_modal(*event_id),
    }
}

// The create button has no handler yet
fn add_event_modal() -> Markup {
    html! {
        div class="modal is-active" id="add-event-modal" {
            (modal_background())
            div class="modal-card" {
                header class="modal-card-head" {
                    p class="modal-card-title" { "Add event" }
                    (close_button())
                }
                section class="modal-card-body" {
                    form id="add-event-form" {
                        div class="columns" {
                            div class="column is-two-thirds field" {
                                label class="label" for="input_title" {
                                    "Title" span class="has-text-danger" { "*" }
                                }
                                div class="control" {
                                    input id="input_title" name="title" class="input"
                                          type="text" placeholder="Type here" required;
                                }
                            }
                            div class="column field" {
                                label class="label" for="input_amount" { "Amount" }
                                div class="control" {
                                    input id="input_amount" name="amount" class="input"
                                          type="text" placeholder="Type here";
                                }
                            }
                        }
                        div class="columns" {
                            div class="column field" {
                                label class="label" for="input_start_date" {
                                    "Start date" span class="has-text-danger" { "*" }
                                }
                                div class="control" {
                                    input id="input_start_date" name="start_date" class="input"
                                          type="date" required;
                                }
                            }
                            div class="column field" {
                                label class="label" for="input_end_date" { "End date" }
                                div class="control" {
                                    input id="input_end_date" name="end_date" class="input"
                                          type="date";
                                }
                            }
                        }
                    }
                }
                footer class="modal-card-foot is-justify-content-flex-end" {
                    button class="button is-primary" type="button" { "Create" }
                }
            }
        }
    }
}

fn delete_event_modal(event_id: i64) -> Markup {
    html! {
        div class="modal is-active" id="delete-event-modal" {
            (modal_background())
            div class="modal-card" {
                section class="modal-card-body has-text-centered py-6" {
                    h3 class="title is-4" {
                        "Are you sure you want to delete event #" (event_id) "?"
                    }
                    div class="buttons is-centered mt-5" {
                        button class="button is-danger" type="button"
                               data-event-id=(event_id) {
                            "Delete"
                        }
                        button class="button"
                               type="button"
                               hx-get=(CLOSE_URL)
                               hx-target="#dialog-root"
                               hx-swap="innerHTML" {
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

fn modal_background() -> Markup {
    html! {
        div class="modal-background"
            hx-get=(CLOSE_URL)
            hx-target="#dialog-root"
            hx-swap="innerHTML" {}
    }
}

fn close_button() -> Markup {
    html! {
        button class="delete" aria-label="close"
               type="button"
               hx-get=(CLOSE_URL)
               hx-target="#dialog-root"
               hx-swap="innerHTML" {}
    }
}
