mod events;
mod fragments;

pub use events::{events_handler, index_handler, EventsQuery};
pub use fragments::{
    add_event_dialog_handler, close_dialog_handler, delete_event_dialog_handler,
    events_view_handler, pending_events_handler,
};
