mod dialogs;
mod event_row;
mod events_table;

pub use dialogs::dialog;
pub use event_row::event_row;
pub use events_table::{events_table, events_view};
