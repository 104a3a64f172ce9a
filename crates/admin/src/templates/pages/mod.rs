pub mod events;

pub use events::{events_content, events_page};
