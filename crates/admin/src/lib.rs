pub mod repository;
pub mod routes;
mod startup;
pub mod templates;
mod utils;
pub mod view;

pub use repository::*;
pub use routes::*;
pub use startup::*;
pub use utils::*;
pub use view::{Dialog, EventListView, FetchTicket, PageState, ViewMode};
