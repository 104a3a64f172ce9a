mod loading;
mod pager;

pub use loading::loading_indicator;
pub use pager::pager;
