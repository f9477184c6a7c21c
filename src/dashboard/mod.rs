//! The page registry: every page of the site built once at startup and
//! looked up by key or URL path.

mod page;
mod registry;

pub use page::{NavEntry, Page, PageKey, Section, UnknownPageKey};
pub use registry::{
    Dashboard, DashboardSettings, DEFAULT_MIN_SONGS_PER_ARTIST, DEFAULT_SUBJECT, DEFAULT_TITLE,
};
