//! Pagination module
//!
//! Cursor-based paging shared by every list operation: an optional page size
//! clamped to the service maximum, an optional emit limit across pages, and a
//! manual mode that fetches one page and hands its token back.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{Collected, Page, PageRequest, PagingMode, PagingOptions};
