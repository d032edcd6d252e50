//! Pagination types
//!
//! Caller-facing paging options and the page shapes exchanged with fetchers.

use clap::Args;

/// Paging flags shared by every list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct PagingOptions {
    /// Maximum number of items to return across all pages
    #[arg(long, value_name = "N")]
    pub max_items: Option<usize>,

    /// Items requested per call (clamped to the service maximum)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Resume from a continuation token; fetches a single page
    #[arg(long, value_name = "TOKEN", alias = "next-token", alias = "next-page-token")]
    pub starting_token: Option<String>,

    /// Fetch only the first page and print its continuation token
    #[arg(long)]
    pub no_paginate: bool,
}

impl PagingOptions {
    pub fn mode(&self) -> PagingMode {
        if self.starting_token.is_some() || self.no_paginate {
            PagingMode::Manual
        } else {
            PagingMode::Auto
        }
    }
}

/// Whether the loop follows continuation tokens itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    /// Keep fetching until the pages are exhausted or the emit limit is hit
    Auto,
    /// Fetch one page and hand its token back to the caller
    Manual,
}

/// What a fetcher should ask the service for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub token: Option<String>,
    /// `None` leaves the page size to the service default
    pub page_size: Option<u32>,
}

/// One page as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self {
            items,
            // Services occasionally send "" for "no more pages"
            next_token: next_token.filter(|token| !token.is_empty()),
        }
    }
}

/// Everything a finished loop produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected<T> {
    pub items: Vec<T>,
    /// Where to resume; `None` once the pages are exhausted
    pub next_token: Option<String>,
    pub pages_fetched: usize,
}
