//! Bounded cursor-pagination loop.

use super::types::{Collected, Page, PageRequest, PagingMode, PagingOptions};
use crate::error::{InvocationError, InvocationResult};
use futures::stream::{self, Stream, TryStreamExt};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::future::Future;
use std::marker::PhantomData;

/// Drives a page fetcher until the pages run out, the emit limit is reached,
/// or (in manual mode) after a single page.
///
/// Pages are requested strictly one after another; each request carries the
/// token returned by the previous page.
pub struct Paginator<T, F> {
    fetch: F,
    options: PagingOptions,
    mode: PagingMode,
    service_max: Option<u32>,
    token: Option<String>,
    seen: HashSet<String>,
    retrieved: usize,
    pages: usize,
    done: bool,
    _item: PhantomData<fn() -> T>,
}

impl<T, F, Fut> Paginator<T, F>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = InvocationResult<Page<T>>>,
{
    pub fn new(options: PagingOptions, service_max: Option<u32>, fetch: F) -> Self {
        let mode = options.mode();
        let token = options.starting_token.clone().filter(|t| !t.is_empty());
        let seen = token.iter().cloned().collect();
        let done = options.max_items == Some(0);
        Self {
            fetch,
            options,
            mode,
            service_max,
            token,
            seen,
            retrieved: 0,
            pages: 0,
            done,
            _item: PhantomData,
        }
    }

    pub fn next_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages
    }

    /// Fetch the next page, or `None` once the loop has stopped.
    ///
    /// An error is terminal: it is returned once and the loop yields nothing
    /// afterwards. Items from earlier pages stay valid.
    pub async fn next_page(&mut self) -> Option<InvocationResult<Page<T>>> {
        if self.done {
            return None;
        }

        let request = PageRequest {
            token: self.token.clone(),
            page_size: self.request_size(),
        };
        let request_token = request.token.clone();
        debug!(
            "Fetching page {} (token: {:?}, page size: {:?})",
            self.pages + 1,
            request.token,
            request.page_size
        );

        let mut page = match (self.fetch)(request).await {
            Ok(page) => page,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };
        self.pages += 1;

        if let Some(limit) = self.options.max_items {
            let remaining = limit.saturating_sub(self.retrieved);
            if page.items.len() > remaining {
                warn!(
                    "Service returned {} items with {} left under --max-items; keeping the \
                     first {}. Resuming fetches this page again",
                    page.items.len(),
                    remaining,
                    remaining
                );
                page.items.truncate(remaining);
                // Resume from the cut page, not past it, so no item is skipped
                self.retrieved += page.items.len();
                self.token = request_token;
                self.done = true;
                return Some(Ok(page));
            }
        }
        self.retrieved += page.items.len();
        self.token = page.next_token.clone();

        if self.mode == PagingMode::Manual {
            self.done = true;
            info!(
                "Retrieved page {} with {} item(s); next token: {}",
                self.pages,
                page.items.len(),
                self.token.as_deref().unwrap_or("<none>")
            );
            return Some(Ok(page));
        }

        match &self.token {
            None => self.done = true,
            Some(_) if self.limit_reached() => self.done = true,
            Some(token) => {
                if !self.seen.insert(token.clone()) {
                    self.done = true;
                    return Some(Err(InvocationError::PaginationStalled {
                        token: token.clone(),
                    }));
                }
            }
        }

        Some(Ok(page))
    }

    /// Run the loop to completion.
    pub async fn collect(mut self) -> InvocationResult<Collected<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await {
            items.extend(page?.items);
        }
        debug!(
            "Pagination finished after {} page(s), {} item(s)",
            self.pages,
            items.len()
        );
        Ok(Collected {
            items,
            next_token: self.token,
            pages_fetched: self.pages,
        })
    }

    /// Lazy item stream; pages are only fetched as items are pulled.
    pub fn into_stream(self) -> impl Stream<Item = InvocationResult<T>> {
        stream::try_unfold(self, |mut paginator| async move {
            match paginator.next_page().await {
                Some(Ok(page)) => Ok(Some((page.items, paginator))),
                Some(Err(err)) => Err(err),
                None => Ok(None),
            }
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
        .try_flatten()
    }

    fn limit_reached(&self) -> bool {
        self.options
            .max_items
            .is_some_and(|limit| self.retrieved >= limit)
    }

    fn clamp(&self, size: u32) -> u32 {
        let size = size.max(1);
        self.service_max.map_or(size, |max| size.min(max))
    }

    fn request_size(&self) -> Option<u32> {
        let preferred = self.options.page_size.map(|size| self.clamp(size));
        match self.options.max_items {
            Some(limit) => {
                let remaining =
                    u32::try_from(limit.saturating_sub(self.retrieved)).unwrap_or(u32::MAX);
                Some(
                    preferred
                        .or(self.service_max)
                        .map_or(remaining, |ceiling| ceiling.min(remaining)),
                )
            }
            None => preferred,
        }
    }
}
